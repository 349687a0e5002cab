use vizpal_rs::palettes::palette::Palette;
use vizpal_rs::palettes::registry::get_palette;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum BuiltInPalette {
	// by Masataka Okabe and Kei Ito
	// https://jfly.uni-koeln.de/color/
	OkabeIto,

	// by Cynthia Brewer
	// https://colorbrewer2.org/
	ColorbrewerDark2,

	// by Paul Tol
	// https://sronpersonalpages.nl/~pault/
	PaulTolVibrant,
	PaulTolMuted,
}

impl BuiltInPalette {
	pub fn registry_name(&self) -> &'static str {
		match self {
			BuiltInPalette::OkabeIto => "okabe_ito",
			BuiltInPalette::ColorbrewerDark2 => "colorbrewer_dark2",
			BuiltInPalette::PaulTolVibrant => "paul_tol_vibrant",
			BuiltInPalette::PaulTolMuted => "paul_tol_muted",
		}
	}
}

pub fn get_builtin_palette(pal: &BuiltInPalette) -> Palette {
	// registry_name always names a registered palette
	get_palette(pal.registry_name()).unwrap()
}
