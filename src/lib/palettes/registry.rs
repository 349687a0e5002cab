use crate::palettes::palette::{Color, Palette, PaletteError};

// Okabe-Ito categorical palette
// https://jfly.uni-koeln.de/color/
const OKABE_ITO: [(u32, &str); 8] = [
	(0xE69F00, "Orange"),
	(0x56B4E9, "Sky Blue"),
	(0x009E73, "Bluish Green"),
	(0xF0E442, "Yellow"),
	(0x0072B2, "Blue"),
	(0xD55E00, "Vermillion"),
	(0xCC79A7, "Reddish Purple"),
	(0x000000, "Black"),
];

// ColorBrewer Dark2
// https://colorbrewer2.org/#type=qualitative&scheme=Dark2&n=8
const COLORBREWER_DARK2: [(u32, &str); 8] = [
	(0x1B9E77, "Teal"),
	(0xD95F02, "Orange"),
	(0x7570B3, "Purple"),
	(0xE7298A, "Magenta"),
	(0x66A61E, "Green"),
	(0xE6AB02, "Yellow"),
	(0xA6761D, "Brown"),
	(0x666666, "Gray"),
];

// Paul Tol's vibrant and muted schemes
// https://sronpersonalpages.nl/~pault/
const PAUL_TOL_VIBRANT: [(u32, &str); 7] = [
	(0xEE7733, "Orange"),
	(0x0077BB, "Blue"),
	(0x33BBEE, "Cyan"),
	(0xEE3377, "Magenta"),
	(0xCC3311, "Red"),
	(0x009988, "Teal"),
	(0xBBBBBB, "Gray"),
];

const PAUL_TOL_MUTED: [(u32, &str); 9] = [
	(0xCC6677, "Rose"),
	(0x332288, "Indigo"),
	(0xDDCC77, "Sand"),
	(0x117733, "Green"),
	(0x88CCEE, "Cyan"),
	(0x882255, "Wine"),
	(0x44AA99, "Teal"),
	(0x999933, "Olive"),
	(0xAA4499, "Purple"),
];

/// Identifiers of all registered palettes, in registry order.
pub const PALETTE_NAMES: [&str; 4] = [
	"okabe_ito",
	"colorbrewer_dark2",
	"paul_tol_vibrant",
	"paul_tol_muted",
];

fn palette_table(name: &str) -> Result<&'static [(u32, &'static str)], PaletteError> {
	match name {
		"okabe_ito" => Ok(&OKABE_ITO),
		"colorbrewer_dark2" => Ok(&COLORBREWER_DARK2),
		"paul_tol_vibrant" => Ok(&PAUL_TOL_VIBRANT),
		"paul_tol_muted" => Ok(&PAUL_TOL_MUTED),
		_ => Err(PaletteError::UnknownPalette { name: name.to_string() }),
	}
}

/// Looks up a registered palette by its identifier.
pub fn get_palette(name: &str) -> Result<Palette, PaletteError> {
	let table = palette_table(name)?;

	let mut pal = Palette {
		name: name.to_string(),
		..Default::default()
	};
	for (rgb, color_name) in table {
		pal.push_named_color(Color::from(*rgb), color_name.to_string());
	}

	Ok(pal)
}

/// Looks up a registered palette and returns its first `n` colors in
/// original order. `n = 0` is valid and yields an empty palette; `n` past
/// the end of the palette fails with [PaletteError::InsufficientColors].
/// Without `n`, the whole palette is returned.
pub fn get_categorical_palette(name: &str, n: Option<usize>) -> Result<Palette, PaletteError> {
	let pal = get_palette(name)?;

	match n {
		Some(n) => pal.take(n),
		None => Ok(pal),
	}
}
