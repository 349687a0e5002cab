use crate::palettes::palette::PaletteError;

/// Sequential colormap names safe under common color vision deficiencies.
/// These are names understood by the plotting libraries themselves; no
/// color data is stored for them here.
pub const CONTINUOUS_COLORMAPS: [&str; 8] = [
	"viridis",
	"plasma",
	"inferno",
	"magma",
	"cividis",
	"blues",
	"oranges",
	"purples",
];

/// Diverging colormap names with distinguishable endpoints.
pub const DIVERGING_COLORMAPS: [&str; 3] = [
	"BrBG",
	"PuOr",
	"coolwarm",
];

/// Validates a sequential colormap name and returns its canonical form.
pub fn continuous_colormap(name: &str) -> Result<&'static str, PaletteError> {
	CONTINUOUS_COLORMAPS.iter()
		.find(|&&m| m == name)
		.copied()
		.ok_or_else(|| PaletteError::UnknownColormap { name: name.to_string() })
}

/// Validates a diverging colormap name and returns its canonical form.
pub fn diverging_colormap(name: &str) -> Result<&'static str, PaletteError> {
	DIVERGING_COLORMAPS.iter()
		.find(|&&m| m == name)
		.copied()
		.ok_or_else(|| PaletteError::UnknownColormap { name: name.to_string() })
}
