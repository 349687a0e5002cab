use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::palettes::palette::PaletteError;
use crate::palettes::registry::get_palette;

/// The plotting ecosystems a palette can be formatted for.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Target {
	Matplotlib,
	Seaborn,
	Plotly,
	VegaLite,
}

impl Display for Target {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Target::Matplotlib => write!(f, "matplotlib"),
			Target::Seaborn => write!(f, "seaborn"),
			Target::Plotly => write!(f, "plotly"),
			Target::VegaLite => write!(f, "vega-lite"),
		}
	}
}

/// The "range" object a Vega-Lite color scale takes.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct VegaLiteScale {
	pub range: Vec<String>,
}

/// A palette reshaped into the literal form a target's configuration API
/// accepts. Serializes untagged: a sequence stays a plain JSON array, a
/// scale stays a JSON object.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum TargetPalette {
	Sequence(Vec<String>),
	Scale(VegaLiteScale),
}

impl TargetPalette {
	pub fn hex_colors(&self) -> &[String] {
		match self {
			TargetPalette::Sequence(colors) => colors,
			TargetPalette::Scale(scale) => &scale.range,
		}
	}
}

/// Reshapes the named palette for a plotting target. Matplotlib, seaborn
/// and plotly all take their colors as a plain ordered list of hex strings;
/// Vega-Lite takes a scale object with a "range" array. Color values pass
/// through untouched.
pub fn format_for_target(palette_name: &str, target: Target) -> Result<TargetPalette, PaletteError> {
	let hex_colors = get_palette(palette_name)?.hex_colors();

	match target {
		Target::Matplotlib | Target::Seaborn | Target::Plotly => Ok(TargetPalette::Sequence(hex_colors)),
		Target::VegaLite => Ok(TargetPalette::Scale(VegaLiteScale { range: hex_colors })),
	}
}
