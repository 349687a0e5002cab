use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Entry {
	pub color: Color,
	pub name: String,
}

/// An ordered set of colors. Index 0 is the first category assigned;
/// no operation ever rearranges the order.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub name: String,
	pub colors: Vec<Entry>,
}

impl Palette {
	pub fn push_named_color(&mut self, c: Color, name: String) {
		self.colors.push(Entry { color: c, name });
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Returns a palette containing the first `n` entries in original order.
	/// Asking for more entries than the palette holds is an error; colors are
	/// never cycled to pad out the result.
	pub fn take(&self, n: usize) -> Result<Palette, PaletteError> {
		if n > self.len() {
			return Err(PaletteError::InsufficientColors {
				requested: n,
				available: self.len(),
			});
		}

		Ok(Palette {
			name: self.name.clone(),
			colors: self.colors[..n].to_vec(),
		})
	}

	/// The palette's colors as uppercase "#RRGGBB" strings.
	pub fn hex_colors(&self) -> Vec<String> {
		self.colors.iter().map(|e| e.color.to_string()).collect()
	}
}

#[derive(Debug, PartialEq)]
pub enum PaletteError {
	UnknownPalette { name: String },
	InsufficientColors { requested: usize, available: usize },
	UnknownColormap { name: String },
	InvalidCssPrefix { prefix: String },
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::UnknownPalette { name } => write!(f, "Unknown palette \"{name}\""),
			PaletteError::InsufficientColors { requested, available } => write!(f, "Requested {requested} colors but the palette only has {available}"),
			PaletteError::UnknownColormap { name } => write!(f, "Unknown colormap \"{name}\""),
			PaletteError::InvalidCssPrefix { prefix } => write!(f, "\"{prefix}\" is not usable as a CSS custom property prefix"),
		}
	}
}
