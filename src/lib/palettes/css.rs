use regex::Regex;

use crate::palettes::palette::PaletteError;
use crate::palettes::registry::get_palette;

/// Derives the default CSS prefix from a palette identifier, so that
/// "okabe_ito" becomes "--okabe-ito-1" and friends.
fn default_prefix(palette_name: &str) -> String {
	palette_name.replace('_', "-")
}

fn validate_prefix(prefix: &str) -> Result<(), PaletteError> {
	let re = Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap();
	if !re.is_match(prefix) {
		return Err(PaletteError::InvalidCssPrefix { prefix: prefix.to_string() });
	}

	Ok(())
}

/// Maps every color of the named palette to a CSS custom property
/// identifier. Identifiers are "--<prefix>-<index>" with a 1-based index;
/// the prefix defaults to the palette name with underscores turned into
/// hyphens. The returned pairs preserve palette order and are unique.
pub fn to_css_variables(palette_name: &str, prefix: Option<&str>) -> Result<Vec<(String, String)>, PaletteError> {
	let pal = get_palette(palette_name)?;

	let prefix = match prefix {
		Some(p) => p.to_string(),
		None => default_prefix(palette_name),
	};
	validate_prefix(&prefix)?;

	let vars = pal.colors.iter().enumerate()
		.map(|(i, e)| (format!("--{prefix}-{}", i + 1), e.color.to_string()))
		.collect();

	Ok(vars)
}

/// Renders the named palette as a ":root" stylesheet block, one
/// "--<identifier>: <color>;" declaration per palette entry.
pub fn css_stylesheet(palette_name: &str, prefix: Option<&str>) -> Result<String, PaletteError> {
	let vars = to_css_variables(palette_name, prefix)?;

	let mut lines: Vec<String> = vec![":root {".to_string()];
	for (identifier, color) in &vars {
		lines.push(format!("  {identifier}: {color};"));
	}
	lines.push("}".to_string());

	Ok(lines.join("\n") + "\n")
}
