use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use colored::{ColoredString, Colorize};
use tempfile::Builder;

use vizpal_rs::palettes::palette::Color;

/// Renders a color as a block of terminal background color.
pub(crate) fn swatch(color: &Color) -> ColoredString {
	"    ".on_truecolor(color.r, color.g, color.b)
}

/// Writes `contents` next to the destination first, then swaps the finished
/// file into place so a failed write never leaves a half-written stylesheet.
pub(crate) fn write_output(path: &Path, contents: &str) -> Result<()> {
	let dir = match path.parent() {
		Some(p) if p != Path::new("") => p.to_path_buf(),
		_ => fs::canonicalize(".")?,
	};

	let mut file = Builder::new()
		.prefix(".vp-out")
		.tempfile_in(dir)?;
	file.write_all(contents.as_bytes())?;
	file.persist(path).map_err(|e| anyhow!(e))?;

	Ok(())
}
