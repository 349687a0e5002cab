use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::common::swatch;
use vizpal_rs::palettes::ramps::{CONTINUOUS_COLORMAPS, DIVERGING_COLORMAPS};
use vizpal_rs::palettes::registry::{get_palette, PALETTE_NAMES};

pub(crate) fn palette_list() -> Result<()> {
	println!("{}", "Categorical palettes:".bold());
	for name in PALETTE_NAMES {
		let pal = get_palette(name).map_err(|e| anyhow!(e))?;

		let swatches = pal.colors.iter()
			.map(|e| swatch(&e.color).to_string())
			.collect::<Vec<String>>()
			.join("");
		println!("  {name} ({} colors)", pal.len());
		println!("  {swatches}");
	}

	println!("{}", "Sequential colormaps:".bold());
	println!("  {}", CONTINUOUS_COLORMAPS.join(", "));

	println!("{}", "Diverging colormaps:".bold());
	println!("  {}", DIVERGING_COLORMAPS.join(", "));

	Ok(())
}
