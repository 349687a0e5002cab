use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::commands::ShowArgs;
use crate::common::swatch;
use crate::palettes::get_builtin_palette;

pub(crate) fn palette_show(args: &ShowArgs) -> Result<()> {
	let pal = get_builtin_palette(&args.palette);

	let pal = match args.num_colors {
		Some(n) => pal.take(n).map_err(|e| anyhow!(e))?,
		None => pal,
	};

	println!("{} ({} colors)", pal.name.bold(), pal.len());
	for (i, entry) in pal.colors.iter().enumerate() {
		println!("{:>3}. {} {} {}", i + 1, swatch(&entry.color), entry.color, entry.name.dimmed());
	}

	Ok(())
}
