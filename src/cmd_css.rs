use anyhow::{anyhow, Result};

use crate::commands::CssArgs;
use crate::common::write_output;
use vizpal_rs::palettes::css::css_stylesheet;

pub(crate) fn palette_css(args: &CssArgs) -> Result<()> {
	let stylesheet = css_stylesheet(args.palette.registry_name(), args.prefix.as_deref())
		.map_err(|e| anyhow!(e))?;

	if let Some(output) = &args.output {
		write_output(output, &stylesheet)?;
	} else {
		print!("{stylesheet}");
	}

	Ok(())
}
