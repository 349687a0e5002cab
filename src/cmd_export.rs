use anyhow::{anyhow, Result};

use crate::commands::ExportArgs;
use crate::common::write_output;
use vizpal_rs::palettes::targets::format_for_target;

pub(crate) fn palette_export(args: &ExportArgs) -> Result<()> {
	let formatted = format_for_target(args.palette.registry_name(), args.target)
		.map_err(|e| anyhow!(e))?;

	let json = serde_json::to_string_pretty(&formatted)?;

	if let Some(output) = &args.output {
		write_output(output, &(json + "\n"))?;
	} else {
		println!("{json}");
	}

	Ok(())
}
