use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_css::palette_css;
use crate::cmd_export::palette_export;
use crate::cmd_list::palette_list;
use crate::cmd_show::palette_show;
use crate::commands::{Cli, Commands};

mod cmd_css;
mod cmd_export;
mod cmd_list;
mod cmd_show;
mod commands;
mod common;
mod palettes;

fn main() -> ExitCode {
	let cli = Cli::parse();
	let output: Option<PathBuf>;

	let result = match &cli.command {
		Some(Commands::List) => {
			output = None;
			palette_list()
		}
		Some(Commands::Show(args)) => {
			output = None;
			palette_show(args)
		}
		Some(Commands::Css(args)) => {
			output = args.output.clone();
			palette_css(args)
		}
		Some(Commands::Export(args)) => {
			output = args.output.clone();
			palette_export(args)
		}
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			if let Some(output) = output {
				match fs::metadata(&output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						println!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e}");
			ExitCode::FAILURE
		}
	}
}
