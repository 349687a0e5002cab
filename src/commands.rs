use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use crate::palettes::BuiltInPalette;
use vizpal_rs::palettes::targets::Target;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Colorblind-safe palettes for charts and stylesheets")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(value_enum, help = "The palette to show.")]
	pub palette: BuiltInPalette,

	#[arg(short, long, help = "Limits output to the first N colors.")]
	pub num_colors: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CssArgs {
	#[arg(value_enum, help = "The palette to render as CSS custom properties.")]
	pub palette: BuiltInPalette,

	#[arg(short, long, help = "Overrides the custom property prefix derived from the palette name.")]
	pub prefix: Option<String>,

	#[arg(short, long, help = "Writes the stylesheet to a file instead of stdout.")]
	pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExportArgs {
	#[arg(value_enum, help = "The palette to export.")]
	pub palette: BuiltInPalette,

	#[arg(short, long, value_enum, help = "The plotting library the output is shaped for.")]
	pub target: Target,

	#[arg(short, long, help = "Writes the JSON to a file instead of stdout.")]
	pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Lists all palettes and colormap names.")]
	List,
	#[command(about = "Shows a palette's colors.")]
	Show(ShowArgs),
	#[command(about = "Emits a palette as a CSS custom property block.")]
	Css(CssArgs),
	#[command(about = "Emits a palette in a plotting library's configuration shape.")]
	Export(ExportArgs),
}
