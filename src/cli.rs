use clap::builder::styling::{AnsiColor, Color, Style};
use clap::{builder::Styles, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

fn styles() -> Styles {
	let blue = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
	Styles::styled()
		.header(blue.bold())
		.usage(blue.bold())
		.literal(blue)
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(blue)
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "vibemap",
	author,
	version,
	about = "Semantic social-behavior mapping and classification",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {generate}                     {generate_desc}
  {bin} {analyze}  {analyze_args}   {analyze_desc}
  {bin} {map}                          {map_desc}
  {bin} {help}     {help_args}                 {help_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "vibemap".bright_blue(),
		generate = "generate".yellow(),
		generate_desc = "Build the reference baseline".dimmed(),
		analyze = "analyze".yellow(),
		analyze_args = "\"I avoid eye contact\"",
		analyze_desc = "Classify a behavior description".dimmed(),
		map = "map".yellow(),
		map_desc = "Explore the map interactively".dimmed(),
		help = "help".yellow(),
		help_args = "analyze",
		help_desc = "Show help for analyze".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Embedding provider API token (overrides VIBEMAP_API_TOKEN)
	#[arg(short = 't', long = "token", global = true)]
	pub token: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build the reference baseline: embed the corpus, fit the projection
	Generate {
		/// Directory holding the .vibemap data folder
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,

		/// Rebuild even if a baseline already exists
		#[arg(short = 'f', long = "force")]
		force: bool,
	},

	/// Classify a behavior description against the baseline
	Analyze {
		/// Free-text description of the behavior
		#[arg(value_name = "TEXT")]
		text: String,

		/// Directory holding the .vibemap data folder
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,
	},

	/// Interactive map: drag to pan, wheel to zoom, hover to inspect
	Map {
		/// Directory holding the .vibemap data folder
		#[arg(short = 'd', long = "dir", default_value = ".")]
		directory: PathBuf,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
