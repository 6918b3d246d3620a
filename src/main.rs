//! VibeMap - semantic social-behavior mapping
//!
//! Embeds a labeled behavior corpus, projects it to 2D with seeded UMAP,
//! classifies new descriptions by cosine similarity, and renders an
//! interactive terminal map.

use clap::{CommandFactory, Parser};

use vibemap::cli::{Cli, Command};
use vibemap::{commands, ui};

fn main() {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);
	let token = cli.token.as_deref();

	let result = match cli.command {
		Command::Generate { directory, force } => {
			ui::print_logo();
			commands::generate::run(&directory, force, token)
		}
		Command::Analyze { text, directory } => {
			ui::print_logo();
			commands::analyze::run(&text, &directory, token)
		}
		Command::Map { directory } => commands::map::run(&directory),
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help().unwrap();
				} else {
					eprintln!("Unknown subcommand: {}", sub);
					cmd.print_help().unwrap();
				}
			} else {
				cmd.print_help().unwrap();
			}
			Ok(())
		}
	};

	// Operation boundary: every failure reduces to one status line
	if let Err(e) = result {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}
