//! moltool CLI - interactive input, formatting and directory helpers
//!
//! Every subcommand is a thin shell over a `moltool-core` helper, so the
//! helpers can be driven from scripts as well as from the geometry tools.

use std::io::IsTerminal;

use chrono::Utc;
use clap::Parser;

use moltool_core::console::welcome_banner;
use moltool_core::time::year_in;
use moltool_core::MolToolError;

mod cli;
mod commands;
mod config;
mod constants;
mod logging;

use crate::cli::{Cli, Commands};
use crate::config::{default_config_path, load_config, MolToolConfig};
use crate::constants::{exit_codes, PROGRAM_TITLE};

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        match err.downcast_ref::<MolToolError>() {
            Some(MolToolError::InputClosed) => {
                eprintln!("\n{}", MolToolError::InputClosed);
                std::process::exit(exit_codes::INPUT_CLOSED);
            }
            Some(MolToolError::InvalidInput(_)) => {
                eprintln!("Error: {}", err);
                std::process::exit(exit_codes::INVALID_INPUT);
            }
            _ => {
                eprintln!("Error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli)?;

    if is_interactive(&cli.command) && !cli.quiet && std::io::stdin().is_terminal() {
        let year = year_in(&Utc::now(), config.timezone()?);
        println!("{}", welcome_banner(PROGRAM_TITLE, year));
    }

    match &cli.command {
        Commands::Input(args) => commands::handle_input(args, &config),
        Commands::ImportXyz => commands::handle_import_xyz(&config),
        Commands::ImportXyzDir => commands::handle_import_xyz_dir(),
        Commands::ExportPath(args) => commands::handle_export_path(args),
        Commands::Mkdir(args) => commands::handle_mkdir(args, &config),
        Commands::Csv(args) => commands::handle_csv(args, &config),
        Commands::Round(args) => commands::handle_round(args, &config),
        Commands::Pad(args) => commands::handle_pad(args),
        Commands::Stamp(args) => commands::handle_stamp(args, &config),
        Commands::Now(args) => commands::handle_now(args, &config),
        Commands::Depth(args) => commands::handle_depth(args),
        Commands::Completions(args) => commands::handle_completions(args.shell),
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<MolToolConfig> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!(error = %err, "no default config location");
                return Ok(MolToolConfig::default());
            }
        },
    };
    let config = load_config(&path)?;
    tracing::debug!(path = %path.display(), mode = %config.program.mode, "config loaded");
    Ok(config)
}

fn is_interactive(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Input(_) | Commands::ImportXyz | Commands::ImportXyzDir | Commands::ExportPath(_)
    )
}
