use chrono::Utc;
use moltool_core::time::UnixTimeExt;
use moltool_core::{create_new_directory, DirectoryCreation};

use crate::cli::MkdirArgs;
use crate::config::MolToolConfig;
use crate::constants::exit_codes;

pub fn handle_mkdir(args: &MkdirArgs, config: &MolToolConfig) -> anyhow::Result<()> {
    let base = match &args.base {
        Some(base) => base.clone(),
        None => std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to resolve current directory: {}", e))?,
    };
    let name = if args.stamp {
        args.name
            .appended_unix_time(&Utc::now(), &config.output.timestamp_separator)
    } else {
        args.name.clone()
    };

    let result = create_new_directory(&name, &args.subdirectories, &base, args.parents);
    let layout = result.layout();
    println!("{}", layout.root.display());
    for sub in &layout.subdirectories {
        println!("{}", sub.display());
    }

    if let DirectoryCreation::Degraded { error, .. } = &result {
        eprintln!(
            "An error occurred when creating a new directory: {}. Falling back to {}.",
            error,
            base.display()
        );
        std::process::exit(exit_codes::DEGRADED);
    }
    Ok(())
}
