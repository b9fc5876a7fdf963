use std::path::PathBuf;
use std::process;

use log::error;

use crate::builder;
use crate::cli::types::Commands;
use crate::config;

/// Handle the build command
pub fn handle_build_command(
    command: &Commands,
    global_source: Option<&PathBuf>,
    global_destination: Option<&PathBuf>,
    global_config: Option<&PathBuf>,
) {
    let Commands::Build {
        config: command_config,
        source,
        destination,
    } = command
    else {
        return;
    };

    let source_dir = source
        .clone()
        .or_else(|| global_source.cloned())
        .unwrap_or_else(|| PathBuf::from("./"));
    let config_file = command_config.clone().or_else(|| global_config.cloned());

    let mut config = match config::load_config(&source_dir, config_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };
    if let Some(dest) = destination.clone().or_else(|| global_destination.cloned()) {
        config.destination = dest;
    }

    if let Err(e) = builder::build_site(&config) {
        error!("Build failed: {}", e);
        process::exit(1);
    }
}
