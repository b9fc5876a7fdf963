use std::path::PathBuf;
use std::process;

use log::error;

use crate::builder;
use crate::cli::types::Commands;
use crate::config;

/// Handle the check command
pub fn handle_check_command(
    command: &Commands,
    global_source: Option<&PathBuf>,
    global_config: Option<&PathBuf>,
) {
    let Commands::Check {
        config: command_config,
        source,
    } = command
    else {
        return;
    };

    let source_dir = source
        .clone()
        .or_else(|| global_source.cloned())
        .unwrap_or_else(|| PathBuf::from("./"));
    let config_file = command_config.clone().or_else(|| global_config.cloned());

    let config = match config::load_config(&source_dir, config_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };

    match builder::check_site(&config) {
        Ok(stats) if stats.failed > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            error!("Check failed: {}", e);
            process::exit(1);
        }
    }
}
