use std::path::PathBuf;
use std::process;

use log::error;

use crate::builder;
use crate::config;

/// Handle the clean command
pub fn handle_clean_command(
    global_source: Option<&PathBuf>,
    global_destination: Option<&PathBuf>,
    global_config: Option<&PathBuf>,
) {
    let source_dir = global_source
        .cloned()
        .unwrap_or_else(|| PathBuf::from("./"));

    let mut config = match config::load_config(&source_dir, global_config.cloned()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            process::exit(1);
        }
    };
    if let Some(dest) = global_destination {
        config.destination = dest.clone();
    }

    if let Err(e) = builder::clean_destination(&config) {
        error!("Clean failed: {}", e);
        process::exit(1);
    }
}
