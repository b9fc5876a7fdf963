use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;

use crate::config::Config;
use crate::utils::error::{BoxResult, PagetocError};
use crate::utils::fs;

lazy_static! {
    // Conservative identifier shape shared by element ids, the list class
    // and the id prefix. Keeps the values safe to embed in CSS selectors
    // and attribute values without further escaping.
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
}

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_source_directory(config)?;

    validate_identifier("content_root_id", &config.content_root_id)?;
    validate_identifier("toc_container_id", &config.toc_container_id)?;
    validate_identifier("list_class", &config.list_class)?;
    validate_identifier("id_prefix", &config.id_prefix)?;

    if config.content_root_id == config.toc_container_id {
        return Err(PagetocError::Config(format!(
            "content_root_id and toc_container_id must differ (both are '{}')",
            config.content_root_id
        ))
        .into());
    }

    if config.min_headings < 2 {
        warn!(
            "min_headings is {}; containers will be kept even on pages a table of contents cannot help",
            config.min_headings
        );
    }

    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(PagetocError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        ))
        .into());
    }

    if !fs::is_directory(source) {
        return Err(PagetocError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        ))
        .into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

fn validate_identifier(field: &str, value: &str) -> BoxResult<()> {
    if IDENTIFIER_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(PagetocError::Config(format!(
            "{} '{}' is not a valid identifier (expected a letter followed by letters, digits, '-' or '_')",
            field, value
        ))
        .into())
    }
}
