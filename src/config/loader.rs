use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, PagetocError};

/// Configuration file names to look for
pub const CONFIG_FILES: [&str; 3] = ["_toc.yml", "_toc.yaml", "_toc.toml"];

/// Load configuration from the source directory
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_file: Option<PathBuf>,
) -> BoxResult<Config> {
    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(&source_dir),
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    // Set source directory if not already set
    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file that exists
fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<Config> {
    if !path.exists() {
        return Err(PagetocError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PagetocError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        // Assume YAML when there is no extension
        Some("yml") | Some("yaml") | None => {
            serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))
        }
        Some("toml") => toml::from_str(&content).map_err(|e| parse_error(path, e)),
        Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Some(other) => Err(PagetocError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))
        .into()),
    }
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> Box<dyn std::error::Error> {
    PagetocError::Config(format!("Failed to parse {}: {}", path.display(), err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pagetoc-loader-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_when_no_config_file() {
        let dir = scratch_dir("defaults");
        let config = load_config(&dir, None).unwrap();

        assert_eq!(config.source, dir);
        assert_eq!(config.toc_container_id, "toc");
    }

    #[test]
    fn test_loads_yaml_config() {
        let dir = scratch_dir("yaml");
        fs::write(
            dir.join("_toc.yml"),
            "content_root_id: main\nmin_headings: 3\n",
        )
        .unwrap();

        let config = load_config(&dir, None).unwrap();
        assert_eq!(config.content_root_id, "main");
        assert_eq!(config.min_headings, 3);
        // Untouched fields keep their defaults
        assert_eq!(config.list_class, "toc");
    }

    #[test]
    fn test_loads_toml_config() {
        let dir = scratch_dir("toml");
        fs::write(dir.join("_toc.toml"), "ordered_list = true\n").unwrap();

        let config = load_config(&dir, None).unwrap();
        assert!(config.ordered_list);
    }

    #[test]
    fn test_explicit_config_file_wins() {
        let dir = scratch_dir("explicit");
        fs::write(dir.join("_toc.yml"), "id_prefix: found\n").unwrap();
        let custom = dir.join("custom.yaml");
        fs::write(&custom, "id_prefix: chosen\n").unwrap();

        let config = load_config(&dir, Some(custom)).unwrap();
        assert_eq!(config.id_prefix, "chosen");
    }

    #[test]
    fn test_loads_json_config_when_named_explicitly() {
        let dir = scratch_dir("json");
        let custom = dir.join("toc.json");
        fs::write(&custom, "{\"min_headings\": 4}").unwrap();

        let config = load_config(&dir, Some(custom)).unwrap();
        assert_eq!(config.min_headings, 4);
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let dir = scratch_dir("missing");
        let result = load_config(&dir, Some(dir.join("nope.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_identifier_is_rejected() {
        let dir = scratch_dir("invalid-id");
        fs::write(dir.join("_toc.yml"), "toc_container_id: \"not valid\"\n").unwrap();

        let result = load_config(&dir, None);
        assert!(result.is_err());
    }
}
