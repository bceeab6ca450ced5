use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::{Config, ConfigOverrides};
use crate::config::validation;
use crate::utils::error::{BoxResult, DocsmithError};

/// Configuration file names probed when none is given explicitly
const CONFIG_FILES: [&str; 3] = ["docsmith.yml", "docsmith.yaml", "docsmith.toml"];

/// Load site configuration, apply command line overrides and validate it.
///
/// An explicitly requested file must exist; without one the well-known names
/// are probed in the working directory and pure defaults are used when none
/// is present.
pub fn load_config(config_file: Option<&Path>, overrides: &ConfigOverrides) -> BoxResult<Config> {
    let mut config = match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(DocsmithError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            read_config_file(path)?
        }
        None => match find_default_config_file() {
            Some(path) => read_config_file(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        },
    };

    config.apply_overrides(overrides);
    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file() -> Option<PathBuf> {
    CONFIG_FILES.iter().map(PathBuf::from).find(|path| path.exists())
}

/// Read and parse a configuration file based on its extension
fn read_config_file(path: &Path) -> BoxResult<Config> {
    debug!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        DocsmithError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase());
    let config = match ext.as_deref() {
        Some("toml") => {
            toml::from_str(&content).map_err(|e| parse_error(path, e))?
        }
        Some("json") => {
            serde_json::from_str(&content).map_err(|e| parse_error(path, e))?
        }
        // YAML is assumed for .yml, .yaml and anything unrecognised
        _ => serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))?,
    };

    Ok(config)
}

fn parse_error(path: &Path, err: impl fmt::Display) -> Box<dyn Error> {
    DocsmithError::Config(format!("failed to parse {}: {}", path.display(), err)).into()
}
