use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BumpError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "bumppkg.toml";

/// Represents the complete configuration for bump-pkg.
///
/// Contains the default manifest path, pre-release defaults and output options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default)]
    pub pre_release: PreReleaseConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the default manifest path.
fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

/// Returns the default pre-release identifier.
fn default_identifier() -> String {
    "beta".to_string()
}

fn default_true() -> bool {
    true
}

/// Defaults for pre-release labels.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PreReleaseConfig {
    /// Identifier used when none is given on the command line
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

impl Default for PreReleaseConfig {
    fn default() -> Self {
        PreReleaseConfig {
            identifier: default_identifier(),
        }
    }
}

/// How rewritten manifests are laid out.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            trailing_newline: default_true(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            pre_release: PreReleaseConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumppkg.toml` in current directory
/// 3. `.bumppkg.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if !path.exists() {
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| BumpError::io(&path, e))?;
    parse_config(&config_str)
        .map_err(|e| BumpError::config(format!("{}: {}", path.display(), e)))
}

/// Parses configuration from TOML text.
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}
