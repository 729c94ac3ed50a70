// Copyright (C) 2024-2025 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_NAVIGATION_PATTERN: &str = "777+777=";
pub const DEFAULT_ALERT_DURATION_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub patterns: PatternConfig,
    pub emergency: EmergencyConfig,
    pub ui: UiConfig,
}

/// Key strings are written the way the keypad labels them (`×` and `÷`), the
/// ASCII forms `*`, `x` and `/` are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    pub navigation: String,
    pub results: Vec<ResultPatternConfig>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            navigation: DEFAULT_NAVIGATION_PATTERN.to_string(),
            results: default_result_patterns(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultPatternConfig {
    pub key: String,
    pub value: String,
}

impl ResultPatternConfig {
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[must_use]
pub fn default_result_patterns() -> Vec<ResultPatternConfig> {
    vec![
        ResultPatternConfig::new("777+777=", "1554"),
        ResultPatternConfig::new("911×2=", "1822"),
        ResultPatternConfig::new("123+456=", "579"),
        ResultPatternConfig::new("555-333=", "222"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmergencyConfig {
    pub alert_duration_secs: u64,
}

impl Default for EmergencyConfig {
    fn default() -> Self {
        Self {
            alert_duration_secs: DEFAULT_ALERT_DURATION_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub show_hint: bool,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the platform config directory is
    /// consulted and a missing file there yields the defaults.
    ///
    /// # Errors
    /// Will return an error if the file cannot be read or is not valid TOML for `Config`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                warn!("Unable to determine the config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// # Errors
    /// Will return an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("io.github", "fredclausen", "cloakcalc")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
