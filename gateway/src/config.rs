//! Gateway configuration.
//!
//! ```toml
//! provider = "minimax"
//!
//! [minimax]
//! base_url = "https://api.minimaxi.com/v1"
//! api_key = "${MINIMAX_API_KEY}"
//! ```
//!
//! Both connection fields are optional; the selected strategy's
//! [`ConnectionDefaults`](crate::strategy::ConnectionDefaults) fill the gaps.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use crate::minimax::MINIMAX_BASE_URL;

#[derive(Debug, Default, Deserialize)]
pub struct RelayConfig {
    /// Provider name resolved through [`crate::registry::strategy_for`].
    pub provider: Option<String>,
    pub minimax: Option<MinimaxConfig>,
}

#[derive(Default, Deserialize)]
pub struct MinimaxConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

// Manual Debug impl to prevent leaking API keys in logs.
impl std::fmt::Debug for MinimaxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimaxConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file. A missing file is not an error;
    /// it means "all defaults".
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("failed to read config at {}: {err}", path.display());
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("failed to parse config at {}: {err}", path.display());
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }
}

impl MinimaxConfig {
    /// Endpoint to use, falling back to the official API.
    #[must_use]
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| MINIMAX_BASE_URL.to_string())
    }

    /// API key with `${ENV_VAR}` references expanded. Empty when unset.
    #[must_use]
    pub fn resolved_api_key(&self) -> String {
        self.api_key
            .as_deref()
            .map(expand_env_vars)
            .unwrap_or_default()
    }
}

/// Replace every `${NAME}` with the value of the `NAME` environment variable,
/// or the empty string when it is unset. Unclosed references are left as-is.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &after[..end];
        if !name.is_empty() {
            out.push_str(&env::var(name).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
