//! Client configuration
//!
//! Configuration loaded from an `.eatery.toml` file, with environment
//! variable overrides. Lookup order: current working directory, then the
//! home directory, then `EATERY_*` variables, then built-in defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".eatery.toml";

const ENV_BASE_URL: &str = "EATERY_API_URL";
const ENV_TIMEOUT_SECS: &str = "EATERY_API_TIMEOUT_SECS";

/// Client configuration loaded from `.eatery.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the review service, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:4000/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Load config from CWD first, then home directory, then apply env
    /// overrides; falls back to defaults when nothing is found.
    pub fn load() -> Self {
        // A .env file next to the binary may define the EATERY_* variables
        dotenvy::dotenv().ok();

        let config = match load_config_file() {
            Some((path, content)) => match toml::from_str(&content) {
                Ok(config) => {
                    log::debug!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.apply_env()
    }

    /// Load config from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config.apply_env())
    }

    fn apply_env(mut self) -> Self {
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.is_empty() {
                self.base_url = base_url;
            }
        }
        if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
            match timeout.parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => log::warn!("Ignoring non-numeric {}: {}", ENV_TIMEOUT_SECS, timeout),
            }
        }
        self
    }
}

/// Find `.eatery.toml` in the CWD, then the home directory.
fn load_config_file() -> Option<(PathBuf, String)> {
    let cwd_path = PathBuf::from(CONFIG_FILE);
    if let Ok(content) = std::fs::read_to_string(&cwd_path) {
        return Some((cwd_path, content));
    }

    let home_path = dirs::home_dir()?.join(CONFIG_FILE);
    let content = std::fs::read_to_string(&home_path).ok()?;
    Some((home_path, content))
}
