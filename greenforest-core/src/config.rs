//! Global greenforest configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};

static DEFAULT_DATA_PATH: &str = "~/greenforest";
pub static DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 20;

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn is_default_data_path(p: &PathBuf) -> bool {
    *p == default_data_path()
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn is_default_gemini_model(model: &String) -> bool {
    model == DEFAULT_GEMINI_MODEL
}

fn default_suggest_timeout() -> u64 {
    DEFAULT_SUGGEST_TIMEOUT_SECS
}

fn is_default_suggest_timeout(secs: &u64) -> bool {
    *secs == DEFAULT_SUGGEST_TIMEOUT_SECS
}

/// Global configuration at ~/.config/greenforest/config.toml
///
/// Every key can be overridden with a `GREENFOREST_`-prefixed environment
/// variable (e.g. `GREENFOREST_DATA_DIR`). The Gemini key also falls back to
/// `GEMINI_API_KEY` and `API_KEY`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StudioConfig {
    #[serde(default = "default_data_path", skip_serializing_if = "is_default_data_path")]
    pub data_dir: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    #[serde(default = "default_gemini_model", skip_serializing_if = "is_default_gemini_model")]
    pub gemini_model: String,

    #[serde(default = "default_suggest_timeout", skip_serializing_if = "is_default_suggest_timeout")]
    pub suggest_timeout_secs: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        StudioConfig {
            data_dir: default_data_path(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            suggest_timeout_secs: DEFAULT_SUGGEST_TIMEOUT_SECS,
        }
    }
}

impl StudioConfig {
    pub fn config_path() -> StudioResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| StudioError::Config("Could not determine config directory".into()))?
            .join("greenforest");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, writing a commented-out default file on first run.
    pub fn load() -> StudioResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> StudioResult<Self> {
        let mut config: StudioConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("GREENFOREST").try_parsing(true))
            .build()
            .map_err(|e| StudioError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| StudioError::Config(e.to_string()))?;

        if config.gemini_api_key.is_none() {
            config.gemini_api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok();
        }
        config.gemini_api_key = config.gemini_api_key.filter(|key| !key.trim().is_empty());

        Ok(config)
    }

    /// Where the collection files live, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn suggest_timeout(&self) -> Duration {
        Duration::from_secs(self.suggest_timeout_secs)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> StudioResult<()> {
        let contents = format!(
            "\
# greenforest configuration

# Where the collections (events, resources, themes, ...) are stored:
# data_dir = \"{}\"

# Gemini key for event description suggestions (GEMINI_API_KEY also works):
# gemini_api_key = \"...\"

# gemini_model = \"{}\"
# suggest_timeout_secs = {}
",
            DEFAULT_DATA_PATH, DEFAULT_GEMINI_MODEL, DEFAULT_SUGGEST_TIMEOUT_SECS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StudioError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| StudioError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
