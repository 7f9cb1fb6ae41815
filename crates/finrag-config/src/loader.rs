//! Configuration loader

use std::path::PathBuf;

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::Result,
    types::FinragConfig,
};

/// Loads configuration from the layered sources.
///
/// Precedence, lowest to highest: serde defaults, the TOML file, the
/// `FINRAG_*` environment (nested fields separated by `__`, e.g.
/// `FINRAG_QDRANT__URL`), and finally the conventional provider variables
/// as direct fallbacks for fields still unset.
pub struct ConfigLoader {
    config_path: PathBuf,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "FINRAG".to_string(),
        }
    }

    /// Use an explicit config file path instead of the default location.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "FINRAG".to_string(),
        }
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finrag")
            .join("config.toml")
    }

    /// Build the effective configuration. The file is optional; missing
    /// fields fall back through the layers.
    pub fn load(&self) -> Result<FinragConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).separator("__"));

        let config = builder.build()?;
        let mut finrag: FinragConfig = config.try_deserialize()?;
        Self::apply_env_fallbacks(&mut finrag);
        debug!(path = %self.config_path.display(), "configuration loaded");
        Ok(finrag)
    }

    /// Honor the provider-conventional variables so a plain `.env` works
    /// without any `FINRAG_*` prefixing.
    fn apply_env_fallbacks(cfg: &mut FinragConfig) {
        if cfg.openai.api_key.is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                cfg.openai.api_key = key;
            }
        }
        if cfg.tavily.api_key.is_empty() {
            if let Ok(key) = std::env::var("TAVILY_API_KEY") {
                cfg.tavily.api_key = key;
            }
        }
        if let Ok(url) = std::env::var("QDRANT_URL") {
            if cfg.qdrant.url == crate::types::QdrantSection::default().url {
                cfg.qdrant.url = url;
            }
        }
        if cfg.qdrant.api_key.is_none() {
            if let Ok(key) = std::env::var("QDRANT_API_KEY") {
                if !key.is_empty() {
                    cfg.qdrant.api_key = Some(key);
                }
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
