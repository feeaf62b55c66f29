use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use anyhow::{Result, Context};

use crate::error::ReviewError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub llm: LlmConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key: "".to_string(),
                model: "gemini-2.0-flash".to_string(),
                temperature: 0.7,
                max_output_tokens: 2048,
            },
        }
    }
}

pub fn load_or_create_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }

        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config)?;

        let mut file = File::create(config_path)?;
        file.write_all(toml_string.as_bytes())?;

        return Ok(config);
    }

    let mut file = File::open(config_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let config: Config = toml::from_str(&contents)
        .context("Failed to parse config file")?;

    Ok(config)
}

pub fn update_config(
    config_path: &Path,
    api_url: &Option<String>,
    api_key: &Option<String>,
    model: &Option<String>,
) -> Result<()> {
    let mut config = load_or_create_config(config_path)?;

    if let Some(url) = api_url {
        config.llm.api_url = url.clone();
    }

    if let Some(key) = api_key {
        config.llm.api_key = key.clone();
    }

    if let Some(model_name) = model {
        config.llm.model = model_name.clone();
    }

    let toml_string = toml::to_string_pretty(&config)?;
    let mut file = File::create(config_path)?;
    file.write_all(toml_string.as_bytes())?;

    Ok(())
}

/// Resolves the service credential: explicit flag first, then the
/// GEMINI_API_KEY environment variable, then the key stored in the config
/// file. Empty values are treated as absent.
pub fn resolve_api_key(
    explicit: Option<String>,
    config: &Config,
) -> Result<String, ReviewError> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key);
    }
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }
    if !config.llm.api_key.is_empty() {
        return Ok(config.llm.api_key.clone());
    }
    Err(ReviewError::CredentialMissing)
}
