use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

use crate::error::ReddituiError;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub token: Option<String>,
    pub user: Option<String>,
}

impl Config {
    fn path() -> Result<PathBuf, ReddituiError> {
        let path = dirs::home_dir()
            .ok_or_else(|| ReddituiError::Config("Could not find home directory".to_string()))?
            .join(".config/redditui/config.json");
        Ok(path)
    }

    pub fn load() -> Result<Self, ReddituiError> {
        let config_path = Self::path()?;

        let file = File::open(&config_path)
            .with_context(|| format!("Failed to open config file at {:?}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config =
            serde_json::from_reader(reader).context("Failed to parse config JSON")?;

        Ok(config)
    }
}
