use crate::error::{Result, SnapChefError};
use serde::{Deserialize, Serialize};
use snapchef_common::DEFAULT_MODEL;
use std::path::{Path, PathBuf};

/// APIキーを上書きする環境変数
pub const API_KEY_ENV: &str = "API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SnapChefError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("snapchef").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    pub fn get_api_key(&self) -> Result<String> {
        Self::resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    fn resolve_api_key(env: Option<String>, stored: Option<&str>) -> Result<String> {
        env.filter(|k| !k.trim().is_empty())
            .or_else(|| stored.filter(|k| !k.trim().is_empty()).map(str::to_string))
            .ok_or(SnapChefError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}
