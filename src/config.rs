use crate::error::{ProfileLensError, Result};
use profile_lens_common::{DEFAULT_ENDPOINT, MIN_IMAGES, UPLOAD_FIELD_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "PROFILE_LENS_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub field_name: String,
    pub min_images: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            field_name: UPLOAD_FIELD_NAME.into(),
            min_images: MIN_IMAGES,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfileLensError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("profile-lens").join("config.json"))
    }

    /// 送信先を決定: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> String {
        if let Some(endpoint) = flag {
            return endpoint.to_string();
        }
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => endpoint,
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ProfileLensError::Config(format!(
                "URLは http:// または https:// で始めてください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:3000/analyze");
        assert_eq!(config.field_name, "images");
        assert_eq!(config.min_images, 5);
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            endpoint: "https://example.test/analyze".into(),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"min_images": 3}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.min_images, 3);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_flag_overrides_everything() {
        let config = Config::default();
        assert_eq!(
            config.resolve_endpoint(Some("http://127.0.0.1:9/analyze")),
            "http://127.0.0.1:9/analyze"
        );
    }
}
