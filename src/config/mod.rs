#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_resource_path, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_HEROES_PATH: &str = "api/heroes";

/// 後端位置：base URL 加上 heroes 集合的路徑
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub heroes_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            heroes_path: DEFAULT_HEROES_PATH.to_string(),
        }
    }
}

impl ConfigProvider for ApiConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn heroes_path(&self) -> &str {
        &self.heroes_path
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_resource_path("api.heroes_path", &self.heroes_path)
    }
}

/// CLI 參數與設定檔合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub api: ApiConfig,
    pub verbose: bool,
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config_is_valid() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.heroes_path(), "api/heroes");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_api_config() {
        let config = ApiConfig {
            base_url: "ftp://example.com".to_string(),
            heroes_path: "heroes".to_string(),
        };
        assert!(config.validate().is_err());

        let config = ApiConfig {
            base_url: "http://example.com".to_string(),
            heroes_path: "".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
