#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = "./.small-shop";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// 合併後的執行設定：預設值 < TOML 檔案 < 命令列參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
    pub data_dir: String,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Settings {
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(url) = &file.api.base_url {
            self.api_base_url = url.clone();
        }
        if let Some(timeout) = file.api.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(dir) = &file.storage.data_dir {
            self.data_dir = dir.clone();
        }
        self
    }
}

impl ConfigProvider for Settings {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
