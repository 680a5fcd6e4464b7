use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| StorefrontError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StorefrontError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHOP_API_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.api.base_url {
            validate_url("api.base_url", url)?;
        }
        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        if let Some(dir) = &self.storage.data_dir {
            validate_path("storage.data_dir", dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "https://fakestoreapi.com"
timeout_seconds = 5

[storage]
data_dir = "/tmp/shop"
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("https://fakestoreapi.com"));
        assert_eq!(config.api.timeout_seconds, Some(5));
        assert_eq!(config.storage.data_dir.as_deref(), Some("/tmp/shop"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SMALL_SHOP_TEST_API", "http://localhost:9999");
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "${SMALL_SHOP_TEST_API}"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:9999"));
    }

    #[test]
    fn test_unset_env_var_is_kept_and_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "${SMALL_SHOP_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("${SMALL_SHOP_SURELY_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = TomlConfig::from_toml_str("[api]\ntimeout_seconds = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\ndata_dir = \"./cart-data\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.storage.data_dir.as_deref(), Some("./cart-data"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigError { .. }));
    }
}
