use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub media_root: String,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_max_upload_mb() -> usize {
    10
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MEDIA_ROOT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AppError::ConfigError {
            message: format!("env substitution regex: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_bind_addr("server.bind_addr", &self.server.bind_addr)?;
        validation::validate_path("storage.media_root", &self.storage.media_root)?;
        validation::validate_positive_number(
            "storage.max_upload_mb",
            self.storage.max_upload_mb,
            1,
        )?;
        for extension in &self.storage.allowed_extensions {
            validation::validate_non_empty_string("storage.allowed_extensions", extension)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind_addr
    }

    fn media_root(&self) -> &str {
        &self.storage.media_root
    }

    fn max_upload_bytes(&self) -> usize {
        self.storage.max_upload_mb * 1024 * 1024
    }

    fn allowed_extensions(&self) -> &[String] {
        &self.storage.allowed_extensions
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
