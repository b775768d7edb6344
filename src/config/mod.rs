#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::viewer::DEFAULT_VIEWER;
use crate::core::fetcher::DEFAULT_ENDPOINT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use self::toml_config::TomlConfig;
use serde::{Deserialize, Serialize};

pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// 單次執行使用的最終設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub output_dir: String,
    pub viewer_command: String,
    pub display_enabled: bool,
    pub prefer_hd: bool,
    pub timeout_seconds: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: ".".to_string(),
            viewer_command: DEFAULT_VIEWER.to_string(),
            display_enabled: true,
            prefer_hd: false,
            timeout_seconds: None,
        }
    }
}

impl AppConfig {
    /// 以檔案內容覆蓋預設值
    pub fn from_toml(file: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            api_endpoint: file.source.endpoint.clone().unwrap_or(defaults.api_endpoint),
            output_dir: file.output.directory.clone().unwrap_or(defaults.output_dir),
            viewer_command: file.viewer.command.clone().unwrap_or(defaults.viewer_command),
            display_enabled: file.viewer.enabled.unwrap_or(defaults.display_enabled),
            prefer_hd: file.source.prefer_hd.unwrap_or(defaults.prefer_hd),
            timeout_seconds: file.source.timeout_seconds.or(defaults.timeout_seconds),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.api_endpoint)?;
        validate_path("output.directory", &self.output_dir)?;

        if self.display_enabled {
            validate_non_empty_string("viewer.command", &self.viewer_command)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn viewer_command(&self) -> &str {
        &self.viewer_command
    }

    fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    fn prefer_hd(&self) -> bool {
        self.prefer_hd
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}
