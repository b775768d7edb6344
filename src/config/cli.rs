use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "apod")]
#[command(about = "Print today's astronomy picture of the day and open the image")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Metadata endpoint to query")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Directory the image is saved into")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Image viewer command; the file path is appended")]
    pub viewer: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Download the high resolution image when available")]
    pub hd: bool,

    #[arg(long, help = "Download only, do not launch a viewer")]
    pub no_display: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, default_value = "compact", help = "Log format: compact or json")]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// 合併順序：命令列 > 設定檔 > 預設值
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_toml(&TomlConfig::from_file(path)?),
            None => AppConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.api_endpoint = endpoint.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(viewer) = &self.viewer {
            config.viewer_command = viewer.clone();
        }
        if self.timeout.is_some() {
            config.timeout_seconds = self.timeout;
        }
        if self.hd {
            config.prefer_hd = true;
        }
        if self.no_display {
            config.display_enabled = false;
        }

        Ok(config)
    }
}
