use crate::domain::ports::Viewer;
use crate::utils::error::{ApodError, Result};
use std::path::Path;
use tokio::process::Command;

#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(target_os = "windows")]
pub const DEFAULT_VIEWER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_VIEWER: &str = "display";

/// 執行外部程式，圖片路徑放在最後一個參數
#[derive(Debug, Clone)]
pub struct CommandViewer {
    program: String,
    args: Vec<String>,
}

impl CommandViewer {
    /// `"feh --fullscreen"` → program `feh`, leading args `["--fullscreen"]`
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().ok_or_else(|| ApodError::InvalidConfigValueError {
            field: "viewer.command".to_string(),
            value: command_line.to_string(),
            reason: "Viewer command cannot be empty".to_string(),
        })?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn build_command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        command
    }
}

impl Viewer for CommandViewer {
    async fn display(&self, path: &Path) -> Result<()> {
        tracing::debug!("Launching viewer: {} {:?} {}", self.program, self.args, path.display());

        let status = self
            .build_command(path)
            .status()
            .await
            .map_err(|source| ApodError::ViewerError {
                command: self.program.clone(),
                source,
            })?;

        // 不檢查 viewer 的結束狀態，只記錄
        tracing::debug!("Viewer '{}' exited with {}", self.program, status);
        Ok(())
    }
}

/// 搭配 `--no-display` 使用
#[derive(Debug, Clone, Default)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    async fn display(&self, path: &Path) -> Result<()> {
        tracing::info!("🖼️ Display disabled, image saved to {}", path.display());
        Ok(())
    }
}
