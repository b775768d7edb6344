use crate::domain::model::Record;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn locate(&self, filename: &str) -> PathBuf;
    /// Opens `filename` for binary writing, creating or truncating it.
    fn create(
        &self,
        filename: &str,
    ) -> impl std::future::Future<Output = Result<tokio::fs::File>> + Send;
}

pub trait Viewer: Send + Sync {
    fn display(&self, path: &Path) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn viewer_command(&self) -> &str;
    fn display_enabled(&self) -> bool;
    fn prefer_hd(&self) -> bool;
    fn timeout_seconds(&self) -> Option<u64>;
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_daily_record(&self) -> Result<Record>;
}

#[async_trait]
pub trait ImagePresenter: Send + Sync {
    async fn show_image(&self, url: &str) -> Result<PathBuf>;
}
