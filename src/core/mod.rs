pub mod app;
pub mod downloader;
pub mod fetcher;

pub use crate::domain::model::Record;
pub use crate::domain::ports::{ConfigProvider, ImagePresenter, RecordSource, Storage, Viewer};
pub use crate::utils::error::Result;
