pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{CommandViewer, LocalStorage, NoopViewer};
pub use crate::config::AppConfig;
pub use crate::core::{
    app::{run_from_config, ApodApp},
    downloader::{derive_filename, ImageDownloader},
    fetcher::ApodClient,
};
pub use crate::domain::model::Record;
pub use crate::utils::error::{ApodError, Result};
