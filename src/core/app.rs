use crate::adapters::{CommandViewer, LocalStorage, NoopViewer};
use crate::core::downloader::ImageDownloader;
use crate::core::fetcher::{build_client, ApodClient};
use crate::core::{ConfigProvider, ImagePresenter, RecordSource};
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

pub struct ApodApp<R: RecordSource, P: ImagePresenter> {
    source: R,
    presenter: P,
    prefer_hd: bool,
}

impl<R: RecordSource, P: ImagePresenter> ApodApp<R, P> {
    pub fn new(source: R, presenter: P) -> Self {
        Self {
            source,
            presenter,
            prefer_hd: false,
        }
    }

    pub fn with_prefer_hd(mut self, prefer_hd: bool) -> Self {
        self.prefer_hd = prefer_hd;
        self
    }

    /// 取得紀錄、輸出標題與說明到 `out`，再下載並顯示圖片
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<PathBuf> {
        tracing::info!("🔭 Fetching daily astronomy record");
        let record = self.source.fetch_daily_record().await?;
        if let Some(date) = record.date() {
            tracing::info!("📅 Picture of the day for {}", date);
        }

        writeln!(out, "{}", record.title()?)?;
        writeln!(out, "{}", record.explanation()?)?;
        out.flush()?;

        let url = record.image_url(self.prefer_hd)?;
        tracing::info!("⬇️ Downloading image: {}", url);
        self.presenter.show_image(url).await
    }
}

/// 依設定組出 client、storage 與 viewer 並執行一次
pub async fn run_from_config<C: ConfigProvider, W: Write>(
    config: &C,
    out: &mut W,
) -> Result<PathBuf> {
    let client = build_client(config.timeout_seconds())?;
    let source = ApodClient::new(config.api_endpoint(), client.clone());
    let storage = LocalStorage::new(config.output_dir().to_string());

    if config.display_enabled() {
        let viewer = CommandViewer::from_command_line(config.viewer_command())?;
        let presenter = ImageDownloader::new(client, storage, viewer);
        ApodApp::new(source, presenter)
            .with_prefer_hd(config.prefer_hd())
            .run(out)
            .await
    } else {
        let presenter = ImageDownloader::new(client, storage, NoopViewer);
        ApodApp::new(source, presenter)
            .with_prefer_hd(config.prefer_hd())
            .run(out)
            .await
    }
}
