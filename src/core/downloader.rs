use crate::core::{ImagePresenter, Storage, Viewer};
use crate::utils::error::{ApodError, Result};
use reqwest::{Client, StatusCode};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// `url` 的最後一段路徑，忽略 query string 與 fragment
pub fn derive_filename(url: &str) -> Result<&str> {
    let url_path = url.split(['?', '#']).next().unwrap_or(url);
    let filename = url_path.rsplit('/').next().unwrap_or(url_path);

    let reason = match filename {
        "" => Some("URL ends with '/'"),
        "." | ".." => Some("segment refers to a directory"),
        name if name.contains('\\') || name.contains('\0') => {
            Some("segment contains a path separator or null byte")
        }
        _ => None,
    };

    if let Some(reason) = reason {
        return Err(ApodError::InvalidFilename {
            url: url.to_string(),
            reason: reason.to_string(),
        });
    }

    tracing::debug!("Derived filename '{}' from {}", filename, url);
    Ok(filename)
}

pub struct ImageDownloader<S: Storage, V: Viewer> {
    client: Client,
    storage: S,
    viewer: V,
}

impl<S: Storage, V: Viewer> ImageDownloader<S, V> {
    pub fn new(client: Client, storage: S, viewer: V) -> Self {
        Self {
            client,
            storage,
            viewer,
        }
    }

    /// 串流下載到本地檔案，回傳寫入的路徑
    pub async fn download(&self, url: &str) -> Result<PathBuf> {
        let filename = derive_filename(url)?;

        tracing::debug!("Requesting image: {}", url);
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApodError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let path = self.storage.locate(filename);
        let written = {
            let mut file = self.storage.create(filename).await?;
            let mut written: u64 = 0;
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            file.flush().await?;
            written
        };

        tracing::info!("💾 Saved {} bytes to {}", written, path.display());
        Ok(path)
    }
}

#[async_trait::async_trait]
impl<S: Storage, V: Viewer> ImagePresenter for ImageDownloader<S, V> {
    async fn show_image(&self, url: &str) -> Result<PathBuf> {
        let path = self.download(url).await?;
        self.viewer.display(&path).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use httpmock::prelude::*;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct RecordingViewer {
        shown: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl RecordingViewer {
        fn shown(&self) -> Vec<PathBuf> {
            self.shown.lock().unwrap().clone()
        }
    }

    impl Viewer for RecordingViewer {
        async fn display(&self, path: &Path) -> Result<()> {
            self.shown.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn downloader_in(
        temp_dir: &TempDir,
        viewer: RecordingViewer,
    ) -> ImageDownloader<LocalStorage, RecordingViewer> {
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
        ImageDownloader::new(Client::new(), storage, viewer)
    }

    fn binary_payload() -> Vec<u8> {
        // 所有位元組值，外加 CRLF 與超過單一 chunk 的長度
        let mut bytes: Vec<u8> = (0..=255u8).collect();
        bytes.extend_from_slice(b"\r\n\n\r\0");
        bytes.extend((0..50_000u32).map(|i| (i % 251) as u8));
        bytes
    }

    #[test]
    fn test_derive_filename_takes_last_segment() {
        assert_eq!(
            derive_filename("http://host/path/image123.jpg").unwrap(),
            "image123.jpg"
        );
        assert_eq!(
            derive_filename("https://apod.nasa.gov/apod/image/2403/M31_1024.jpg").unwrap(),
            "M31_1024.jpg"
        );
    }

    #[test]
    fn test_derive_filename_drops_query_and_fragment() {
        assert_eq!(
            derive_filename("https://host/a/pic.png?size=large&v=2").unwrap(),
            "pic.png"
        );
        assert_eq!(derive_filename("https://host/a/pic.png#top").unwrap(), "pic.png");
    }

    #[test]
    fn test_derive_filename_rejects_unusable_segments() {
        for url in [
            "https://host/images/",
            "https://host/images/..",
            "https://host/images/.",
            "https://host/images/..\\..\\evil.jpg",
        ] {
            assert!(
                matches!(derive_filename(url), Err(ApodError::InvalidFilename { .. })),
                "expected {} to be rejected",
                url
            );
        }
    }

    #[tokio::test]
    async fn test_download_writes_exact_bytes() {
        let server = MockServer::start();
        let payload = binary_payload();

        let image_mock = server.mock(|when, then| {
            when.method(GET).path("/image/2403/galaxy.jpg");
            then.status(200)
                .header("Content-Type", "image/jpeg")
                .body(payload.clone());
        });

        let temp_dir = TempDir::new().unwrap();
        let downloader = downloader_in(&temp_dir, RecordingViewer::default());

        let path = downloader
            .download(&server.url("/image/2403/galaxy.jpg"))
            .await
            .unwrap();

        image_mock.assert();
        assert_eq!(path, temp_dir.path().join("galaxy.jpg"));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written.len(), payload.len());
        assert_eq!(written, payload);
    }

    #[tokio::test]
    async fn test_show_image_passes_file_to_viewer() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/img/image123.jpg");
            then.status(200).body(b"\xFF\xD8\xFF\xE0jpeg".to_vec());
        });

        let temp_dir = TempDir::new().unwrap();
        let viewer = RecordingViewer::default();
        let downloader = downloader_in(&temp_dir, viewer.clone());

        let path = downloader
            .show_image(&server.url("/img/image123.jpg"))
            .await
            .unwrap();

        assert_eq!(viewer.shown(), vec![path.clone()]);
        assert_eq!(path.file_name().unwrap(), "image123.jpg");
    }

    #[tokio::test]
    async fn test_second_download_overwrites_same_file() {
        let server = MockServer::start();
        let temp_dir = TempDir::new().unwrap();
        let downloader = downloader_in(&temp_dir, RecordingViewer::default());
        let url = server.url("/img/pic.jpg");

        let mut first = server.mock(|when, then| {
            when.method(GET).path("/img/pic.jpg");
            then.status(200).body(b"first version, longer body".to_vec());
        });
        let first_path = downloader.download(&url).await.unwrap();
        first.assert();
        first.delete();

        server.mock(|when, then| {
            when.method(GET).path("/img/pic.jpg");
            then.status(200).body(b"second".to_vec());
        });
        let second_path = downloader.download(&url).await.unwrap();

        assert_eq!(first_path, second_path);
        assert_eq!(std::fs::read(&second_path).unwrap(), b"second");
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_image_status_error_leaves_no_file() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/img/missing.jpg");
            then.status(404);
        });

        let temp_dir = TempDir::new().unwrap();
        let viewer = RecordingViewer::default();
        let downloader = downloader_in(&temp_dir, viewer.clone());

        let err = downloader
            .show_image(&server.url("/img/missing.jpg"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApodError::HttpStatus { status: 404, .. }));
        assert!(!temp_dir.path().join("missing.jpg").exists());
        assert!(viewer.shown().is_empty());
    }
}
