use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn locate(&self, filename: &str) -> PathBuf {
        let base = Path::new(&self.base_path);
        // 預設的工作目錄不加 `./` 前綴，viewer 收到的就是檔名本身
        if base == Path::new(".") {
            return PathBuf::from(filename);
        }
        base.join(filename)
    }

    async fn create(&self, filename: &str) -> Result<fs::File> {
        let full_path = self.locate(filename);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&full_path)
            .await?;
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_create_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        std::fs::write(temp_dir.path().join("pic.jpg"), b"a much longer old body").unwrap();

        let mut file = storage.create("pic.jpg").await.unwrap();
        file.write_all(b"new").await.unwrap();
        file.flush().await.unwrap();
        drop(file);

        assert_eq!(std::fs::read(temp_dir.path().join("pic.jpg")).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_create_makes_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("apod").join("images");
        let storage = LocalStorage::new(nested.to_str().unwrap().to_string());

        storage.create("pic.jpg").await.unwrap();

        assert!(nested.join("pic.jpg").exists());
        assert_eq!(storage.locate("pic.jpg"), nested.join("pic.jpg"));
    }

    #[test]
    fn test_locate_in_working_directory_is_bare_filename() {
        let storage = LocalStorage::new(".".to_string());

        assert_eq!(storage.locate("image123.jpg"), PathBuf::from("image123.jpg"));
        assert_eq!(
            LocalStorage::new("./pics".to_string()).locate("image123.jpg"),
            Path::new("./pics").join("image123.jpg")
        );
    }
}
