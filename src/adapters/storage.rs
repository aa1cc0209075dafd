use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Writes files under a base directory, replacing existing files.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        self.base_path.join(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested/out"));

        storage.write_file("water_level_20303.txt", b"a\n").await.unwrap();

        let written = fs::read(temp_dir.path().join("nested/out/water_level_20303.txt")).unwrap();
        assert_eq!(written, b"a\n");
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage
            .write_file("water_level_20303.txt", b"old line one\nold line two\n")
            .await
            .unwrap();
        storage.write_file("water_level_20303.txt", b"new\n").await.unwrap();

        let written = fs::read(temp_dir.path().join("water_level_20303.txt")).unwrap();
        assert_eq!(written, b"new\n");
    }

    #[test]
    fn test_location() {
        let storage = LocalStorage::new("/data/levels");
        assert_eq!(
            storage.location("water_level_20303.txt"),
            "/data/levels/water_level_20303.txt"
        );
    }
}
