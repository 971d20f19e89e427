use crate::domain::model::{Category, RecordSet};
use crate::domain::ports::{Backend, RecordStore, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::PathBuf;

/// Byte storage rooted at a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, data)?;
        Ok(())
    }
}

/// Last storage tier: one pretty-printed JSON array per category, `<category>.json`.
pub struct FileStore<S: Storage> {
    storage: S,
}

impl<S: Storage> FileStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn file_name(category: Category) -> String {
        format!("{}.json", category.as_str())
    }
}

#[async_trait]
impl<S: Storage> RecordStore for FileStore<S> {
    fn backend(&self) -> Backend {
        Backend::FlatFile
    }

    async fn store(&self, records: &RecordSet, scraped_at: DateTime<Utc>) -> Result<usize> {
        let file_name = Self::file_name(records.category());
        let documents = records.to_documents(scraped_at)?;
        let data = serde_json::to_vec_pretty(&documents)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), file_name);
        self.storage.write_file(&file_name, &data).await?;

        tracing::info!("Stored {} items in file: {}", documents.len(), file_name);
        Ok(documents.len())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::StaticSource;
    use crate::domain::ports::RecordSource;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_store_writes_one_file_per_category() {
        let storage = MockStorage::new();
        let store = FileStore::new(storage.clone());
        let records = StaticSource.collect(Category::CoworkingSpaces);

        let count = store.store(&records, Utc::now()).await.unwrap();

        assert_eq!(count, 4);
        let files = storage.files.lock().await;
        assert_eq!(files.len(), 1);
        assert!(files.contains_key("coworking_spaces.json"));
    }

    #[tokio::test]
    async fn test_stored_file_is_pretty_json_array() {
        let storage = MockStorage::new();
        let store = FileStore::new(storage.clone());
        let records = StaticSource.collect(Category::ClimbingGyms);
        store.store(&records, Utc::now()).await.unwrap();

        let files = storage.files.lock().await;
        let data = &files["climbing_gyms.json"];
        let documents: Vec<serde_json::Value> = serde_json::from_slice(data).unwrap();

        assert!(data.starts_with(b"[\n"));
        assert_eq!(documents.len(), 4);
        assert_eq!(documents[2]["name"], "Sequence Climb");
        assert!(documents.iter().all(|d| d["scraped_date"].is_string()));
    }

    #[tokio::test]
    async fn test_local_storage_creates_missing_directories() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("nested/out"));

        storage.write_file("a.json", b"[]").await.unwrap();

        let written = std::fs::read(temp_dir.path().join("nested/out/a.json")).unwrap();
        assert_eq!(written, b"[]".to_vec());
    }
}
