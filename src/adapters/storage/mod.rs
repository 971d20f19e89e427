pub mod document;
pub mod file_store;
pub mod sqlite;
pub mod tiered;

use crate::config::OutputFormat;

pub use document::DocumentStore;
pub use file_store::{FileStore, LocalStorage};
pub use sqlite::SqliteStore;
pub use tiered::TieredStore;

/// Everything needed to open the storage tiers for one run.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub output: OutputFormat,
    pub document_store_uri: Option<String>,
    pub database_name: String,
    pub database_path: String,
    pub output_dir: String,
}
