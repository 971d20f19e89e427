use super::document::DocumentStore;
use super::file_store::{FileStore, LocalStorage};
use super::sqlite::SqliteStore;
use super::StorageSettings;
use crate::config::OutputFormat;
use crate::domain::model::RecordSet;
use crate::domain::ports::{Backend, RecordStore, StoreReceipt};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Preferred backend plus the flat-file store it falls back to.
///
/// Opening walks document store -> relational store -> flat files, moving on only
/// on connection failures. Once open, any failed write goes to the flat files.
pub struct TieredStore {
    primary: Option<Box<dyn RecordStore>>,
    fallback: FileStore<LocalStorage>,
}

impl TieredStore {
    pub fn new(primary: Option<Box<dyn RecordStore>>, fallback: FileStore<LocalStorage>) -> Self {
        Self { primary, fallback }
    }

    pub async fn open(settings: &StorageSettings) -> Result<Self> {
        let fallback = FileStore::new(LocalStorage::new(settings.output_dir.clone()));

        let primary = match settings.output {
            OutputFormat::Json => None,
            OutputFormat::Mongodb => match settings.document_store_uri.as_deref() {
                Some(uri) => match DocumentStore::connect(uri, &settings.database_name).await {
                    Ok(store) => Some(Box::new(store) as Box<dyn RecordStore>),
                    Err(e) if e.is_connection_failure() => {
                        tracing::error!("❌ Document store connection failed: {}", e);
                        tracing::info!("Falling back to relational store");
                        open_relational(settings).await?
                    }
                    Err(e) => return Err(e),
                },
                None => {
                    tracing::warn!("No document store URI configured, using relational store");
                    open_relational(settings).await?
                }
            },
            OutputFormat::Sqlite => open_relational(settings).await?,
        };

        let store = Self::new(primary, fallback);
        tracing::info!("💾 Active storage backend: {}", store.active_backend());
        Ok(store)
    }

    pub fn active_backend(&self) -> Backend {
        self.primary
            .as_ref()
            .map(|store| store.backend())
            .unwrap_or(Backend::FlatFile)
    }

    pub async fn store(
        &self,
        records: &RecordSet,
        scraped_at: DateTime<Utc>,
    ) -> Result<StoreReceipt> {
        let category = records.category();

        if let Some(primary) = &self.primary {
            match primary.store(records, scraped_at).await {
                Ok(count) => {
                    return Ok(StoreReceipt {
                        category,
                        backend: primary.backend(),
                        count,
                    })
                }
                Err(e) => {
                    tracing::error!("❌ {} storage failed for {}: {}", primary.backend(), category, e);
                    tracing::info!("Falling back to flat-file storage");
                }
            }
        }

        let count = self.fallback.store(records, scraped_at).await?;
        Ok(StoreReceipt {
            category,
            backend: Backend::FlatFile,
            count,
        })
    }

    pub async fn close(&self) -> Result<()> {
        if let Some(primary) = &self.primary {
            primary.close().await?;
        }
        self.fallback.close().await
    }
}

async fn open_relational(settings: &StorageSettings) -> Result<Option<Box<dyn RecordStore>>> {
    match SqliteStore::connect(&settings.database_path).await {
        Ok(store) => Ok(Some(Box::new(store))),
        Err(e) if e.is_connection_failure() => {
            tracing::error!("❌ Relational store connection failed: {}", e);
            tracing::info!("Falling back to flat-file storage");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
