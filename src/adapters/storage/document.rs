use crate::domain::model::{Category, RecordSet};
use crate::domain::ports::{Backend, RecordStore};
use crate::utils::error::{GcaError, Result};
use crate::utils::validation::validate_document_store_uri;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::time::Duration;

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);
const APP_NAME: &str = "gca-etl";

/// Document tier backed by MongoDB. Each category is a collection in `database`.
pub struct DocumentStore {
    client: Client,
    database: String,
}

impl DocumentStore {
    /// Parses the connection string and pings the server; every failure here is a
    /// connection failure so the caller can move on to the relational tier.
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        validate_document_store_uri("document_store_uri", uri)
            .map_err(|e| GcaError::connection(Backend::DocumentStore, e.to_string()))?;

        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| GcaError::connection(Backend::DocumentStore, e.to_string()))?;
        options
            .server_selection_timeout
            .get_or_insert(SERVER_SELECTION_TIMEOUT);
        options.app_name.get_or_insert_with(|| APP_NAME.to_string());

        let client = Client::with_options(options)
            .map_err(|e| GcaError::connection(Backend::DocumentStore, e.to_string()))?;

        tracing::debug!("Pinging MongoDB database {}", database);
        client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| GcaError::connection(Backend::DocumentStore, e.to_string()))?;

        tracing::info!("Connected to MongoDB");
        Ok(Self {
            client,
            database: database.to_string(),
        })
    }

    pub fn collection(&self, category: Category) -> Collection<Document> {
        self.client
            .database(&self.database)
            .collection(category.as_str())
    }
}

fn to_bson_documents(records: &RecordSet, scraped_at: DateTime<Utc>) -> Result<Vec<Document>> {
    records
        .to_documents(scraped_at)?
        .iter()
        .map(|value| {
            bson::to_document(value)
                .map_err(|e| GcaError::write(Backend::DocumentStore, e.to_string()))
        })
        .collect()
}

#[async_trait]
impl RecordStore for DocumentStore {
    fn backend(&self) -> Backend {
        Backend::DocumentStore
    }

    /// Clears the collection, then inserts the freshly stamped documents.
    async fn store(&self, records: &RecordSet, scraped_at: DateTime<Utc>) -> Result<usize> {
        let category = records.category();
        let collection = self.collection(category);
        let documents = to_bson_documents(records, scraped_at)?;

        collection.delete_many(doc! {}).await?;

        // insert_many rejects an empty batch
        if !records.is_empty() {
            collection.insert_many(&documents).await?;
        }

        tracing::info!(
            "Stored {} documents in MongoDB collection: {}",
            documents.len(),
            category
        );
        Ok(documents.len())
    }

    async fn close(&self) -> Result<()> {
        self.client.clone().shutdown().await;
        Ok(())
    }
}
