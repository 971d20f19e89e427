use crate::adapters::storage::TieredStore;
use crate::core::report::build_report;
use crate::core::source::collect_selected;
use crate::domain::model::{Category, RecordSet};
use crate::domain::ports::{Pipeline, RecordSource, StoreReceipt, TransformResult};
use crate::utils::error::Result;
use chrono::Utc;

/// Collects the selected categories, scores them into a report and persists them.
pub struct TargetingPipeline<R: RecordSource> {
    source: R,
    store: TieredStore,
    categories: Vec<Category>,
}

impl<R: RecordSource> TargetingPipeline<R> {
    pub fn new(source: R, store: TieredStore, categories: Vec<Category>) -> Self {
        Self {
            source,
            store,
            categories,
        }
    }

    pub fn store(&self) -> &TieredStore {
        &self.store
    }

    pub async fn close(&self) -> Result<()> {
        self.store.close().await
    }
}

#[async_trait::async_trait]
impl<R: RecordSource> Pipeline for TargetingPipeline<R> {
    async fn extract(&self) -> Result<Vec<RecordSet>> {
        Ok(collect_selected(&self.source, &self.categories))
    }

    async fn transform(&self, data: Vec<RecordSet>) -> Result<TransformResult> {
        let report = build_report(&data, Utc::now());
        tracing::debug!(
            "Report ranks {} locations across {} categories",
            report.total_locations,
            report.by_category.len()
        );

        Ok(TransformResult {
            record_sets: data,
            report,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<Vec<StoreReceipt>> {
        let scraped_at = Utc::now();
        let mut receipts = Vec::with_capacity(result.record_sets.len());

        for records in &result.record_sets {
            receipts.push(self.store.store(records, scraped_at).await?);
        }

        Ok(receipts)
    }
}
