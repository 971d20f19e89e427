use crate::core::{Pipeline, RecordSet};
use crate::domain::ports::StoreReceipt;
use crate::domain::report::TargetingReport;
use crate::utils::error::Result;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct EtlOutcome {
    pub record_sets: Vec<RecordSet>,
    pub report: TargetingReport,
    pub receipts: Vec<StoreReceipt>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<EtlOutcome> {
        tracing::info!("🚀 Starting collection run");

        // Extract
        let record_sets = self.pipeline.extract().await?;
        let record_count: usize = record_sets.iter().map(|set| set.len()).sum();
        tracing::info!(
            "Extracted {} records across {} categories",
            record_count,
            record_sets.len()
        );

        // Transform
        let transformed = self.pipeline.transform(record_sets).await?;
        tracing::info!(
            "Scored {} locations",
            transformed.report.total_locations
        );

        // Load
        let receipts = self.pipeline.load(&transformed).await?;
        for receipt in &receipts {
            tracing::debug!(
                "{}: {} records -> {}",
                receipt.category,
                receipt.count,
                receipt.backend
            );
        }
        tracing::info!("✅ Collection run completed");

        Ok(EtlOutcome {
            record_sets: transformed.record_sets,
            report: transformed.report,
            receipts,
        })
    }
}
