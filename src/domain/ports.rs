use crate::domain::model::{Category, RecordSet};
use crate::domain::report::TargetingReport;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait RecordSource: Send + Sync {
    fn collect(&self, category: Category) -> RecordSet;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    DocumentStore,
    RelationalStore,
    FlatFile,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::DocumentStore => "document store",
            Backend::RelationalStore => "relational store",
            Backend::FlatFile => "flat-file store",
        };
        f.write_str(name)
    }
}

/// Where one category's records ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReceipt {
    pub category: Category,
    pub backend: Backend,
    pub count: usize,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    fn backend(&self) -> Backend;
    async fn store(&self, records: &RecordSet, scraped_at: DateTime<Utc>) -> Result<usize>;
    async fn close(&self) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub record_sets: Vec<RecordSet>,
    pub report: TargetingReport,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RecordSet>>;
    async fn transform(&self, data: Vec<RecordSet>) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<Vec<StoreReceipt>>;
}
