pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{OutputFormat, RunConfig};

pub use adapters::storage::{StorageSettings, TieredStore};
pub use app::pipelines::targeting_pipeline::TargetingPipeline;
pub use crate::core::{etl::EtlEngine, source::StaticSource};
pub use utils::error::{GcaError, Result};
