pub mod etl;
pub mod output;
pub mod report;
pub mod scoring;
pub mod source;

pub use crate::domain::model::{Category, RecordSet};
pub use crate::domain::ports::{Pipeline, RecordSource, RecordStore, Storage, TransformResult};
pub use crate::utils::error::Result;
