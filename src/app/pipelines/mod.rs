pub mod targeting_pipeline;
