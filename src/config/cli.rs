use crate::config::toml_config::TomlConfig;
use crate::config::{parse_categories, OutputFormat, RunConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gca-etl")]
#[command(about = "Collects Kansas City location records, stores them and ranks them by GCA score")]
pub struct CliConfig {
    /// Comma-separated list of categories to collect (default: all)
    #[arg(long, value_delimiter = ',')]
    pub types: Vec<String>,

    /// Storage tier to write to
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// MongoDB connection string for the document store
    #[arg(long, visible_alias = "mongodb-uri")]
    pub document_store_uri: Option<String>,

    /// SQLite database file for the relational store
    #[arg(long)]
    pub database_path: Option<String>,

    /// Directory for the per-category JSON files
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併預設值、TOML 檔案與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let mut config = RunConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config)?;
        }

        if !self.types.is_empty() {
            config.categories = parse_categories(&self.types)?;
        }
        if let Some(output) = self.output {
            config.storage.output = output;
        }
        if let Some(uri) = &self.document_store_uri {
            config.storage.document_store_uri = Some(uri.clone());
        }
        if let Some(path) = &self.database_path {
            config.storage.database_path = path.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.storage.output_dir = dir.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
