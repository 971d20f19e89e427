#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::storage::StorageSettings;
use crate::domain::model::Category;
use crate::utils::error::Result;
use crate::utils::validation::{validate_database_name, validate_path, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_PATH: &str = "kc_dating_data.db";
pub const DEFAULT_DATABASE_NAME: &str = "gca_data";
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// 儲存層級選擇：json 為純檔案輸出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[serde(alias = "file")]
    #[cfg_attr(feature = "cli", value(alias = "file"))]
    Json,
    #[serde(alias = "document")]
    #[cfg_attr(feature = "cli", value(alias = "document"))]
    Mongodb,
    #[default]
    #[serde(alias = "relational")]
    #[cfg_attr(feature = "cli", value(alias = "relational"))]
    Sqlite,
}

/// Fully resolved settings for one run: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub storage: StorageSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            storage: StorageSettings {
                output: OutputFormat::default(),
                document_store_uri: None,
                database_name: DEFAULT_DATABASE_NAME.to_string(),
                database_path: DEFAULT_DATABASE_PATH.to_string(),
                output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            },
        }
    }
}

impl RunConfig {
    /// Only the report JSON goes to stdout when every category is exported as flat files.
    pub fn report_only(&self) -> bool {
        self.storage.output == OutputFormat::Json && self.categories.is_empty()
    }
}

/// Parses a list of category names, dropping blanks and duplicates.
pub fn parse_categories<S: AsRef<str>>(names: &[S]) -> Result<Vec<Category>> {
    let mut categories = Vec::new();
    for name in names.iter().map(|n| n.as_ref().trim()).filter(|n| !n.is_empty()) {
        let category: Category = name.parse()?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("database_path", &self.storage.database_path)?;
        validate_path("output_dir", &self.storage.output_dir)?;
        validate_database_name("database_name", &self.storage.database_name)?;

        // 文件儲存 URI 在連線時才檢查，失敗會退回關聯式儲存
        Ok(())
    }
}
