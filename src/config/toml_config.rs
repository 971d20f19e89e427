use crate::config::{parse_categories, OutputFormat, RunConfig};
use crate::utils::error::{GcaError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub collection: CollectionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub output: Option<OutputFormat>,
    pub document_store_uri: Option<String>,
    pub database_name: Option<String>,
    pub database_path: Option<String>,
    pub output_dir: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GcaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GCA_DOCUMENT_STORE_URI})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GcaError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Overlays every value present in the file onto `config`.
    pub fn apply_to(&self, config: &mut RunConfig) -> Result<()> {
        if let Some(types) = &self.collection.types {
            config.categories = parse_categories(types)?;
        }

        let storage = &self.storage;
        if let Some(output) = storage.output {
            config.storage.output = output;
        }
        if let Some(uri) = &storage.document_store_uri {
            config.storage.document_store_uri = Some(uri.clone());
        }
        if let Some(name) = &storage.database_name {
            config.storage.database_name = name.clone();
        }
        if let Some(path) = &storage.database_path {
            config.storage.database_path = path.clone();
        }
        if let Some(dir) = &storage.output_dir {
            config.storage.output_dir = dir.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[collection]
types = ["climbing_gyms", "coworking_spaces"]

[storage]
output = "mongodb"
document_store_uri = "mongodb://localhost:27017"
database_name = "kc"
database_path = "data/kc.db"
output_dir = "./exports"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let mut run = RunConfig::default();
        config.apply_to(&mut run).unwrap();

        assert_eq!(
            run.categories,
            vec![Category::ClimbingGyms, Category::CoworkingSpaces]
        );
        assert_eq!(run.storage.output, OutputFormat::Mongodb);
        assert_eq!(
            run.storage.document_store_uri.as_deref(),
            Some("mongodb://localhost:27017")
        );
        assert_eq!(run.storage.database_name, "kc");
        assert_eq!(run.storage.database_path, "data/kc.db");
        assert_eq!(run.storage.output_dir, "./exports");
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let mut run = RunConfig::default();
        config.apply_to(&mut run).unwrap();

        assert!(run.categories.is_empty());
        assert_eq!(run.storage.output, OutputFormat::Sqlite);
        assert_eq!(run.storage.database_path, "kc_dating_data.db");
    }

    #[test]
    fn test_output_aliases() {
        let config = TomlConfig::from_toml_str("[storage]\noutput = \"file\"\n").unwrap();
        assert_eq!(config.storage.output, Some(OutputFormat::Json));

        let config = TomlConfig::from_toml_str("[storage]\noutput = \"relational\"\n").unwrap();
        assert_eq!(config.storage.output, Some(OutputFormat::Sqlite));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GCA_TEST_DOC_URI", "mongodb://docs.internal:27017");

        let config = TomlConfig::from_toml_str(
            "[storage]\ndocument_store_uri = \"${GCA_TEST_DOC_URI}\"\n",
        )
        .unwrap();
        assert_eq!(
            config.storage.document_store_uri.as_deref(),
            Some("mongodb://docs.internal:27017")
        );

        std::env::remove_var("GCA_TEST_DOC_URI");
    }

    #[test]
    fn test_unknown_category_in_file_is_rejected() {
        let config = TomlConfig::from_toml_str("[collection]\ntypes = [\"bowling\"]\n").unwrap();
        let mut run = RunConfig::default();
        assert!(config.apply_to(&mut run).is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[storage\noutput = 1").unwrap_err();
        assert!(matches!(err, GcaError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\noutput_dir = \"./from-file\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.output_dir.as_deref(), Some("./from-file"));
    }
}
