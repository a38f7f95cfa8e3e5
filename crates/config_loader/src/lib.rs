//! # Config Loader
//!
//! Configuration loading and parsing module.
//!
//! Responsibilities:
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Generate `LoadPlan`
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let plan = ConfigLoader::load_from_path(Path::new("fact-loader.toml")).unwrap();
//! println!("Endpoint: {}", plan.api.endpoint);
//! ```

mod parser;
mod validator;

pub use contracts::LoadPlan;
pub use parser::ConfigFormat;
pub use validator::validate;

use contracts::ContractError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load configuration from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<LoadPlan, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<LoadPlan, ContractError> {
        Self::parse_and_validate(content, format)
    }

    /// Serialize LoadPlan to TOML string (token omitted)
    pub fn to_toml(plan: &LoadPlan) -> Result<String, ContractError> {
        toml::to_string_pretty(plan)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize LoadPlan to JSON string (token omitted)
    pub fn to_json(plan: &LoadPlan) -> Result<String, ContractError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn parse_and_validate(content: &str, format: ConfigFormat) -> Result<LoadPlan, ContractError> {
        let plan = parser::parse(content, format)?;
        validator::validate(&plan)?;
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL_TOML: &str = r#"
[api]
endpoint = "https://example.test/_api/facts/save_fact"

[facts]
count = 10
comment_prefix = "load"

[dispatch]
passes = 2
"#;

    #[test]
    fn test_load_from_str_toml() {
        let result = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml);
        assert!(result.is_ok(), "Failed: {:?}", result.err());
        let plan = result.unwrap();
        assert_eq!(plan.facts.count, 10);
        assert_eq!(plan.dispatch.passes, 2);
    }

    #[test]
    fn test_round_trip_toml() {
        let plan = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let serialized = ConfigLoader::to_toml(&plan).unwrap();
        let plan2 = ConfigLoader::load_from_str(&serialized, ConfigFormat::Toml).unwrap();
        assert_eq!(plan.api.endpoint, plan2.api.endpoint);
        assert_eq!(plan.facts, plan2.facts);
        assert_eq!(plan.dispatch, plan2.dispatch);
    }

    #[test]
    fn test_round_trip_json() {
        let plan = ConfigLoader::load_from_str(MINIMAL_TOML, ConfigFormat::Toml).unwrap();
        let json = ConfigLoader::to_json(&plan).unwrap();
        let plan2 = ConfigLoader::load_from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(plan.facts, plan2.facts);
    }

    #[test]
    fn test_validation_runs_after_parse() {
        let content = r#"
[api]
endpoint = "https://example.test/save"

[dispatch]
passes = 0
"#;
        let result = ConfigLoader::load_from_str(content, ConfigFormat::Toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("passes"));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(MINIMAL_TOML.as_bytes()).unwrap();

        let plan = ConfigLoader::load_from_path(file.path()).unwrap();
        assert_eq!(plan.facts.template.comment_prefix, "load");
    }

    #[test]
    fn test_load_from_path_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let err = ConfigLoader::load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported config format"));
    }
}
