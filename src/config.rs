//! YAML configuration file support for codesim.
//!
//! Every section is optional; a file containing only `version: "1.0"` yields
//! the defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "course submissions"
//!
//! compare:
//!   threshold: 0.3
//!   precision: 4
//!   use_parallel: true
//!
//! report:
//!   format: md
//!   output: "similarity_report"
//!   show_statistics: true
//!
//! languages:
//!   javascript:
//!     keywords: [function, const, let, var, return, if, else]
//!   python:
//!     comments: hash
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use canonical::{CommentSyntax, KeywordSet, Language, Tokenizer};
use matcher::CompareConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::ReportFormat;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CodesimConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Pairwise comparison settings
    #[serde(default)]
    pub compare: CompareConfig,

    /// Report output settings
    #[serde(default)]
    pub report: ReportYamlConfig,

    /// Per-language tokenizer overrides
    #[serde(default)]
    pub languages: HashMap<Language, LanguageYamlConfig>,
}

impl CodesimConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CodesimConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.compare
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("compare: {err}")))?;
        self.report.validate()?;
        for (language, overrides) in &self.languages {
            overrides.validate(*language)?;
        }
        Ok(())
    }

    /// Tokenizer with the default profile table plus every language override.
    pub fn tokenizer(&self) -> Tokenizer {
        let mut tokenizer = Tokenizer::new();
        for (language, overrides) in &self.languages {
            if let Some(keywords) = &overrides.keywords {
                tokenizer = tokenizer.with_keywords(*language, KeywordSet::new(keywords));
            }
            if let Some(comments) = overrides.comments {
                let mut profile = tokenizer.profile(*language).clone();
                profile.comments = comments;
                tokenizer = tokenizer.with_profile(*language, profile);
            }
        }
        tokenizer
    }

    pub fn compare_config(&self) -> CompareConfig {
        self.compare.clone()
    }
}

impl Default for CodesimConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            compare: CompareConfig::default(),
            report: ReportYamlConfig::default(),
            languages: HashMap::new(),
        }
    }
}

/// Report YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportYamlConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Output path without extension
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "true_value")]
    pub show_statistics: bool,
}

impl ReportYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.output.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "report.output must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportYamlConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            output: default_output(),
            show_statistics: true,
        }
    }
}

/// Tokenizer overrides for one language
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageYamlConfig {
    /// Replaces the reserved-word set; an empty list disables keyword tagging.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    #[serde(default)]
    pub comments: Option<CommentSyntax>,
}

impl LanguageYamlConfig {
    fn validate(&self, language: Language) -> Result<(), ConfigLoadError> {
        if let Some(keywords) = &self.keywords
            && keywords.iter().any(|word| !is_identifier(word))
        {
            return Err(ConfigLoadError::Validation(format!(
                "languages.{language}.keywords must be identifiers"
            )));
        }
        Ok(())
    }
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn default_output() -> String {
    "similarity_report".to_string()
}
fn true_value() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
compare:
  threshold: 0.25
  use_parallel: true
report:
  format: json
  output: "out/report"
"#;

        let config = CodesimConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.compare.threshold, 0.25);
        assert_eq!(config.compare.precision, 4);
        assert!(config.compare.use_parallel);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.output, "out/report");
        assert!(config.report.show_statistics);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
report:
  format: md
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = CodesimConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = CodesimConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = CodesimConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(config.report.output, "similarity_report");
        assert_eq!(config.tokenizer(), Tokenizer::new());
    }

    #[test]
    fn test_unsupported_version() {
        let err = CodesimConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(_)));
        assert_eq!(err.to_string(), "unsupported config version: 2.0");
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
compare:
  threshold: 1.5
"#;

        let result = CodesimConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("threshold"));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = CodesimConfig::from_yaml("version: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_keyword_validation() {
        let yaml = r#"
version: "1.0"
languages:
  java:
    keywords: ["public", "not a word"]
"#;

        let err = CodesimConfig::from_yaml(yaml).unwrap_err().to_string();
        assert!(err.contains("languages.java.keywords"));
    }

    #[test]
    fn test_language_overrides_reach_tokenizer() {
        let yaml = r#"
version: "1.0"
languages:
  javascript:
    keywords: [function, const]
  unknown:
    comments: hash
"#;

        let config = CodesimConfig::from_yaml(yaml).unwrap();
        let tokenizer = config.tokenizer();

        let js = tokenizer.tokenize("const f = function() {}", Language::JavaScript);
        assert_eq!(js.flatten(), "KEYWORD_CONST f = KEYWORD_FUNCTION ( ) { }");

        let unknown = tokenizer.tokenize("x = 1 # note", Language::Unknown);
        assert_eq!(unknown.flatten(), "x = 1");

        // untouched languages keep the defaults
        assert_eq!(
            tokenizer.profile(Language::Python),
            &canonical::LanguageProfile::for_language(Language::Python)
        );
    }
}
