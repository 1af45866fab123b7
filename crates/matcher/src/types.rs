use std::fmt;

use canonical::{Language, TokenSequence};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three similarity measures computed per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Frequency-vector cosine similarity.
    Cosine,
    /// Set-overlap Jaccard index.
    Jaccard,
    /// Normalized edit distance over flattened token strings.
    Levenshtein,
}

impl Metric {
    /// Every metric, in report column order.
    pub const ALL: [Metric; 3] = [Metric::Cosine, Metric::Jaccard, Metric::Levenshtein];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Jaccard => "jaccard",
            Metric::Levenshtein => "levenshtein",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A file ready for comparison: its identifier, token sequence and the
/// space-joined form used by the edit-distance metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedFile {
    pub id: String,
    pub language: Language,
    pub tokens: TokenSequence,
    pub flattened: String,
}

impl TokenizedFile {
    pub fn new(id: impl Into<String>, language: Language, tokens: TokenSequence) -> Self {
        let flattened = tokens.flatten();
        Self {
            id: id.into(),
            language,
            tokens,
            flattened,
        }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Scores for one retained pair. Immutable once produced by `compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub file_a: String,
    pub file_b: String,
    pub cosine: f64,
    pub jaccard: f64,
    pub levenshtein: f64,
}

impl SimilarityResult {
    /// Largest of the three scores; the value the threshold is compared with.
    pub fn max_score(&self) -> f64 {
        self.cosine.max(self.jaccard).max(self.levenshtein)
    }

    pub fn score(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Cosine => self.cosine,
            Metric::Jaccard => self.jaccard,
            Metric::Levenshtein => self.levenshtein,
        }
    }
}

/// Configuration for a single `compare` call.
///
/// Serde-friendly so it can be embedded in the YAML configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Semantic version of the comparison rules.
    #[serde(default = "CompareConfig::default_version")]
    pub version: u32,
    /// Inclusive minimum of a pair's maximum score for it to be retained.
    #[serde(default)]
    pub threshold: f64,
    /// Decimal places kept in stored scores.
    #[serde(default = "CompareConfig::default_precision")]
    pub precision: u32,
    /// Score pairs on the rayon thread pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl CompareConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_precision() -> u32 {
        4
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), CompareError> {
        if self.version == 0 {
            return Err(CompareError::InvalidConfig("version must be >= 1".into()));
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(CompareError::InvalidConfig(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.threshold
            )));
        }
        if self.precision > 10 {
            return Err(CompareError::InvalidConfig(format!(
                "precision must be <= 10, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            threshold: 0.0,
            precision: Self::default_precision(),
            use_parallel: false,
        }
    }
}

/// Errors produced by the comparison layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompareError {
    /// Fewer than two tokenized files were supplied.
    #[error("at least 2 valid files are required for comparison, found {found}")]
    InsufficientFiles { found: usize },
    #[error("invalid compare config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonical::{tokenize, Token};

    #[test]
    fn default_config_is_valid() {
        let cfg = CompareConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.precision, 4);
        assert_eq!(cfg.threshold, 0.0);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(CompareConfig::new().with_threshold(0.0).validate().is_ok());
        assert!(CompareConfig::new().with_threshold(1.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = CompareConfig::new()
                .with_threshold(bad)
                .validate()
                .expect_err("config should be invalid");
            match err {
                CompareError::InvalidConfig(msg) => assert!(msg.contains("threshold")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn zero_version_and_large_precision_rejected() {
        let cfg = CompareConfig {
            version: 0,
            ..CompareConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, CompareError::InvalidConfig(_)));
        assert!(err.to_string().contains("version"));

        let cfg = CompareConfig::new().with_precision(11);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("precision"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let cfg: CompareConfig = serde_json::from_str(r#"{"threshold": 0.5}"#).unwrap();
        assert_eq!(cfg.threshold, 0.5);
        assert_eq!(cfg.precision, 4);
        assert_eq!(cfg.version, 1);
    }

    #[test]
    fn tokenized_file_flattens_once() {
        let tokens = tokenize("def f(): pass", Language::Python);
        let file = TokenizedFile::new("a.py", Language::Python, tokens);
        assert_eq!(file.flattened, "KEYWORD_DEF f ( ) : KEYWORD_PASS");
        assert_eq!(file.token_count(), 6);
        assert_eq!(file.tokens[0], Token::keyword("def"));
    }

    #[test]
    fn max_score_and_metric_lookup() {
        let result = SimilarityResult {
            file_a: "a".into(),
            file_b: "b".into(),
            cosine: 0.3,
            jaccard: 0.9,
            levenshtein: 0.5,
        };
        assert_eq!(result.max_score(), 0.9);
        let scores: Vec<f64> = Metric::ALL.iter().map(|m| result.score(*m)).collect();
        assert_eq!(scores, vec![0.3, 0.9, 0.5]);
        assert_eq!(Metric::Levenshtein.to_string(), "levenshtein");
    }

    #[test]
    fn result_serializes_with_field_names() {
        let result = SimilarityResult {
            file_a: "a.py".into(),
            file_b: "b.py".into(),
            cosine: 1.0,
            jaccard: 0.5,
            levenshtein: 0.25,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["file_a"], "a.py");
        assert_eq!(json["jaccard"], 0.5);
    }
}
