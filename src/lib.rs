//! Workspace umbrella crate for codesim.
//!
//! This crate stitches the tokenizer (`canonical`), the metric functions
//! (`similarity`) and the pairwise comparator (`matcher`) into one pipeline
//! over files on disk, and renders the outcome as CSV, JSON or Markdown.
//!
//! ```no_run
//! use codesim::{load_and_analyze, write_report, CodesimConfig, ReportFormat};
//!
//! let config = CodesimConfig::default();
//! let analysis = load_and_analyze(&["a.py", "b.py", "c.py"], &config)?;
//! for r in &analysis.results {
//!     println!("{} <-> {}: {:.3}", r.file_a, r.file_b, r.max_score());
//! }
//! write_report(&analysis, ReportFormat::Markdown, "similarity_report")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod pipeline;
pub mod report;
pub mod source;

pub use canonical::{
    CommentSyntax, KeywordSet, Language, LanguageProfile, Token, TokenSequence, Tokenizer,
    collapse_whitespace, tokenize,
};
pub use matcher::{
    CompareConfig, CompareError, CompareMetrics, Metric, MetricStats, SimilarityResult,
    StatisticsSummary, TokenizedFile, aggregate, compare, pair_indices, set_compare_metrics,
};
pub use similarity::{
    FrequencyModel, cosine_similarity, edit_distance, jaccard_similarity, levenshtein_ratio,
    to_frequency,
};

pub use crate::config::{CodesimConfig, ConfigLoadError, LanguageYamlConfig, ReportYamlConfig};
pub use crate::pipeline::{
    Analysis, Exclusion, FileSummary, PipelineError, analyze, load_and_analyze,
};
pub use crate::report::{ReportFormat, render, write_report};
pub use crate::source::{ACCEPTED_EXTENSIONS, SourceError, SourceFile};
