//! # codesim matcher
//!
//! ## Purpose
//!
//! `matcher` sits on top of the tokenizer (`canonical`) and the metric
//! functions (`similarity`). Given a list of tokenized files it enumerates
//! every unordered pair, scores each pair with all three metrics, keeps the
//! pairs that reach a threshold and reduces the retained list to summary
//! statistics.
//!
//! ## Core Types
//!
//! - [`TokenizedFile`]: identifier + token sequence + flattened string.
//! - [`CompareConfig`]: threshold, rounding precision and the opt-in rayon
//!   switch.
//! - [`SimilarityResult`]: one retained pair's three scores.
//! - [`StatisticsSummary`]: min/mean/max per [`Metric`] and the pair count.
//!
//! ## Guarantees
//!
//! - For `N` files exactly `N * (N - 1) / 2` candidate pairs are scored.
//! - Output order is the pair enumeration order (first file fixed, the rest
//!   walked in input order), with or without parallel scoring.
//! - The threshold is inclusive and applies to unrounded scores.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::{tokenize, Language};
//! use matcher::{aggregate, compare, CompareConfig, TokenizedFile};
//!
//! let files: Vec<TokenizedFile> = [
//!     ("a.py", "def add(a, b):\n    return a + b"),
//!     ("b.py", "def add(x, y):\n    return x + y"),
//!     ("c.py", "while True:\n    pass"),
//! ]
//! .into_iter()
//! .map(|(id, src)| TokenizedFile::new(id, Language::Python, tokenize(src, Language::Python)))
//! .collect();
//!
//! let results = compare(&files, &CompareConfig::new().with_threshold(0.5)).unwrap();
//! assert_eq!(results[0].file_a, "a.py");
//! assert_eq!(results[0].file_b, "b.py");
//!
//! let stats = aggregate(&results).unwrap();
//! assert_eq!(stats.total_pairs, results.len());
//! ```
//!
//! ## Observability
//!
//! Every `compare` call runs inside a `matcher.compare` tracing span and
//! emits one `compare_complete` event. Install a [`CompareMetrics`]
//! implementation via [`set_compare_metrics`] to record the same figures in
//! a metrics backend.

pub mod engine;
pub mod metrics;
pub mod stats;
pub mod types;

pub use crate::engine::{compare, pair_indices};
pub use crate::metrics::{set_compare_metrics, CompareMetrics};
pub use crate::stats::{aggregate, MetricStats, StatisticsSummary};
pub use crate::types::{CompareConfig, CompareError, Metric, SimilarityResult, TokenizedFile};
