use std::path::Path;
use std::time::Instant;

use canonical::{Language, Tokenizer};
use matcher::{
    CompareConfig, CompareError, SimilarityResult, StatisticsSummary, TokenizedFile, aggregate,
    compare,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, info, warn};

use crate::config::{CodesimConfig, ConfigLoadError};
use crate::source::{SourceFile, file_name};

/// Errors that end an analysis run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("comparison failed: {0}")]
    Compare(#[from] CompareError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

/// A file that took part in the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    /// Identifier used in results (the path as given).
    pub id: String,
    /// Final path component.
    pub name: String,
    pub language: Language,
    pub token_count: usize,
}

/// A file left out of the comparison and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub id: String,
    pub reason: String,
}

/// Everything a report renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub files: Vec<FileSummary>,
    pub excluded: Vec<Exclusion>,
    pub results: Vec<SimilarityResult>,
    pub statistics: Option<StatisticsSummary>,
}

impl Analysis {
    /// Number of candidate pairs before threshold filtering.
    pub fn candidate_pairs(&self) -> usize {
        let n = self.files.len();
        n * n.saturating_sub(1) / 2
    }
}

/// Tokenizes `sources`, drops files without tokens, compares the rest and
/// aggregates the retained pairs.
pub fn analyze(
    sources: &[SourceFile],
    tokenizer: &Tokenizer,
    cfg: &CompareConfig,
) -> Result<Analysis, PipelineError> {
    analyze_with_exclusions(sources, Vec::new(), tokenizer, cfg)
}

/// Loads every path, excluding the ones that fail validation, then runs
/// [`analyze`] with the tokenizer and compare settings from `config`.
pub fn load_and_analyze<I, P>(paths: I, config: &CodesimConfig) -> Result<Analysis, PipelineError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    config.validate()?;

    let mut sources = Vec::new();
    let mut excluded = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match SourceFile::load(path) {
            Ok(source) => sources.push(source),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "source_excluded");
                excluded.push(Exclusion {
                    id: path.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    let tokenizer = config.tokenizer();
    analyze_with_exclusions(&sources, excluded, &tokenizer, &config.compare_config())
}

fn analyze_with_exclusions(
    sources: &[SourceFile],
    mut excluded: Vec<Exclusion>,
    tokenizer: &Tokenizer,
    cfg: &CompareConfig,
) -> Result<Analysis, PipelineError> {
    let start = Instant::now();
    let span = tracing::span!(Level::INFO, "codesim.analyze", sources = sources.len());
    let _guard = span.enter();

    let mut tokenized = Vec::with_capacity(sources.len());
    for source in sources {
        let tokens = tokenizer.tokenize(&source.text, source.language);
        if tokens.is_empty() {
            warn!(
                path = %source.path,
                language = %source.language,
                "no_tokens_extracted"
            );
            excluded.push(Exclusion {
                id: source.path.clone(),
                reason: "no tokens could be extracted".to_string(),
            });
            continue;
        }
        tokenized.push(TokenizedFile::new(source.path.clone(), source.language, tokens));
    }

    let results = compare(&tokenized, cfg)?;
    let statistics = aggregate(&results);

    let files: Vec<FileSummary> = tokenized
        .iter()
        .map(|file| FileSummary {
            id: file.id.clone(),
            name: file_name(&file.id).to_string(),
            language: file.language,
            token_count: file.token_count(),
        })
        .collect();

    info!(
        files = files.len(),
        excluded = excluded.len(),
        retained_pairs = results.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "analysis_complete"
    );

    Ok(Analysis {
        files,
        excluded,
        results,
        statistics,
    })
}
