use std::time::Instant;

use rayon::prelude::*;
use similarity::{cosine_from_models, jaccard_similarity, levenshtein_ratio, FrequencyModel};
use tracing::{info, Level};

use crate::metrics::metrics_recorder;
use crate::types::{CompareConfig, CompareError, SimilarityResult, TokenizedFile};

/// Every unordered index pair `(i, j)` with `i < j < n`.
///
/// The first index is fixed while the second walks the rest of the list, so
/// the order follows the input order and has `n * (n - 1) / 2` entries.
pub fn pair_indices(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_mul(n.saturating_sub(1)) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Scores every unordered pair of `files` and keeps the pairs whose largest
/// score reaches `cfg.threshold`.
///
/// The threshold is applied to unrounded scores; retained scores are rounded
/// to `cfg.precision` decimals. Output order is the pair enumeration order
/// whether or not `cfg.use_parallel` is set.
pub fn compare(
    files: &[TokenizedFile],
    cfg: &CompareConfig,
) -> Result<Vec<SimilarityResult>, CompareError> {
    if files.len() < 2 {
        return Err(CompareError::InsufficientFiles { found: files.len() });
    }
    cfg.validate()?;

    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "matcher.compare",
        files = files.len(),
        parallel = cfg.use_parallel
    );
    let _guard = span.enter();

    let models: Vec<FrequencyModel<'_>> = files
        .iter()
        .map(|file| FrequencyModel::from_tokens(file.tokens.as_slice()))
        .collect();
    let pairs = pair_indices(files.len());

    let score = |&(i, j): &(usize, usize)| score_pair(files, &models, i, j, cfg);
    let scored: Vec<Option<SimilarityResult>> = if cfg.use_parallel {
        pairs.par_iter().map(score).collect()
    } else {
        pairs.iter().map(score).collect()
    };
    let results: Vec<SimilarityResult> = scored.into_iter().flatten().collect();

    let latency = start.elapsed();
    info!(
        candidate_pairs = pairs.len(),
        retained_pairs = results.len(),
        threshold = cfg.threshold,
        elapsed_micros = latency.as_micros(),
        "compare_complete"
    );
    if let Some(recorder) = metrics_recorder() {
        recorder.record_compare(files.len(), pairs.len(), results.len(), latency);
    }

    Ok(results)
}

fn score_pair(
    files: &[TokenizedFile],
    models: &[FrequencyModel<'_>],
    i: usize,
    j: usize,
    cfg: &CompareConfig,
) -> Option<SimilarityResult> {
    let (a, b) = (&files[i], &files[j]);
    let cosine = cosine_from_models(&models[i], &models[j]);
    let jaccard = jaccard_similarity(a.tokens.as_slice(), b.tokens.as_slice());
    let levenshtein = levenshtein_ratio(&a.flattened, &b.flattened);

    if cosine.max(jaccard).max(levenshtein) < cfg.threshold {
        return None;
    }

    Some(SimilarityResult {
        file_a: a.id.clone(),
        file_b: b.id.clone(),
        cosine: round_to(cosine, cfg.precision),
        jaccard: round_to(jaccard, cfg.precision),
        levenshtein: round_to(levenshtein, cfg.precision),
    })
}

/// Rounds to `precision` decimals, ties to even on the exact binary value.
///
/// Fixed-precision formatting works on the exact decimal expansion, so
/// `1/32` stores as `0.0312` rather than `0.0313`.
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    format!("{:.*}", precision as usize, value)
        .parse()
        .unwrap_or(value)
}
