use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use fxhash::FxHashMap;
use matcher::{Metric, SimilarityResult, StatisticsSummary};

use crate::pipeline::Analysis;
use crate::source::file_name;

/// Pairs at or above this maximum score are listed as high similarities.
const HIGH_PAIR_THRESHOLD: f64 = 0.7;
/// The cosine matrix is only drawn for more files than this.
const MATRIX_MIN_FILES: usize = 3;
/// Width of a full-scale bar in the distribution block.
const BAR_WIDTH: f64 = 20.0;

/// Overall similarity level derived from the mean of the three metric means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityLevel {
    High,
    Medium,
    Low,
}

impl SimilarityLevel {
    pub fn label(self) -> &'static str {
        match self {
            SimilarityLevel::High => "HIGH",
            SimilarityLevel::Medium => "MEDIUM",
            SimilarityLevel::Low => "LOW",
        }
    }

    fn interpretation(self) -> &'static str {
        match self {
            SimilarityLevel::High => "Significant similarities were detected that need attention.",
            SimilarityLevel::Medium => "Moderate similarities are present between some files.",
            SimilarityLevel::Low => "The files differ considerably in structure.",
        }
    }
}

/// `HIGH` from 0.7, `MEDIUM` from 0.4, otherwise `LOW`.
pub fn similarity_level(score: f64) -> SimilarityLevel {
    if score >= 0.7 {
        SimilarityLevel::High
    } else if score >= 0.4 {
        SimilarityLevel::Medium
    } else {
        SimilarityLevel::Low
    }
}

fn marker(score: f64) -> &'static str {
    if score >= 0.8 {
        "🔴"
    } else if score >= 0.6 {
        "🟡"
    } else if score >= 0.4 {
        "🟢"
    } else {
        "⚪"
    }
}

/// How many of the three metrics flag at least one pair as highly similar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// All three metrics agree.
    High,
    /// Two of the three agree.
    Moderate,
    /// At most one metric flags a pair.
    Divergent,
}

impl Consistency {
    pub fn of(results: &[SimilarityResult]) -> Self {
        let flagging = Metric::ALL
            .into_iter()
            .filter(|&metric| results.iter().any(|r| r.score(metric) >= HIGH_PAIR_THRESHOLD))
            .count();
        match flagging {
            3 => Consistency::High,
            2 => Consistency::Moderate,
            _ => Consistency::Divergent,
        }
    }

    fn verdict(self) -> &'static str {
        match self {
            Consistency::High => {
                "**High consistency**: all three metrics flag high similarities, \
                 which makes the analysis more reliable."
            }
            Consistency::Moderate => {
                "**Moderate consistency**: at least two metrics agree on the main findings."
            }
            Consistency::Divergent => {
                "**Divergent metrics**: each metric captures a different aspect of \
                 similarity, suggesting complex similarity patterns."
            }
        }
    }
}

fn finding(level: SimilarityLevel) -> &'static str {
    match level {
        SimilarityLevel::High => {
            "**Significant similarity detected**: the files share structural patterns \
             that suggest a common origin or code reuse."
        }
        SimilarityLevel::Medium => {
            "**Moderate similarity observed**: some similarity exists, possibly from \
             shared conventions or similar functionality."
        }
        SimilarityLevel::Low => {
            "**Diverse files**: the code differs substantially, indicating independent \
             implementations."
        }
    }
}

/// Review from 0.8, monitoring from 0.6, otherwise nothing to act on.
fn recommendations(overall: f64) -> &'static [&'static str] {
    if overall >= 0.8 {
        &[
            "**Manual review needed**: inspect the highly similar files for duplication \
             or plagiarism.",
            "**Refactoring**: consider extracting shared code into reusable modules.",
        ]
    } else if overall >= 0.6 {
        &[
            "**Monitoring recommended**: track how these similarities evolve in future versions.",
            "**Documentation**: record why the high similarities exist if they are intentional.",
        ]
    } else {
        &[
            "**Diversity confirmed**: the observed variability is expected in independent work.",
        ]
    }
}

fn bar(score: f64) -> String {
    "█".repeat((score.clamp(0.0, 1.0) * BAR_WIDTH) as usize)
}

fn metric_title(metric: Metric) -> &'static str {
    match metric {
        Metric::Cosine => "Cosine similarity",
        Metric::Jaccard => "Jaccard index",
        Metric::Levenshtein => "Levenshtein ratio",
    }
}

/// Human-readable Markdown report.
pub fn render_markdown(
    analysis: &Analysis,
    generated_at: DateTime<Utc>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_markdown(&mut out, analysis, generated_at)?;
    Ok(out)
}

fn write_markdown(
    out: &mut String,
    analysis: &Analysis,
    generated_at: DateTime<Utc>,
) -> fmt::Result {
    writeln!(out, "# Source Code Similarity Report\n")?;
    writeln!(
        out,
        "**Computational analysis of similarity between source files**"
    )?;
    writeln!(out, "*Cosine, Jaccard and Levenshtein metrics*\n")?;
    writeln!(out, "---\n")?;

    writeln!(out, "## Analysis Information\n")?;
    let generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC");
    writeln!(out, "- **Generated:** {generated}")?;
    writeln!(out, "- **Version:** {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "- **Files analyzed:** {}", analysis.files.len())?;
    writeln!(out, "- **Total comparisons:** {}", analysis.results.len())?;
    writeln!(out, "- **Metrics:** Cosine, Jaccard, Levenshtein")?;
    writeln!(
        out,
        "- **Algorithms:** Salton et al. (1975), Jaccard (1912), Levenshtein (1966)\n"
    )?;

    if let Some(stats) = &analysis.statistics {
        write_summary(out, &analysis.results, stats)?;
    }

    writeln!(out, "## Files Analyzed\n")?;
    for (i, file) in analysis.files.iter().enumerate() {
        writeln!(out, "{}. `{}`", i + 1, file.name)?;
    }
    writeln!(out)?;

    if !analysis.excluded.is_empty() {
        writeln!(out, "### Excluded Files\n")?;
        for exclusion in &analysis.excluded {
            let name = file_name(&exclusion.id);
            writeln!(out, "- `{name}`: {}", exclusion.reason)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Similarity Results\n")?;
    if analysis.files.len() > MATRIX_MIN_FILES {
        writeln!(out, "### Similarity Matrix (Cosine)\n")?;
        write_matrix(out, analysis, Metric::Cosine)?;
        writeln!(out)?;
    }

    writeln!(out, "### Detailed Comparisons\n")?;
    writeln!(out, "| File A | File B | Cosine | Jaccard | Levenshtein |")?;
    writeln!(out, "|--------|--------|--------|---------|-------------|")?;
    for r in &analysis.results {
        writeln!(
            out,
            "| `{}` | `{}` | {:.3} | {:.3} | {:.3} |",
            file_name(&r.file_a),
            file_name(&r.file_b),
            r.cosine,
            r.jaccard,
            r.levenshtein
        )?;
    }
    writeln!(out)?;

    if let Some(stats) = &analysis.statistics {
        writeln!(out, "## Summary Statistics\n")?;
        write_distribution(out, stats)?;

        writeln!(out, "### Detailed Metrics\n")?;
        writeln!(out, "| Metric | Min | Mean | Max |")?;
        writeln!(out, "|--------|-----|------|-----|")?;
        for metric in Metric::ALL {
            let m = stats.metric(metric);
            writeln!(
                out,
                "| **{}** | {:.3} | {:.3} | {:.3} |",
                metric_title(metric),
                m.min,
                m.mean,
                m.max
            )?;
        }
        writeln!(out)?;

        let high: Vec<&SimilarityResult> = analysis
            .results
            .iter()
            .filter(|r| r.max_score() >= HIGH_PAIR_THRESHOLD)
            .collect();
        if !high.is_empty() {
            writeln!(out, "### High Similarities Detected\n")?;
            writeln!(
                out,
                "The following pairs show high similarity (≥ {HIGH_PAIR_THRESHOLD}):\n"
            )?;
            for r in high {
                writeln!(
                    out,
                    "- `{}` ↔ `{}`: **{:.3}**",
                    file_name(&r.file_a),
                    file_name(&r.file_b),
                    r.max_score()
                )?;
            }
            writeln!(out)?;
        }
    }

    writeln!(out, "## Interpreting Results\n")?;
    for line in [
        "- **0.0 - 0.3:** low similarity (very different code)",
        "- **0.3 - 0.7:** medium similarity (some shared elements)",
        "- **0.7 - 0.9:** high similarity (very similar code)",
        "- **0.9 - 1.0:** very high similarity (possible duplication)",
    ] {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    if let Some(stats) = &analysis.statistics {
        write_conclusions(out, &analysis.results, stats)?;
    }

    writeln!(out, "---")?;
    writeln!(out, "*Generated by codesim {}*", env!("CARGO_PKG_VERSION"))
}

fn write_summary(
    out: &mut String,
    results: &[SimilarityResult],
    stats: &StatisticsSummary,
) -> fmt::Result {
    writeln!(out, "## Executive Summary\n")?;

    let overall = stats.overall_mean();
    let level = similarity_level(overall);
    writeln!(
        out,
        "- **Overall similarity level:** **{}** ({overall:.3})",
        level.label()
    )?;
    writeln!(out, "- **Interpretation:** {}", level.interpretation())?;
    writeln!(
        out,
        "- **Most discriminating metric:** {}",
        metric_title(stats.most_discriminating())
    )?;

    // First pair with the strictly largest maximum score.
    let mut best: Option<&SimilarityResult> = None;
    for r in results {
        if r.max_score() > best.map_or(0.0, SimilarityResult::max_score) {
            best = Some(r);
        }
    }
    if let Some(r) = best {
        writeln!(
            out,
            "- **Most similar files:** `{}` and `{}` ({:.3})",
            file_name(&r.file_a),
            file_name(&r.file_b),
            r.max_score()
        )?;
    }
    writeln!(out)
}

/// Min, mean and max of every metric as bars scaled to [`BAR_WIDTH`].
fn write_distribution(out: &mut String, stats: &StatisticsSummary) -> fmt::Result {
    writeln!(out, "### Similarity Distribution\n")?;
    writeln!(out, "```")?;
    for metric in Metric::ALL {
        let m = stats.metric(metric);
        writeln!(out, "{}", metric_title(metric))?;
        writeln!(out, "Min  {:.3} {}", m.min, bar(m.min))?;
        writeln!(out, "Mean {:.3} {}", m.mean, bar(m.mean))?;
        writeln!(out, "Max  {:.3} {}", m.max, bar(m.max))?;
    }
    writeln!(out, "```\n")
}

fn write_conclusions(
    out: &mut String,
    results: &[SimilarityResult],
    stats: &StatisticsSummary,
) -> fmt::Result {
    if results.is_empty() {
        return Ok(());
    }
    let overall = stats.overall_mean();

    writeln!(out, "## Conclusions\n")?;
    writeln!(out, "### Main Finding\n")?;
    writeln!(out, "- {}\n", finding(similarity_level(overall)))?;

    writeln!(out, "### Metric Consistency\n")?;
    for metric in Metric::ALL {
        let high = results
            .iter()
            .filter(|r| r.score(metric) >= HIGH_PAIR_THRESHOLD)
            .count();
        writeln!(
            out,
            "- {}: {high} of {} pairs ≥ {HIGH_PAIR_THRESHOLD}",
            metric_title(metric),
            results.len()
        )?;
    }
    writeln!(out, "- {}\n", Consistency::of(results).verdict())?;

    writeln!(out, "### Recommendations\n")?;
    for line in recommendations(overall) {
        writeln!(out, "- {line}")?;
    }
    writeln!(out)
}

/// Upper triangle holds the metric score with a level marker, the diagonal
/// is 1.000 and the lower triangle is `-`. Filtered pairs show 0.000.
fn write_matrix(out: &mut String, analysis: &Analysis, metric: Metric) -> fmt::Result {
    let mut scores: FxHashMap<(&str, &str), f64> = FxHashMap::default();
    for r in &analysis.results {
        scores.insert((r.file_a.as_str(), r.file_b.as_str()), r.score(metric));
        scores.insert((r.file_b.as_str(), r.file_a.as_str()), r.score(metric));
    }

    write!(out, "| |")?;
    for file in &analysis.files {
        write!(out, " `{}` |", file.name)?;
    }
    writeln!(out)?;
    writeln!(out, "|{}", "-|".repeat(analysis.files.len() + 1))?;

    for (i, row) in analysis.files.iter().enumerate() {
        write!(out, "| `{}` |", row.name)?;
        for (j, col) in analysis.files.iter().enumerate() {
            if i == j {
                write!(out, " **1.000** |")?;
            } else if i < j {
                let score = scores
                    .get(&(row.id.as_str(), col.id.as_str()))
                    .copied()
                    .unwrap_or(0.0);
                write!(out, " {}**{score:.3}** |", marker(score))?;
            } else {
                write!(out, " - |")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
