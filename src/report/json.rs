use chrono::{DateTime, SecondsFormat, Utc};
use matcher::{SimilarityResult, StatisticsSummary};
use serde::Serialize;

use crate::pipeline::Analysis;

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: Metadata,
    files: Vec<FileEntry<'a>>,
    comparisons: &'a [SimilarityResult],
    statistics: Option<&'a StatisticsSummary>,
}

#[derive(Serialize)]
struct Metadata {
    generated_at: String,
    version: &'static str,
    files_processed: usize,
}

#[derive(Serialize)]
struct FileEntry<'a> {
    name: &'a str,
    path: &'a str,
}

/// Pretty-printed JSON document with metadata, file list, comparisons and
/// statistics (`null` when no pair was retained).
pub fn render_json(analysis: &Analysis, generated_at: DateTime<Utc>) -> serde_json::Result<String> {
    let report = JsonReport {
        metadata: Metadata {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION"),
            files_processed: analysis.files.len(),
        },
        files: analysis
            .files
            .iter()
            .map(|f| FileEntry {
                name: &f.name,
                path: &f.id,
            })
            .collect(),
        comparisons: &analysis.results,
        statistics: analysis.statistics.as_ref(),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;
    use chrono::TimeZone;
    use serde_json::Value;

    #[test]
    fn document_has_all_sections() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let json = render_json(&fixtures::three_files(), at).unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(doc["metadata"]["generated_at"], "2024-05-01T12:30:00Z");
        assert_eq!(doc["metadata"]["files_processed"], 3);
        assert_eq!(doc["files"][1]["name"], "b.py");
        assert_eq!(doc["files"][1]["path"], "src/b.py");
        assert_eq!(doc["comparisons"].as_array().unwrap().len(), 3);
        assert_eq!(doc["comparisons"][0]["cosine"], 0.9);
        assert_eq!(doc["statistics"]["total_pairs"], 3);
        assert_eq!(doc["statistics"]["cosine_max"], 0.9);
    }

    #[test]
    fn missing_statistics_render_as_null() {
        let mut analysis = fixtures::three_files();
        analysis.results.clear();
        analysis.statistics = None;
        let json = render_json(&analysis, Utc::now()).unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();
        assert!(doc["statistics"].is_null());
        assert_eq!(doc["comparisons"], Value::Array(Vec::new()));
    }
}
