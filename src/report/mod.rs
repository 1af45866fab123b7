//! Report renderers for an [`Analysis`].
//!
//! Each renderer is a pure function from the analysis (and, where a report
//! carries a timestamp, the generation time) to a string;
//! [`write_report`] picks the renderer and writes `<output_base>.<ext>`.

mod csv;
mod json;
mod markdown;

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::pipeline::Analysis;

pub use self::csv::render_csv;
pub use self::json::render_json;
pub use self::markdown::{Consistency, SimilarityLevel, render_markdown, similarity_level};

/// Output format of the written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    #[serde(rename = "md", alias = "markdown")]
    Markdown,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [Self::Csv, Self::Json, Self::Markdown];

    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown report format `{0}` (expected csv, json or md)")]
pub struct ParseReportFormatError(pub String);

impl FromStr for ReportFormat {
    type Err = ParseReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            _ => Err(ParseReportFormatError(s.to_string())),
        }
    }
}

/// Renders `analysis` in `format` with `at` as the report time.
pub fn render(
    analysis: &Analysis,
    format: ReportFormat,
    at: DateTime<Utc>,
) -> io::Result<String> {
    match format {
        ReportFormat::Csv => Ok(render_csv(analysis)),
        ReportFormat::Json => render_json(analysis, at).map_err(io::Error::other),
        ReportFormat::Markdown => render_markdown(analysis, at).map_err(io::Error::other),
    }
}

/// Writes the report to `<output_base>.<ext>` and returns that path.
pub fn write_report(
    analysis: &Analysis,
    format: ReportFormat,
    output_base: impl AsRef<Path>,
) -> io::Result<PathBuf> {
    let path = report_path(output_base.as_ref(), format);
    let body = render(analysis, format, Utc::now())?;
    fs::write(&path, body)?;
    info!(path = %path.display(), format = %format, "report_written");
    Ok(path)
}

fn report_path(base: &Path, format: ReportFormat) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(s: &str) -> Result<ReportFormat, ParseReportFormatError> {
        s.parse()
    }

    #[test]
    fn format_parses_and_names_extension() {
        assert_eq!(parse("csv"), Ok(ReportFormat::Csv));
        assert_eq!(parse("JSON"), Ok(ReportFormat::Json));
        assert_eq!(parse("md"), Ok(ReportFormat::Markdown));
        assert_eq!(parse("markdown"), Ok(ReportFormat::Markdown));
        assert!(parse("pdf").is_err());
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::default(), ReportFormat::Csv);
    }

    #[test]
    fn extension_is_appended_not_replaced() {
        let path = report_path(Path::new("out/report.v2"), ReportFormat::Json);
        assert_eq!(path, PathBuf::from("out/report.v2.json"));
    }

    #[test]
    fn write_report_creates_file_for_each_format() {
        let dir = TempDir::new().unwrap();
        let analysis = fixtures::three_files();
        for format in ReportFormat::ALL {
            let base = dir.path().join("similarity_report");
            let path = write_report(&analysis, format, &base).unwrap();
            assert_eq!(path.extension().unwrap(), format.extension());
            let body = fs::read_to_string(&path).unwrap();
            assert!(body.contains("b.py"));
        }
    }
}
