use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use codesim::source::file_name;
use codesim::{Analysis, CodesimConfig, ReportFormat, load_and_analyze, write_report};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
Examples:
  codesim a.py b.py c.py
  codesim *.py --threshold 0.5 --format md
  codesim src/*.java --format json --output java_report";

/// Source code similarity analyzer
///
/// Compares every pair of the given files with cosine similarity, the
/// Jaccard index and the Levenshtein ratio over normalized tokens, then
/// writes a CSV, JSON or Markdown report.
#[derive(Parser, Debug)]
#[command(name = "codesim", author, version, about, after_help = AFTER_HELP)]
struct Args {
    /// Source files to compare (at least 2).
    files: Vec<PathBuf>,

    /// Minimum similarity (0.0-1.0) a pair needs on any metric to be reported.
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Report format: csv, json or md.
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Report path without extension.
    #[arg(short, long)]
    output: Option<String>,

    /// Do not print summary statistics.
    #[arg(long)]
    no_stats: bool,

    /// Score pairs in parallel.
    #[arg(long)]
    parallel: bool,

    /// YAML configuration file; command-line flags take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.files.len() < 2 {
        bail!("at least 2 files are required for comparison");
    }
    if let Some(threshold) = args.threshold
        && !(0.0..=1.0).contains(&threshold)
    {
        bail!("threshold must be between 0.0 and 1.0");
    }

    let mut config = match &args.config {
        Some(path) => CodesimConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CodesimConfig::default(),
    };
    apply_overrides(&mut config, &args);

    // Exclusions are reported by the pipeline's `warn!` events.
    let analysis = load_and_analyze(&args.files, &config)?;

    print_results(&analysis);
    if analysis.results.is_empty() {
        tracing::warn!(
            threshold = config.compare.threshold,
            "no similarities found above threshold"
        );
        println!(
            "\nNo similarities found above threshold {}",
            config.compare.threshold
        );
        return Ok(());
    }

    if config.report.show_statistics {
        print_statistics(&analysis);
    }

    let path = write_report(&analysis, config.report.format, &config.report.output)
        .with_context(|| format!("writing {} report", config.report.format))?;
    println!("\nReport written: {}", path.display());
    Ok(())
}

fn apply_overrides(config: &mut CodesimConfig, args: &Args) {
    if let Some(threshold) = args.threshold {
        config.compare.threshold = threshold;
    }
    if args.parallel {
        config.compare.use_parallel = true;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    if let Some(output) = &args.output {
        config.report.output = output.clone();
    }
    if args.no_stats {
        config.report.show_statistics = false;
    }
}

fn print_results(analysis: &Analysis) {
    for file in &analysis.files {
        println!(
            "processed {} ({} tokens, language: {})",
            file.id, file.token_count, file.language
        );
    }
    println!("\nComparing {} files...\n", analysis.files.len());
    println!(
        "{:60} | {:>7} | {:>8} | {:>8} |",
        "Comparison", "Cosine", "Jaccard", "Leven."
    );
    println!("{}", "-".repeat(95));
    for r in &analysis.results {
        let pair = format!("{} <-> {}", file_name(&r.file_a), file_name(&r.file_b));
        println!(
            "{pair:60} | {:7.3} | {:8.3} | {:8.3} |",
            r.cosine, r.jaccard, r.levenshtein
        );
    }
}

fn print_statistics(analysis: &Analysis) {
    let Some(stats) = &analysis.statistics else {
        return;
    };
    println!("\nSimilarity statistics:");
    println!("  Total comparisons: {}", stats.total_pairs);
    println!(
        "  Cosine      - mean: {:.3}, max: {:.3}",
        stats.cosine.mean, stats.cosine.max
    );
    println!(
        "  Jaccard     - mean: {:.3}, max: {:.3}",
        stats.jaccard.mean, stats.jaccard.max
    );
    println!(
        "  Levenshtein - mean: {:.3}, max: {:.3}",
        stats.levenshtein.mean, stats.levenshtein.max
    );
}
