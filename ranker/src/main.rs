use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use docrank::{build_report, demo, load_path, write_json, write_text, ReportOptions};
use docrank_core::analyze;
use docrank_core::tokenizer::{prepare_corpus, NormalizeOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank documents by summed TF-IDF of their words", long_about = None)]
struct Cli {
    /// Input path (file or directory)
    #[arg(long, required_unless_present = "demo")]
    input: Option<PathBuf>,
    /// Rank the built-in sample corpus instead of reading input
    #[arg(long, conflicts_with = "input")]
    demo: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Keep tokens unstemmed
    #[arg(long, default_value_t = false)]
    no_stem: bool,
    /// Print only the first N ranked documents
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
    /// Show the N highest-weighted words of each document
    #[arg(long, value_name = "N")]
    show_terms: Option<usize>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let sources = match &cli.input {
        Some(input) => load_path(input)?,
        None => demo::documents(),
    };
    let options = NormalizeOptions { stem: !cli.no_stem };
    let corpus = prepare_corpus(sources.iter().map(|s| s.text.as_str()), &options);

    let analysis = analyze(&corpus).context("failed to rank documents")?;
    tracing::info!(num_docs = corpus.len(), num_words = analysis.tfidf.num_words(), "ranking complete");

    let report = build_report(&analysis, &sources, &ReportOptions { limit: cli.limit, show_terms: cli.show_terms });
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => write_text(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}
