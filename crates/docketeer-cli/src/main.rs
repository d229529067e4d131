mod display;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use docketeer_core::relevance::filter_by_categories;
use docketeer_core::{
    DocketEntry, DocketSummary, ReliefCategory, RELEVANT_CATEGORIES, docket, parse_docket_report,
};
use tracing_subscriber::EnvFilter;

/// Parse a regulatory hearing docket into structured case entries.
#[derive(Debug, Parser)]
#[command(name = "docketeer", version, about)]
struct Cli {
    /// Docket text file; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, env = "DOCKETEER_FORMAT", default_value_t = Format::Json)]
    format: Format,

    /// Keep only entries in the default relevant categories
    #[arg(long, env = "DOCKETEER_RELEVANT_ONLY")]
    relevant_only: bool,

    /// Keep only entries in this relief category (repeatable); overrides --relevant-only
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<ReliefCategory>,

    /// Drop entries that failed validation
    #[arg(long)]
    valid_only: bool,

    /// Print document counts to stderr
    #[arg(long)]
    summary: bool,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Cards,
    Table,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!("docketeer v{}", env!("CARGO_PKG_VERSION"));

    let text = read_input(cli.input.as_deref())?;
    let report = parse_docket_report(&text);

    if cli.summary {
        eprint!(
            "{}",
            display::render_summary(&DocketSummary::from_report(&report))?
        );
    }

    let entries = select_entries(&cli, &report.entries);
    println!("{}", render(&cli, &entries)?);
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCKETEER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read docket from {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read docket from stdin")?;
            Ok(text)
        }
    }
}

fn select_entries(cli: &Cli, entries: &[DocketEntry]) -> Vec<DocketEntry> {
    let picked = if !cli.categories.is_empty() {
        filter_by_categories(entries, &cli.categories)
    } else if cli.relevant_only {
        filter_by_categories(entries, RELEVANT_CATEGORIES)
    } else {
        entries.iter().collect()
    };

    picked
        .into_iter()
        .filter(|e| !cli.valid_only || e.valid)
        .cloned()
        .collect()
}

fn render(cli: &Cli, entries: &[DocketEntry]) -> anyhow::Result<String> {
    match cli.format {
        Format::Json if cli.compact => Ok(serde_json::to_string(entries)?),
        Format::Json => Ok(serde_json::to_string_pretty(entries)?),
        Format::Cards => {
            let batch = docket::entries_to_batch(entries)?;
            let cards = display::render_cards(&batch)?;
            Ok(cards.trim_end().to_string())
        }
        Format::Table => {
            let batch = docket::entries_to_batch(entries)?;
            Ok(arrow::util::pretty::pretty_format_batches(&[batch])?.to_string())
        }
    }
}
