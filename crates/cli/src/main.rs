//! SiteFind CLI — run the widget's search against a local index file.
//!
//! Calls `sitefind-core` directly: the results, order, and markup printed here are
//! exactly what the browser widget produces for the same index and query.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};

use sitefind_core::{parse_index, render_results, search, LoadReport, WidgetConfig};

/// SiteFind CLI — inspect a static site's search index from the terminal.
#[derive(Parser)]
#[command(name = "sf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to search-index.json (default: ./search-index.json)
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the items a query would show, in display order
    Query {
        /// Search query (trimmed and lowercased like the widget does)
        query: String,

        /// Maximum number of results (default: max_results from .sitefind.toml, else 12)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },
    /// Print the markup the widget would write into the results container
    Render {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },
    /// Validate an index and list records the widget would skip
    Check,
}

fn load_report(path: &Path) -> LoadReport {
    let start = Instant::now();
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Could not read search index");
        std::process::exit(1);
    });
    let report = parse_index(&content).unwrap_or_else(|e| {
        error!(path = %path.display(), error = %e, "Could not load search index");
        std::process::exit(1);
    });
    info!(
        path = %path.display(),
        items = report.index.len(),
        skipped = report.skipped.len(),
        time_ms = start.elapsed().as_millis() as u64,
        "Index ready"
    );
    report
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sitefind=info".parse().unwrap())
                .add_directive("sf=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = WidgetConfig::load(&cwd).unwrap_or_else(|e| {
        error!(error = %e, "Invalid configuration");
        std::process::exit(2);
    });
    let index_path = cli.index.clone().unwrap_or_else(|| PathBuf::from("search-index.json"));

    match cli.command {
        Commands::Query { query, limit } => {
            let report = load_report(&index_path);
            let limit = limit.unwrap_or(config.max_results);
            let found = search(&report.index, &query, limit);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&found).unwrap_or_default());
            } else {
                if found.is_empty() {
                    eprintln!("No results for '{query}'");
                    std::process::exit(1);
                }
                for item in &found {
                    println!("{:<40} {}", item.title, item.url);
                    if let Some(summary) = &item.summary {
                        println!("    {summary}");
                    }
                }
                eprintln!("\n{} results", found.len());
            }
        }
        Commands::Render { query, limit } => {
            let report = load_report(&index_path);
            let limit = limit.unwrap_or(config.max_results);
            let found = search(&report.index, &query, limit);

            if cli.json {
                let output = serde_json::json!({
                    "visible": !found.is_empty(),
                    "markup": render_results(&found, limit),
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
            } else if found.is_empty() {
                eprintln!("(results hidden)");
            } else {
                println!("{}", render_results(&found, limit));
            }
        }
        Commands::Check => {
            let report = load_report(&index_path);

            if cli.json {
                let skipped: Vec<serde_json::Value> = report
                    .skipped
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "position": s.position,
                            "reason": s.reason.to_string(),
                        })
                    })
                    .collect();
                let output = serde_json::json!({
                    "path": index_path.display().to_string(),
                    "items": report.index.len(),
                    "skipped": skipped,
                });
                println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
            } else {
                println!("Index:    {}", index_path.display());
                println!("Items:    {}", report.index.len());
                println!("Skipped:  {}", report.skipped.len());
                for s in &report.skipped {
                    println!("  #{:<6} {}", s.position, s.reason);
                }
            }

            if !report.is_clean() {
                std::process::exit(1);
            }
        }
    }
}
