//! # tabdiff-cli
//!
//! Command-line front end for tabdiff: compare an orders file against a
//! catalog file on one chosen column each, and write the catalog entries
//! without an order to a sorted single-column workbook.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabdiff_core::{compare, ColumnRef, CompareRequest};
use tracing_subscriber::EnvFilter;

/// tabdiff - report catalog entries missing from an orders column
#[derive(Parser)]
#[command(name = "tabdiff")]
#[command(author, version, about = "Compare two tabular files on a column", long_about = None)]
struct Cli {
    /// Orders file: the column may contain duplicates (.csv, .xlsx, .xls)
    #[arg(value_name = "ORDERS")]
    orders: PathBuf,

    /// Catalog file: the complete set of valid identifiers
    #[arg(value_name = "CATALOG")]
    catalog: PathBuf,

    /// Destination workbook (overwritten if present)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: PathBuf,

    /// Column label in the orders file (picked interactively when omitted)
    #[arg(long = "orders-column", value_name = "LABEL")]
    orders_column: Option<String>,

    /// Column label in the catalog file (picked interactively when omitted)
    #[arg(long = "catalog-column", value_name = "LABEL")]
    catalog_column: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let Some(orders_column) = resolve_column(&cli.orders, cli.orders_column, "orders")? else {
        return Ok(ExitCode::SUCCESS);
    };
    let Some(catalog_column) = resolve_column(&cli.catalog, cli.catalog_column, "catalog")? else {
        return Ok(ExitCode::SUCCESS);
    };

    let report = compare::run(&CompareRequest {
        orders: ColumnRef::new(&cli.orders, orders_column),
        catalog: ColumnRef::new(&cli.catalog, catalog_column),
        output: cli.output,
    })?;

    println!(
        "{} {} catalog entries without an order, written to {}",
        "done:".green().bold(),
        report.count(),
        report.output.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Resolve the column label for one side: take the flag value when given,
/// otherwise show the file's labels and let the user pick. `Ok(None)` means
/// the user declined and the run ends silently.
fn resolve_column(path: &Path, chosen: Option<String>, role: &str) -> Result<Option<String>> {
    if let Some(label) = chosen {
        return Ok(Some(label));
    }

    let labels = compare::column_labels(path)
        .with_context(|| format!("failed to load {role} file {}", path.display()))?;

    println!("{} columns in {} ({role}):", "?".cyan().bold(), path.display());
    for (i, label) in labels.iter().enumerate() {
        println!("  {i:>3}  {label}");
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("column (number or label, empty to cancel)> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    return Ok(None);
                }
                if let Ok(index) = line.parse::<usize>() {
                    if let Some(label) = labels.get(index) {
                        return Ok(Some(label.clone()));
                    }
                }
                if let Some(label) = labels.iter().find(|label| label.as_str() == line) {
                    return Ok(Some(label.clone()));
                }
                println!("No such column: {line}");
            }
            // Ctrl-C / Ctrl-D decline the selection
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
}
