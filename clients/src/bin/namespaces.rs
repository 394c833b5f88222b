//! `gogo-namespaces`: Prints the namespace table of an OBO-in-OWL ontology.
//!
//! The bindings are the root element's attributes, longest value first, which
//! is the order used for prefix compaction.
//!
//! **Usage:**
//! ```
//! gogo-namespaces [--verbose] <path>
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gogo_clients::{init_logging, open_input};
use gogo_owl::Decoder;

/// Print the namespace bindings of an ontology as JSON.
#[derive(Parser)]
#[command(
    name = "gogo-namespaces",
    about = "Print the namespace table of an OBO-in-OWL ontology as JSON"
)]
struct Args {
    /// Log decoder progress to stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Input file (`.owl` or `.owl.gz`).
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let decoder = Decoder::new(open_input(&args.path)?)
        .with_context(|| format!("Failed to read root of {}", args.path.display()))?;
    let json = serde_json::to_string_pretty(decoder.namespaces().bindings())
        .context("Failed to serialize namespaces")?;
    println!("{json}");
    Ok(())
}
