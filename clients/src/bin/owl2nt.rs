//! `gogo-owl2nt`: Decodes OBO-in-OWL ontologies to N-Triples.
//!
//! Every input is decoded by one decoder, reset between inputs, so term
//! identifiers are shared and a triple repeated in a later input is written
//! only once.
//!
//! **Usage:**
//! ```
//! gogo-owl2nt [--compact] [--out <file>] [--verbose] <path>...
//! ```
//!
//! A path may be an `.owl` file, an `.owl.gz` file or a directory searched
//! recursively for both.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use gogo_clients::{collect_inputs, init_logging, open_input};
use gogo_owl::serializer::ntriples;
use gogo_owl::Decoder;
use tracing::info;

/// Decode OBO-in-OWL RDF/XML to N-Triples.
#[derive(Parser)]
#[command(name = "gogo-owl2nt", about = "Decode OBO-in-OWL ontologies to N-Triples")]
struct Args {
    /// Rewrite IRIs with the prefixes declared on each input's root element.
    /// The output is then no longer valid N-Triples.
    #[arg(long)]
    compact: bool,

    /// Output file (default: standard output).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log decoder progress to stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Input files or directories.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let inputs = collect_inputs(&args.paths)?;
    if inputs.is_empty() {
        eprintln!("No .owl or .owl.gz inputs found.");
        process::exit(1);
    }

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let mut decoder: Option<Decoder<Box<dyn BufRead + Send>>> = None;
    for input in &inputs {
        let reader = open_input(input)?;
        let mut current = match decoder.take() {
            Some(mut previous) => {
                previous
                    .reset(reader)
                    .with_context(|| format!("Failed to read root of {}", input.display()))?;
                previous
            }
            None => Decoder::new(reader)
                .with_context(|| format!("Failed to read root of {}", input.display()))?,
        };
        let before = current.statement_count();

        loop {
            let next = if args.compact {
                current.next_compact()
            } else {
                current.next_statement()
            };
            let Some(statement) =
                next.with_context(|| format!("Failed to decode {}", input.display()))?
            else {
                break;
            };
            ntriples::write_statement(&mut out, &statement).context("Failed to write output")?;
        }
        info!(
            input = %input.display(),
            statements = current.statement_count() - before,
            namespaces = current.namespaces().len(),
            "decoded input"
        );
        decoder = Some(current);
    }
    out.flush().context("Failed to write output")?;

    let (statements, terms) = decoder
        .as_ref()
        .map_or((0, 0), |d| (d.statement_count(), d.term_count()));
    eprintln!(
        "Decoded {} input(s): {} statements over {} terms",
        inputs.len(),
        statements,
        terms
    );
    Ok(())
}
