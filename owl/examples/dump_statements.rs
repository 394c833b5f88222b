//! Demonstrates decoding an OBO-in-OWL file and printing compacted statements.
//!
//! Run with: `cargo run --example dump_statements -p gogo-owl [path/to/file.owl]`
//!
//! Without an argument the bundled GO-slim sample is used.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args_os().nth(1).map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/goslim_sample.owl"),
        PathBuf::from,
    );
    let mut decoder = gogo_owl::Decoder::new(BufReader::new(File::open(&path)?))?;

    println!("{}", path.display());
    println!("  Namespaces:");
    for binding in decoder.namespaces() {
        println!("    {:10} {}", binding.prefix, binding.value);
    }
    println!();

    // Print the first statements in compacted form.
    for statement in decoder.compacted().take(40) {
        let s = statement?;
        println!(
            "  [{:>4} {:>4} {:>4}]  {} {} {}",
            s.subject.id(),
            s.predicate.id(),
            s.object.id(),
            s.subject,
            s.predicate,
            s.object
        );
    }

    // Drain the rest to report totals.
    let remaining = decoder.by_ref().filter_map(Result::ok).count();
    println!();
    println!("  Statements:   {}", decoder.statement_count());
    println!("  Terms:        {}", decoder.term_count());
    println!("  (of which {remaining} not shown)");
    Ok(())
}
