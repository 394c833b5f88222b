//! Shared input handling and logging setup for the `gogo` command-line tools.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Installs a `fmt` subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` when `verbose`
/// is set and `warn` when it is not.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Returns true for `*.owl` and `*.owl.gz` file names.
#[must_use]
pub fn is_ontology_file(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    name.ends_with(".owl") || name.ends_with(".owl.gz")
}

/// Expands the given paths into input files, in order.
///
/// Files are kept as given. Directories are walked recursively in file name
/// order and contribute their `*.owl` and `*.owl.gz` files.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be read.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("Failed to stat input: {}", path.display()))?;
        if !meta.is_dir() {
            inputs.push(path.clone());
            continue;
        }
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to walk directory: {}", path.display()))?;
            if entry.file_type().is_file() && is_ontology_file(entry.path()) {
                inputs.push(entry.into_path());
            }
        }
    }
    Ok(inputs)
}

/// Opens an input file, decompressing it when its name ends in `.gz`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input: {}", path.display()))?;
    let gzipped = path.extension().map(|x| x == "gz").unwrap_or(false);
    if gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_ontology_files() {
        assert!(is_ontology_file(Path::new("data/go-basic.owl")));
        assert!(is_ontology_file(Path::new("goslim_generic.owl.gz")));
        assert!(!is_ontology_file(Path::new("go.obo")));
        assert!(!is_ontology_file(Path::new("go.owl.bak")));
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = collect_inputs(&[PathBuf::from("/definitely/not/here.owl")]);
        assert!(err.is_err());
    }
}
