//! N-Triples serializer for decoded statements.
//!
//! Produces one triple per line with absolute IRIs, suitable for streaming,
//! bulk loading, and diff-friendly storage. Terms rewritten by the
//! [`NamespaceTable`](crate::NamespaceTable) keep the same delimiters, which
//! makes compacted output readable but no longer valid N-Triples.

use std::fmt;
use std::io;

use crate::term::{Statement, TermValue};

/// Writes a single term in N-Triples syntax.
///
/// # Errors
///
/// Returns an error if the underlying formatter fails.
pub fn write_term(out: &mut impl fmt::Write, value: &TermValue) -> fmt::Result {
    match value {
        TermValue::Iri(iri) => write!(out, "<{iri}>"),
        TermValue::Blank(label) => write!(out, "_:{label}"),
        TermValue::Literal { text, datatype } => {
            out.write_char('"')?;
            write_escaped(out, text)?;
            out.write_char('"')?;
            if datatype.is_empty() {
                Ok(())
            } else {
                write!(out, "^^<{datatype}>")
            }
        }
    }
}

/// Writes one statement as an N-Triples line, including the trailing newline.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_statement(out: &mut impl io::Write, statement: &Statement) -> io::Result<()> {
    writeln!(out, "{statement}")
}

/// Serializes statements to an N-Triples string.
#[must_use]
pub fn to_ntriples(statements: &[Statement]) -> String {
    let mut out = String::with_capacity(statements.len() * 128);
    for statement in statements {
        // Writing into a String cannot fail.
        let _ = fmt::Write::write_fmt(&mut out, format_args!("{statement}\n"));
    }
    out
}

fn write_escaped(out: &mut impl fmt::Write, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '"' => out.write_str("\\\"")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
