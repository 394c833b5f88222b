//! Content-addressed blank node labels.
//!
//! A label is the lowercase hex MD5 digest of the concatenated parts, so the
//! same construct always receives the same label within and across sessions.
//! List cells are chained by re-hashing the previous label.

use crate::error::TermError;
use crate::term::Term;

/// Returns the label for the given sequence of parts.
#[must_use]
pub fn label(parts: &[&str]) -> String {
    let mut ctx = md5::Context::new();
    for part in parts {
        ctx.consume(part.as_bytes());
    }
    hex::encode(ctx.compute().0)
}

/// Returns the label that follows `previous` in a list chain.
#[must_use]
pub fn next_in_chain(previous: &str) -> String {
    label(&[previous])
}

/// Creates a blank node term for the given parts.
///
/// # Errors
///
/// Never fails for hex labels; the result type follows [`Term::blank`].
pub fn node(parts: &[&str]) -> Result<Term, TermError> {
    Term::blank(label(parts))
}
