//! Error types for OBO-in-OWL decoding.

use std::io;
use std::sync::Arc;

/// Error raised when a term cannot be constructed from decoded text.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// An IRI slot held empty text.
    #[error("empty IRI")]
    EmptyIri,

    /// An IRI slot held text that is not an absolute IRI.
    #[error("invalid IRI {iri:?}: {source}")]
    InvalidIri {
        /// The rejected text.
        iri: String,
        /// Why the IRI parser rejected it.
        #[source]
        source: oxiri::IriParseError,
    },

    /// A literal carried a datatype that is not an absolute IRI.
    #[error("invalid datatype IRI {datatype:?} for literal {text:?}: {source}")]
    InvalidDatatype {
        /// Lexical form of the literal.
        text: String,
        /// The rejected datatype text.
        datatype: String,
        /// Why the IRI parser rejected it.
        #[source]
        source: oxiri::IriParseError,
    },

    /// A blank node label was empty or contained characters outside `[A-Za-z0-9_.-]`.
    #[error("invalid blank node label {0:?}")]
    InvalidBlankLabel(String),
}

/// Error type for decoding operations.
///
/// Every variant is fatal: the decoder stops producing statements once one is
/// returned. End of input is not an error and is reported as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The underlying byte stream failed.
    #[error("I/O error: {0}")]
    Io(#[source] Arc<io::Error>),

    /// The input is not well-formed XML.
    #[error("XML syntax error at byte {position}: {source}")]
    Xml {
        /// Byte offset of the reader when the error was detected.
        position: u64,
        /// Error reported by the XML reader.
        #[source]
        source: quick_xml::Error,
    },

    /// The input violates XML rules the reader does not check itself, such as
    /// an undeclared namespace prefix or an element cut off by end of input.
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax {
        /// Byte offset of the reader when the error was detected.
        position: u64,
        /// Description of the problem.
        message: String,
    },

    /// A top-level element is outside the supported OBO-in-OWL profile.
    #[error("unsupported element <{name}> at byte {position}")]
    UnsupportedElement {
        /// Local name of the element.
        name: String,
        /// Byte offset just past the element's start tag.
        position: u64,
    },

    /// A term could not be constructed from the decoded text.
    #[error("malformed term: {0}")]
    MalformedTerm(#[from] TermError),

    /// A structural slot that must produce a term had no usable value.
    #[error("<{element}> has no usable value for <{child}>")]
    MissingClaim {
        /// Local name of the enclosing element.
        element: String,
        /// Local name of the child that was missing or empty.
        child: String,
    },

    /// The input ended before the `rdf:RDF` root element was seen.
    #[error("input ended before the rdf:RDF root element")]
    MissingRoot,
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

impl DecodeError {
    /// Wraps an XML reader error, keeping I/O failures distinct from syntax errors.
    pub(crate) fn xml(position: u64, source: quick_xml::Error) -> Self {
        match source {
            quick_xml::Error::Io(err) => Self::Io(err),
            source => Self::Xml { position, source },
        }
    }

    /// Creates a syntax error at the given byte offset.
    pub(crate) fn syntax(position: u64, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Creates a missing-claim error.
    pub(crate) fn missing_claim(element: impl Into<String>, child: impl Into<String>) -> Self {
        Self::MissingClaim {
            element: element.into(),
            child: child.into(),
        }
    }

    /// Returns true if this error came from the underlying byte stream.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_not_syntax_errors() {
        let err = DecodeError::xml(
            10,
            quick_xml::Error::Io(Arc::new(io::Error::new(io::ErrorKind::Other, "boom"))),
        );
        assert!(err.is_io());
    }

    #[test]
    fn missing_claim_names_both_elements() {
        let err = DecodeError::missing_claim("Axiom", "annotatedSource");
        assert_eq!(
            err.to_string(),
            "<Axiom> has no usable value for <annotatedSource>"
        );
    }
}
