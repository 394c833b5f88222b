//! RDF terms and statements produced by the decoder.
//!
//! A [`Term`] pairs its content ([`TermValue`]) with a session-scoped
//! identifier. Terms built by the mapper carry identifier `0`; the
//! [`Decoder`](crate::Decoder) assigns identifiers starting at `1` before a
//! statement is handed out.

use std::fmt;
use std::sync::Arc;

use oxiri::Iri;

use crate::error::TermError;
use crate::serializer::ntriples;

/// The variant of a [`Term`], without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// An absolute IRI.
    Iri,
    /// A literal with an optional datatype IRI.
    Literal,
    /// A blank node.
    Blank,
}

/// The content of a term. Equal content always receives an equal identifier
/// within one decoding session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermValue {
    /// An IRI.
    Iri(Arc<str>),
    /// A literal. `datatype` is empty when the literal is untyped.
    Literal {
        /// Lexical form.
        text: Arc<str>,
        /// Datatype IRI, or the empty string.
        datatype: Arc<str>,
    },
    /// A blank node label, without the `_:` prefix.
    Blank(Arc<str>),
}

impl TermValue {
    /// Returns the variant of this value.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        match self {
            TermValue::Iri(_) => TermKind::Iri,
            TermValue::Literal { .. } => TermKind::Literal,
            TermValue::Blank(_) => TermKind::Blank,
        }
    }
}

/// An RDF term with its session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    value: TermValue,
    id: u64,
}

impl Term {
    /// Creates an IRI term. The text must be an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::EmptyIri`] for empty text and
    /// [`TermError::InvalidIri`] when the text is not an absolute IRI.
    pub fn iri(iri: impl Into<String>) -> Result<Self, TermError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(TermError::EmptyIri);
        }
        if let Err(source) = Iri::parse(iri.as_str()).map(|_| ()) {
            return Err(TermError::InvalidIri { iri, source });
        }
        Ok(Self::unassigned(TermValue::Iri(iri.into())))
    }

    /// Creates a literal term. An empty datatype denotes an untyped literal.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidDatatype`] when the datatype is non-empty
    /// and not an absolute IRI.
    pub fn literal(text: impl Into<String>, datatype: impl Into<String>) -> Result<Self, TermError> {
        let text = text.into();
        let datatype = datatype.into();
        if !datatype.is_empty() {
            if let Err(source) = Iri::parse(datatype.as_str()).map(|_| ()) {
                return Err(TermError::InvalidDatatype {
                    text,
                    datatype,
                    source,
                });
            }
        }
        Ok(Self::unassigned(TermValue::Literal {
            text: text.into(),
            datatype: datatype.into(),
        }))
    }

    /// Creates a blank node term from a label without the `_:` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TermError::InvalidBlankLabel`] when the label is empty or
    /// holds characters outside `[A-Za-z0-9_.-]`.
    pub fn blank(label: impl Into<String>) -> Result<Self, TermError> {
        let label = label.into();
        let valid = !label.is_empty()
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(TermError::InvalidBlankLabel(label));
        }
        Ok(Self::unassigned(TermValue::Blank(label.into())))
    }

    /// Creates a term from already-validated content.
    #[must_use]
    pub fn from_value(value: TermValue, id: u64) -> Self {
        Self { value, id }
    }

    fn unassigned(value: TermValue) -> Self {
        Self { value, id: 0 }
    }

    /// Returns the term content.
    #[must_use]
    pub fn value(&self) -> &TermValue {
        &self.value
    }

    /// Consumes the term, returning its content.
    #[must_use]
    pub fn into_value(self) -> TermValue {
        self.value
    }

    /// Returns the variant of this term.
    #[must_use]
    pub fn kind(&self) -> TermKind {
        self.value.kind()
    }

    /// Returns the session identifier, or `0` if none has been assigned.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// Returns the IRI text, literal lexical form, or blank label.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.value {
            TermValue::Iri(text) | TermValue::Blank(text) => &**text,
            TermValue::Literal { text, .. } => &**text,
        }
    }

    /// Returns the datatype IRI of a literal, or `None` for other terms.
    #[must_use]
    pub fn datatype(&self) -> Option<&str> {
        match &self.value {
            TermValue::Literal { datatype, .. } => Some(&**datatype),
            _ => None,
        }
    }

    /// Returns true if this term is an IRI.
    #[must_use]
    pub fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Returns true if this term is a blank node.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.kind() == TermKind::Blank
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ntriples::write_term(f, &self.value)
    }
}

/// An ordered RDF triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate: always an IRI.
    pub predicate: Term,
    /// Object: any term.
    pub object: Term,
}

impl Statement {
    /// Creates a statement from its three terms.
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// Returns the identifier triple `[subject, predicate, object]`.
    #[must_use]
    pub fn ids(&self) -> [u64; 3] {
        [self.subject.id, self.predicate.id, self.object.id]
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
