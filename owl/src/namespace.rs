//! Namespace bindings collected from the document root, and IRI compaction.
//!
//! Bindings are textual: the raw attribute name `xmlns:go` becomes
//! `space = "xmlns"`, `prefix = "go"`, and a name without a colon such as
//! `xmlns` becomes `space = ""`, `prefix = "xmlns"`. No XML namespace
//! resolution is applied to them.

use std::sync::Arc;

use crate::term::{Term, TermValue};
use crate::vocab;

/// One attribute of the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamespaceBinding {
    /// The part of the attribute name before the colon, or empty.
    pub space: String,
    /// The part of the attribute name after the colon; used as the compaction prefix.
    pub prefix: String,
    /// The attribute value, normally a namespace IRI.
    pub value: String,
}

impl NamespaceBinding {
    /// Creates a binding from a raw attribute name and its value.
    ///
    /// An attribute in the reserved XML namespace, whether spelled with the
    /// `xml` prefix or with the namespace IRI itself, is stored under `xml`.
    #[must_use]
    pub fn from_attribute(name: &str, value: impl Into<String>) -> Self {
        let (space, prefix) = match name.rsplit_once(':') {
            Some((space, prefix)) => (space, prefix),
            None => ("", name),
        };
        let space = if space == vocab::XML { "xml" } else { space };
        Self {
            space: space.to_string(),
            prefix: prefix.to_string(),
            value: value.into(),
        }
    }
}

/// Namespace bindings ordered longest value first.
///
/// The ordering makes compaction pick the most specific namespace when
/// several values are prefixes of the same IRI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    bindings: Vec<NamespaceBinding>,
}

impl NamespaceTable {
    /// Builds a table, stably sorting bindings by descending value length.
    #[must_use]
    pub fn new(mut bindings: Vec<NamespaceBinding>) -> Self {
        bindings.sort_by(|a, b| b.value.len().cmp(&a.value.len()));
        Self { bindings }
    }

    /// Returns the bindings, longest value first.
    #[must_use]
    pub fn bindings(&self) -> &[NamespaceBinding] {
        &self.bindings
    }

    /// Iterates over the bindings, longest value first.
    pub fn iter(&self) -> std::slice::Iter<'_, NamespaceBinding> {
        self.bindings.iter()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if the table has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the value bound to `prefix`, if any.
    #[must_use]
    pub fn value_of(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.prefix == prefix)
            .map(|b| b.value.as_str())
    }

    /// Rewrites `iri` to `prefix:suffix` using the first binding whose value
    /// is a prefix of it.
    ///
    /// Returns `None` when no binding matches or when the IRI equals the
    /// binding value exactly: the namespace itself is not compacted.
    /// Bindings with an empty value never match.
    #[must_use]
    pub fn compact_iri(&self, iri: &str) -> Option<String> {
        let binding = self
            .bindings
            .iter()
            .find(|b| !b.value.is_empty() && iri.starts_with(&b.value))?;
        let suffix = &iri[binding.value.len()..];
        if suffix.is_empty() {
            return None;
        }
        Some(format!("{}:{}", binding.prefix, suffix))
    }

    /// Returns `term` with its IRI, or its literal datatype IRI, compacted.
    ///
    /// The identifier is preserved. Blank nodes and untyped literals are
    /// returned unchanged.
    #[must_use]
    pub fn compact(&self, term: &Term) -> Term {
        let value = match term.value() {
            TermValue::Iri(iri) => match self.compact_iri(iri) {
                Some(compact) => TermValue::Iri(Arc::from(compact)),
                None => return term.clone(),
            },
            TermValue::Literal { text, datatype } if !datatype.is_empty() => {
                match self.compact_iri(datatype) {
                    Some(compact) => TermValue::Literal {
                        text: Arc::clone(text),
                        datatype: Arc::from(compact),
                    },
                    None => return term.clone(),
                }
            }
            _ => return term.clone(),
        };
        Term::from_value(value, term.id())
    }
}

impl<'a> IntoIterator for &'a NamespaceTable {
    type Item = &'a NamespaceBinding;
    type IntoIter = std::slice::Iter<'a, NamespaceBinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TermError;

    fn table() -> NamespaceTable {
        NamespaceTable::new(vec![
            NamespaceBinding::from_attribute("xmlns:obo", "http://purl.obolibrary.org/obo/"),
            NamespaceBinding::from_attribute("xmlns:go", "http://purl.obolibrary.org/obo/go#"),
            NamespaceBinding::from_attribute("xmlns:owl", vocab::OWL),
            NamespaceBinding::from_attribute("xmlns:xsd", vocab::XSD),
        ])
    }

    #[test]
    fn attribute_names_split_on_colon() {
        let b = NamespaceBinding::from_attribute("xmlns:oboInOwl", vocab::OBO_IN_OWL);
        assert_eq!((b.space.as_str(), b.prefix.as_str()), ("xmlns", "oboInOwl"));
        let b = NamespaceBinding::from_attribute("xmlns", "http://example.org/d#");
        assert_eq!((b.space.as_str(), b.prefix.as_str()), ("", "xmlns"));
        let b = NamespaceBinding::from_attribute("xml:base", "http://example.org/d");
        assert_eq!((b.space.as_str(), b.prefix.as_str()), ("xml", "base"));
    }

    #[test]
    fn xml_namespace_iri_is_renamed() {
        let name = format!("{}:lang", vocab::XML);
        let b = NamespaceBinding::from_attribute(&name, "en");
        assert_eq!(b.space, "xml");
        assert_eq!(b.prefix, "lang");
    }

    #[test]
    fn sorted_longest_first_and_stable() {
        let t = NamespaceTable::new(vec![
            NamespaceBinding::from_attribute("xmlns:a", "http://a/"),
            NamespaceBinding::from_attribute("xmlns:long", "http://long/x/"),
            NamespaceBinding::from_attribute("xmlns:b", "http://b/"),
        ]);
        let prefixes: Vec<_> = t.iter().map(|b| b.prefix.as_str()).collect();
        assert_eq!(prefixes, ["long", "a", "b"]);
    }

    #[test]
    fn prefers_the_more_specific_namespace() {
        let t = table();
        assert_eq!(
            t.compact_iri("http://purl.obolibrary.org/obo/go#part_of").as_deref(),
            Some("go:part_of")
        );
        assert_eq!(
            t.compact_iri("http://purl.obolibrary.org/obo/GO_0008150").as_deref(),
            Some("obo:GO_0008150")
        );
    }

    #[test]
    fn exact_namespace_match_is_unchanged() {
        assert_eq!(table().compact_iri(vocab::OWL), None);
    }

    #[test]
    fn compacts_literal_datatypes_and_keeps_ids() -> Result<(), TermError> {
        let t = table();
        let mut lit = Term::literal("GO:0008150", vocab::XSD_STRING)?;
        lit.set_id(7);
        let out = t.compact(&lit);
        assert_eq!(out.datatype(), Some("xsd:string"));
        assert_eq!(out.text(), "GO:0008150");
        assert_eq!(out.id(), 7);

        let blank = Term::blank("abc")?;
        assert_eq!(t.compact(&blank), blank);
        Ok(())
    }

    #[test]
    fn compaction_is_idempotent() -> Result<(), TermError> {
        let t = table();
        let once = t.compact(&Term::iri(vocab::OWL_CLASS)?);
        assert_eq!(once.text(), "owl:Class");
        assert_eq!(t.compact(&once), once);
        Ok(())
    }

    #[test]
    fn empty_values_never_compact() -> Result<(), TermError> {
        let t = NamespaceTable::new(vec![
            NamespaceBinding::from_attribute("xmlns:e", ""),
            NamespaceBinding::from_attribute("xml:lang", ""),
            NamespaceBinding::from_attribute("xmlns:obo", vocab::OBO),
        ]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.compact_iri("http://x/C"), None);

        let once = t.compact(&Term::iri(format!("{}GO_0005634", vocab::OBO))?);
        assert_eq!(once.text(), "obo:GO_0005634");
        assert_eq!(t.compact(&once), once);
        Ok(())
    }
}
