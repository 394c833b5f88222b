//! OWL-to-RDF mapping for the OBO-in-OWL element kinds.
//!
//! Each recognized top-level element is turned into an ordered batch of
//! statements: the type statement, the scalar children in table order, then
//! the element's structure (restrictions, equivalent classes, property chains).
//! Terms come out with identifier `0`; the decoder assigns identifiers.

mod axiom;
mod entity;
mod list;
mod restriction;

use tracing::debug;

use crate::error::{Result, TermError};
use crate::term::{Statement, Term};
use crate::vocab;
use crate::xml::Element;

/// Recognized top-level element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `owl:Ontology`.
    Ontology,
    /// `owl:Class`.
    Class,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:Axiom`.
    Axiom,
}

impl ElementKind {
    /// All kinds, in dispatch order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Ontology,
        ElementKind::Class,
        ElementKind::ObjectProperty,
        ElementKind::AnnotationProperty,
        ElementKind::Axiom,
    ];

    /// Looks a kind up by element local name.
    #[must_use]
    pub fn from_local_name(local: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == local)
    }

    /// Returns the element local name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::Ontology => "Ontology",
            ElementKind::Class => "Class",
            ElementKind::ObjectProperty => "ObjectProperty",
            ElementKind::AnnotationProperty => "AnnotationProperty",
            ElementKind::Axiom => "Axiom",
        }
    }

    /// Children mapped with the scalar-claim rule, in emission order.
    #[must_use]
    pub const fn scalar_children(self) -> &'static [&'static str] {
        match self {
            ElementKind::Ontology => &[
                "default-namespace",
                "description",
                "hasOBOFormatVersion",
                "license",
                "title",
                "versionIRI",
            ],
            ElementKind::Class => &[
                "id",
                "hasBroadSynonym",
                "comment",
                "consider",
                "created_by",
                "creation_date",
                "hasDbXref",
                "deprecated",
                "disjointWith",
                "hasExactSynonym",
                "hasAlternativeId",
                "hasOBONamespace",
                "IAO_0000115",
                "IAO_0000233",
                "IAO_0000589",
                "IAO_0100001",
                "inSubset",
                "label",
                "hasNarrowSynonym",
                "hasRelatedSynonym",
                "RO_0002161",
            ],
            ElementKind::ObjectProperty => &[
                "id",
                "hasDbXref",
                "hasOBONamespace",
                "inverseOf",
                "label",
                "shorthand",
                "subPropertyOf",
                "type",
            ],
            ElementKind::AnnotationProperty => &[
                "id",
                "comment",
                "hasDbXref",
                "hasOBONamespace",
                "hasScope",
                "is_class_level",
                "is_metadata_tag",
                "label",
                "shorthand",
                "subPropertyOf",
            ],
            ElementKind::Axiom => &["label", "hasDbXref", "comment"],
        }
    }

    /// Children expanded by kind-specific structure rules.
    #[must_use]
    pub const fn structural_children(self) -> &'static [&'static str] {
        match self {
            ElementKind::Class => &["subClassOf", "equivalentClass"],
            ElementKind::ObjectProperty => &["propertyChainAxiom"],
            ElementKind::Axiom => &["annotatedSource", "annotatedProperty", "annotatedTarget"],
            ElementKind::Ontology | ElementKind::AnnotationProperty => &[],
        }
    }

    fn knows_child(self, local: &str) -> bool {
        self.scalar_children().contains(&local) || self.structural_children().contains(&local)
    }
}

/// Object derived from one child element by the scalar-claim rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim<'a> {
    Iri(&'a str),
    Literal { text: &'a str, datatype: &'a str },
    Nothing,
}

impl<'a> Claim<'a> {
    /// A non-blank `resource` gives an IRI; otherwise a non-blank `datatype`
    /// gives a literal over the character data; otherwise nothing.
    pub(crate) fn of(child: &'a Element) -> Self {
        let resource = child.attr_or_empty("resource");
        if !resource.trim().is_empty() {
            return Claim::Iri(resource);
        }
        let datatype = child.attr_or_empty("datatype");
        if !datatype.trim().is_empty() {
            return Claim::Literal {
                text: &child.text,
                datatype,
            };
        }
        Claim::Nothing
    }

    pub(crate) fn into_term(self) -> std::result::Result<Option<Term>, TermError> {
        match self {
            Claim::Iri(iri) => Term::iri(iri).map(Some),
            Claim::Literal { text, datatype } => Term::literal(text, datatype).map(Some),
            Claim::Nothing => Ok(None),
        }
    }
}

/// Builds statement batches for recognized elements.
///
/// Holds the vocabulary terms every rule emits so they are validated once.
#[derive(Debug, Clone)]
pub(crate) struct Mapper {
    rdf_type: Term,
    rdf_first: Term,
    rdf_rest: Term,
    rdf_nil: Term,
}

impl Mapper {
    pub(crate) fn new() -> std::result::Result<Self, TermError> {
        Ok(Self {
            rdf_type: Term::iri(vocab::RDF_TYPE)?,
            rdf_first: Term::iri(vocab::RDF_FIRST)?,
            rdf_rest: Term::iri(vocab::RDF_REST)?,
            rdf_nil: Term::iri(vocab::RDF_NIL)?,
        })
    }

    /// Maps one element to its statements, in emission order.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedTerm`](crate::DecodeError::MalformedTerm)
    /// for text that cannot form a term and
    /// [`DecodeError::MissingClaim`](crate::DecodeError::MissingClaim) when a
    /// required slot has no value.
    pub(crate) fn map(&self, kind: ElementKind, element: &Element) -> Result<Vec<Statement>> {
        for child in &element.children {
            if !kind.knows_child(&child.name.local) {
                debug!(
                    element = kind.as_str(),
                    child = %child.name.qualified(),
                    "ignoring child outside the OBO-in-OWL profile"
                );
            }
        }
        let mut out = Vec::new();
        match kind {
            ElementKind::Axiom => axiom::map_axiom(self, element, &mut out)?,
            _ => entity::map_entity(self, kind, element, &mut out)?,
        }
        Ok(out)
    }

    fn typed(&self, out: &mut Vec<Statement>, subject: &Term, class: Term) {
        out.push(Statement::new(subject.clone(), self.rdf_type.clone(), class));
    }
}

/// Emits one statement per scalar child of `element` that yields a claim.
fn scalar_claims(
    subject: &Term,
    element: &Element,
    names: &[&str],
    out: &mut Vec<Statement>,
) -> Result<()> {
    for name in names {
        for child in element.children_named(name) {
            if let Some(object) = Claim::of(child).into_term()? {
                let predicate = Term::iri(child.name.qualified())?;
                out.push(Statement::new(subject.clone(), predicate, object));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::xml::{Token, Tokenizer};

    /// Wraps `body` in a root element declaring the usual OBO prefixes.
    pub(crate) fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<rdf:RDF xmlns="http://purl.obolibrary.org/obo/go.owl#"
     xmlns:obo="http://purl.obolibrary.org/obo/"
     xmlns:owl="http://www.w3.org/2002/07/owl#"
     xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
     xmlns:xsd="http://www.w3.org/2001/XMLSchema#"
     xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
     xmlns:oboInOwl="http://www.geneontology.org/formats/oboInOwl#">
{body}
</rdf:RDF>"#
        )
    }

    /// Maps every recognized element in `body`.
    pub(crate) fn map_body(body: &str) -> Result<Vec<Statement>> {
        let doc = document(body);
        let mut tokens = Tokenizer::new(doc.as_bytes());
        let mapper = Mapper::new()?;
        let mut out = Vec::new();
        loop {
            match tokens.next_token()? {
                Token::Eof => return Ok(out),
                Token::Element(kind, element) => out.extend(mapper.map(kind, &element)?),
                Token::Root(_) | Token::Skip => {}
            }
        }
    }

    /// Renders statements as `(s, p, o)` text triples for comparison.
    pub(crate) fn texts(statements: &[Statement]) -> Vec<(String, String, String)> {
        statements
            .iter()
            .map(|s| {
                (
                    s.subject.text().to_string(),
                    s.predicate.text().to_string(),
                    s.object.text().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn kinds_round_trip_through_local_names() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_local_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ElementKind::from_local_name("NamedIndividual"), None);
        assert_eq!(ElementKind::from_local_name("RDF"), None);
    }

    #[test]
    fn claim_prefers_resource_over_datatype() -> Result<()> {
        let out = map_body(
            r#"<owl:Class rdf:about="http://x/C">
                <owl:disjointWith rdf:resource="http://x/D" rdf:datatype="http://www.w3.org/2001/XMLSchema#string">ignored</owl:disjointWith>
                <rdfs:comment>no datatype, no resource</rdfs:comment>
                <rdfs:label rdf:datatype="  ">blank datatype</rdfs:label>
            </owl:Class>"#,
        )?;
        assert_eq!(out.len(), 2);
        assert!(out[1].object.is_iri());
        assert_eq!(out[1].object.text(), "http://x/D");
        Ok(())
    }

    #[test]
    fn scalar_children_follow_table_order() -> Result<()> {
        let out = map_body(
            r#"<owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0005634">
                <rdfs:label rdf:datatype="http://www.w3.org/2001/XMLSchema#string">nucleus</rdfs:label>
                <oboInOwl:id rdf:datatype="http://www.w3.org/2001/XMLSchema#string">GO:0005634</oboInOwl:id>
                <oboInOwl:hasOBONamespace rdf:datatype="http://www.w3.org/2001/XMLSchema#string">cellular_component</oboInOwl:hasOBONamespace>
            </owl:Class>"#,
        )?;
        let predicates: Vec<_> = out.iter().map(|s| s.predicate.text().to_string()).collect();
        assert_eq!(
            predicates,
            [
                vocab::RDF_TYPE.to_string(),
                format!("{}id", vocab::OBO_IN_OWL),
                format!("{}hasOBONamespace", vocab::OBO_IN_OWL),
                vocab::RDFS_LABEL.to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn unknown_children_are_ignored() -> Result<()> {
        let out = map_body(
            r#"<owl:AnnotationProperty rdf:about="http://x/p">
                <rdfs:seeAlso rdf:resource="http://x/elsewhere"/>
            </owl:AnnotationProperty>"#,
        )?;
        assert_eq!(out.len(), 1);
        Ok(())
    }

    #[test]
    fn every_table_has_unique_names() {
        for kind in ElementKind::ALL {
            let mut names: Vec<_> = kind
                .scalar_children()
                .iter()
                .chain(kind.structural_children())
                .collect();
            let total = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), total, "{kind:?}");
        }
    }
}
