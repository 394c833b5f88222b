//! Reified axioms carrying annotations on a source/property/target triple.

use crate::blank;
use crate::error::{DecodeError, Result};
use crate::term::{Statement, Term};
use crate::xml::Element;

use super::{Claim, ElementKind, Mapper};

pub(super) fn map_axiom(mapper: &Mapper, element: &Element, out: &mut Vec<Statement>) -> Result<()> {
    let source = slot(element, "annotatedSource")?;
    let property = slot(element, "annotatedProperty")?;
    let target = slot(element, "annotatedTarget")?;

    let node = blank::node(&[
        source.attr_or_empty("resource"),
        property.attr_or_empty("resource"),
        target.attr_or_empty("resource"),
        &target.text,
        target.attr_or_empty("datatype"),
    ])?;
    mapper.typed(out, &node, Term::iri(element.name.qualified())?);
    for child in [source, property] {
        match Claim::of(child) {
            Claim::Iri(iri) => push(out, &node, child, Term::iri(iri)?)?,
            _ => return Err(missing(element, child)),
        }
    }
    let object = Claim::of(target)
        .into_term()?
        .ok_or_else(|| missing(element, target))?;
    push(out, &node, target, object)?;

    for name in ElementKind::Axiom.scalar_children() {
        for child in element.children_named(name) {
            let object = Claim::of(child)
                .into_term()?
                .ok_or_else(|| missing(element, child))?;
            push(out, &node, child, object)?;
        }
    }
    Ok(())
}

fn slot<'a>(element: &'a Element, local: &str) -> Result<&'a Element> {
    element
        .child(local)
        .ok_or_else(|| DecodeError::missing_claim(&element.name.local, local))
}

fn missing(element: &Element, child: &Element) -> DecodeError {
    DecodeError::missing_claim(&element.name.local, &child.name.local)
}

fn push(out: &mut Vec<Statement>, node: &Term, child: &Element, object: Term) -> Result<()> {
    let predicate = Term::iri(child.name.qualified())?;
    out.push(Statement::new(node.clone(), predicate, object));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::map_body;
    use crate::blank;
    use crate::error::{DecodeError, Result};
    use crate::vocab;

    const SYNONYM_XREF: &str = r#"<owl:Axiom>
        <owl:annotatedSource rdf:resource="http://purl.obolibrary.org/obo/GO_0005634"/>
        <owl:annotatedProperty rdf:resource="http://www.geneontology.org/formats/oboInOwl#hasExactSynonym"/>
        <owl:annotatedTarget rdf:datatype="http://www.w3.org/2001/XMLSchema#string">cell nucleus</owl:annotatedTarget>
        <oboInOwl:hasDbXref rdf:datatype="http://www.w3.org/2001/XMLSchema#string">GOC:go_curators</oboInOwl:hasDbXref>
        <rdfs:comment rdf:datatype="http://www.w3.org/2001/XMLSchema#string">reviewed</rdfs:comment>
    </owl:Axiom>"#;

    #[test]
    fn axiom_is_reified_on_a_content_addressed_node() -> Result<()> {
        let out = map_body(SYNONYM_XREF)?;
        assert_eq!(out.len(), 6);
        let expected = blank::label(&[
            "http://purl.obolibrary.org/obo/GO_0005634",
            "http://www.geneontology.org/formats/oboInOwl#hasExactSynonym",
            "",
            "cell nucleus",
            vocab::XSD_STRING,
        ]);
        assert!(out.iter().all(|s| s.subject.text() == expected));
        assert_eq!(out[0].object.text(), vocab::OWL_AXIOM);
        assert_eq!(out[3].object.text(), "cell nucleus");
        assert_eq!(out[4].predicate.text(), format!("{}hasDbXref", vocab::OBO_IN_OWL));
        assert_eq!(out[5].predicate.text(), format!("{}comment", vocab::RDFS));
        Ok(())
    }

    #[test]
    fn missing_source_is_fatal() {
        let result = map_body(
            r#"<owl:Axiom>
                <owl:annotatedProperty rdf:resource="http://x/p"/>
                <owl:annotatedTarget rdf:resource="http://x/o"/>
            </owl:Axiom>"#,
        );
        match result {
            Err(DecodeError::MissingClaim { element, child }) => {
                assert_eq!((element.as_str(), child.as_str()), ("Axiom", "annotatedSource"));
            }
            other => panic!("expected missing claim, got {other:?}"),
        }
    }

    #[test]
    fn untyped_annotation_is_fatal() {
        let result = map_body(
            r#"<owl:Axiom>
                <owl:annotatedSource rdf:resource="http://x/s"/>
                <owl:annotatedProperty rdf:resource="http://x/p"/>
                <owl:annotatedTarget rdf:resource="http://x/o"/>
                <rdfs:label>no datatype</rdfs:label>
            </owl:Axiom>"#,
        );
        assert!(matches!(result, Err(DecodeError::MissingClaim { .. })));
    }
}
