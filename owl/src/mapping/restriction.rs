//! Existential restrictions (`owl:Restriction` with `onProperty` and
//! `someValuesFrom`).

use crate::blank;
use crate::error::Result;
use crate::term::{Statement, Term};
use crate::xml::{Element, Name};

use super::{Claim, Mapper};

/// Expands `restriction` under `anchor`, linked by the `parent` predicate.
///
/// The anchor is the enclosing class IRI for `subClassOf`, or a list cell
/// blank node for intersection members. The restriction node label covers
/// the anchor, the parent predicate and both slots, so equal restrictions in
/// equal positions share a node.
pub(super) fn map_restriction(
    mapper: &Mapper,
    anchor: &Term,
    parent: &Name,
    restriction: &Element,
    out: &mut Vec<Statement>,
) -> Result<()> {
    let on_property = restriction.child("onProperty");
    let some_values = restriction.child("someValuesFrom");
    let (property_resource, property_text) = slot(on_property);
    let (values_resource, values_text) = slot(some_values);

    let node = blank::node(&[
        &restriction.name.space,
        &restriction.name.local,
        anchor.text(),
        &parent.space,
        &parent.local,
        property_resource,
        property_text,
        values_resource,
        values_text,
    ])?;

    out.push(Statement::new(
        anchor.clone(),
        Term::iri(parent.qualified())?,
        node.clone(),
    ));
    mapper.typed(out, &node, Term::iri(restriction.name.qualified())?);
    for child in [on_property, some_values].into_iter().flatten() {
        if let Some(object) = Claim::of(child).into_term()? {
            let predicate = Term::iri(child.name.qualified())?;
            out.push(Statement::new(node.clone(), predicate, object));
        }
    }
    Ok(())
}

fn slot(child: Option<&Element>) -> (&str, &str) {
    match child {
        Some(child) => (child.attr_or_empty("resource"), child.text.as_str()),
        None => ("", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::map_body;
    use crate::error::Result;
    use crate::vocab;

    const PART_OF_NUCLEUS: &str = r#"<owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0005730">
        <rdfs:subClassOf>
            <owl:Restriction>
                <owl:onProperty rdf:resource="http://purl.obolibrary.org/obo/BFO_0000050"/>
                <owl:someValuesFrom rdf:resource="http://purl.obolibrary.org/obo/GO_0005634"/>
            </owl:Restriction>
        </rdfs:subClassOf>
    </owl:Class>"#;

    #[test]
    fn restriction_yields_four_statements_on_one_node() -> Result<()> {
        let out = map_body(PART_OF_NUCLEUS)?;
        // Class type statement, then the restriction.
        assert_eq!(out.len(), 5);
        let restriction = &out[1..];
        let node = &restriction[0].object;
        assert!(node.is_blank());
        assert_eq!(restriction[0].predicate.text(), vocab::RDFS_SUBCLASS_OF);
        assert!(restriction[1..].iter().all(|s| &s.subject == node));
        assert_eq!(restriction[1].object.text(), vocab::OWL_RESTRICTION);
        assert_eq!(restriction[2].predicate.text(), vocab::OWL_ON_PROPERTY);
        assert_eq!(restriction[3].predicate.text(), vocab::OWL_SOME_VALUES_FROM);
        Ok(())
    }

    #[test]
    fn restriction_label_is_deterministic() -> Result<()> {
        let first = map_body(PART_OF_NUCLEUS)?;
        let second = map_body(PART_OF_NUCLEUS)?;
        assert_eq!(first[1].object, second[1].object);
        assert_eq!(first[1].object.text().len(), 32);
        Ok(())
    }

    #[test]
    fn label_depends_on_anchor() -> Result<()> {
        let other = PART_OF_NUCLEUS.replace("GO_0005730", "GO_0005654");
        let a = map_body(PART_OF_NUCLEUS)?;
        let b = map_body(&other)?;
        assert_ne!(a[1].object, b[1].object);
        Ok(())
    }
}
