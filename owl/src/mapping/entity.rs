//! Named entities: ontology header, classes, object and annotation properties.

use crate::error::{DecodeError, Result};
use crate::term::{Statement, Term};
use crate::xml::Element;

use super::{list, restriction, scalar_claims, ElementKind, Mapper};

pub(super) fn map_entity(
    mapper: &Mapper,
    kind: ElementKind,
    element: &Element,
    out: &mut Vec<Statement>,
) -> Result<()> {
    let about = about(element)?;
    mapper.typed(out, &about, Term::iri(element.name.qualified())?);
    scalar_claims(&about, element, kind.scalar_children(), out)?;
    match kind {
        ElementKind::Class => {
            sub_class_of(mapper, &about, element, out)?;
            list::equivalent_classes(mapper, &about, element, out)?;
        }
        ElementKind::ObjectProperty => list::property_chains(mapper, &about, element, out)?,
        ElementKind::Ontology | ElementKind::AnnotationProperty | ElementKind::Axiom => {}
    }
    Ok(())
}

/// The subject IRI of a named entity.
fn about(element: &Element) -> Result<Term> {
    match element.attr("about") {
        Some(about) => Ok(Term::iri(about)?),
        None => Err(DecodeError::missing_claim(&element.name.local, "about")),
    }
}

/// A direct `resource` target, or restrictions nested inside the child.
fn sub_class_of(
    mapper: &Mapper,
    about: &Term,
    element: &Element,
    out: &mut Vec<Statement>,
) -> Result<()> {
    for child in element.children_named("subClassOf") {
        let target = child.attr_or_empty("resource");
        if !target.trim().is_empty() {
            let predicate = Term::iri(child.name.qualified())?;
            out.push(Statement::new(about.clone(), predicate, Term::iri(target)?));
        }
        for nested in child.children_named("Restriction") {
            restriction::map_restriction(mapper, about, &child.name, nested, out)?;
        }
    }
    Ok(())
}
