//! RDF collections: equivalent-class intersections and property chains.
//!
//! A collection of n members becomes n cells. Cell `k` carries
//! `rdf:first` to member `k` and `rdf:rest` to cell `k + 1`, the last cell
//! pointing at `rdf:nil`. The first cell label is the head label, every later
//! label is the hash of the one before.

use crate::blank;
use crate::error::{DecodeError, Result};
use crate::term::{Statement, Term};
use crate::vocab;
use crate::xml::{Element, Name};

use super::{restriction, Mapper};

/// One collection member.
#[derive(Debug, Clone, Copy)]
enum Member<'a> {
    /// An `rdf:Description` naming the member by its `about` IRI.
    Named(&'a Element),
    /// An inline restriction anchored on the cell.
    Restriction(&'a Element),
}

impl Mapper {
    /// The term a collection predicate points at: the head cell, or
    /// `rdf:nil` for an empty collection.
    fn list_head(&self, head_label: &str, len: usize) -> Result<Term> {
        if len == 0 {
            return Ok(self.rdf_nil.clone());
        }
        Ok(Term::blank(head_label)?)
    }

    fn encode_list(
        &self,
        head_label: &str,
        members: &[Member<'_>],
        out: &mut Vec<Statement>,
    ) -> Result<()> {
        let first = Name::new(vocab::RDF, "first");
        let mut label = head_label.to_string();
        for (i, member) in members.iter().enumerate() {
            let cell = Term::blank(label.as_str())?;
            match member {
                Member::Named(description) => {
                    let about = description.attr_or_empty("about");
                    if about.trim().is_empty() {
                        return Err(DecodeError::missing_claim(&description.name.local, "about"));
                    }
                    out.push(Statement::new(
                        cell.clone(),
                        self.rdf_first.clone(),
                        Term::iri(about)?,
                    ));
                }
                Member::Restriction(nested) => {
                    restriction::map_restriction(self, &cell, &first, nested, out)?;
                }
            }
            let rest = if i + 1 < members.len() {
                label = blank::next_in_chain(&label);
                Term::blank(label.as_str())?
            } else {
                self.rdf_nil.clone()
            };
            out.push(Statement::new(cell, self.rdf_rest.clone(), rest));
        }
        Ok(())
    }
}

/// Expands every `equivalentClass` child of a class.
pub(super) fn equivalent_classes(
    mapper: &Mapper,
    about: &Term,
    element: &Element,
    out: &mut Vec<Statement>,
) -> Result<()> {
    let mut children = element.children_named("equivalentClass").peekable();
    if children.peek().is_none() {
        return Ok(());
    }
    let enclosing = &element.name;
    let enclosing_type = Term::iri(enclosing.qualified())?;
    mapper.typed(out, about, enclosing_type.clone());

    let mut previous = String::new();
    for equivalent in children {
        let label = blank::label(&[
            &equivalent.name.space,
            &equivalent.name.local,
            about.text(),
            &enclosing.space,
            &enclosing.local,
            &previous,
        ]);
        let node = Term::blank(label.as_str())?;
        out.push(Statement::new(
            about.clone(),
            Term::iri(equivalent.name.qualified())?,
            node.clone(),
        ));
        for class in equivalent.children_named("Class") {
            mapper.typed(out, &node, enclosing_type.clone());
            let class_label = blank::label(&[&class.name.space, &class.name.local, &label]);
            for intersection in class.children_named("intersectionOf") {
                let head_label = blank::label(&[
                    &intersection.name.space,
                    &intersection.name.local,
                    &class_label,
                    intersection.attr_or_empty("parseType"),
                ]);
                let members: Vec<_> = intersection
                    .children
                    .iter()
                    .filter_map(|c| match c.name.local.as_str() {
                        "Description" => Some(Member::Named(c)),
                        "Restriction" => Some(Member::Restriction(c)),
                        _ => None,
                    })
                    .collect();
                out.push(Statement::new(
                    node.clone(),
                    Term::iri(intersection.name.qualified())?,
                    mapper.list_head(&head_label, members.len())?,
                ));
                mapper.encode_list(&head_label, &members, out)?;
            }
        }
        previous = label;
    }
    Ok(())
}

/// Expands every `propertyChainAxiom` child of an object property.
pub(super) fn property_chains(
    mapper: &Mapper,
    about: &Term,
    element: &Element,
    out: &mut Vec<Statement>,
) -> Result<()> {
    let mut previous = String::new();
    for chain in element.children_named("propertyChainAxiom") {
        let predicate = chain.name.qualified();
        let head_label = blank::label(&[about.text(), &predicate, &previous]);
        let members: Vec<_> = chain.children_named("Description").map(Member::Named).collect();
        out.push(Statement::new(
            about.clone(),
            Term::iri(predicate)?,
            mapper.list_head(&head_label, members.len())?,
        ));
        mapper.encode_list(&head_label, &members, out)?;
        previous = head_label;
    }
    Ok(())
}
