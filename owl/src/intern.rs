//! String interning for term text.

use std::collections::HashSet;
use std::sync::Arc;

use crate::term::{Term, TermValue};

/// Set of previously seen term text, returning one shared copy per value.
#[derive(Debug, Default)]
pub(crate) struct StringTable {
    strings: HashSet<Arc<str>>,
}

impl StringTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical copy of `s`, storing it on first sight.
    pub(crate) fn intern(&mut self, s: &Arc<str>) -> Arc<str> {
        if s.is_empty() {
            return Arc::clone(s);
        }
        if let Some(existing) = self.strings.get(s) {
            return Arc::clone(existing);
        }
        self.strings.insert(Arc::clone(s));
        Arc::clone(s)
    }

    /// Replaces every string in `term` by its canonical copy.
    pub(crate) fn intern_term(&mut self, term: Term) -> Term {
        let id = term.id();
        let value = match term.into_value() {
            TermValue::Iri(iri) => TermValue::Iri(self.intern(&iri)),
            TermValue::Literal { text, datatype } => TermValue::Literal {
                text: self.intern(&text),
                datatype: self.intern(&datatype),
            },
            TermValue::Blank(label) => TermValue::Blank(self.intern(&label)),
        };
        Term::from_value(value, id)
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.len()
    }

    pub(crate) fn clear(&mut self) {
        self.strings.clear();
        self.strings.shrink_to_fit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_values_share_storage() {
        let mut table = StringTable::new();
        let a: Arc<str> = Arc::from("http://purl.obolibrary.org/obo/GO_0005634");
        let b: Arc<str> = Arc::from("http://purl.obolibrary.org/obo/GO_0005634");
        let first = table.intern(&a);
        let second = table.intern(&b);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_strings_are_not_stored() {
        let mut table = StringTable::new();
        let _ = table.intern(&Arc::from(""));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn clear_forgets_values() {
        let mut table = StringTable::new();
        let _ = table.intern(&Arc::from("x"));
        table.clear();
        assert_eq!(table.len(), 0);
    }
}
