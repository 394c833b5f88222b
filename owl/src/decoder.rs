//! The pull-based statement decoder.

use std::collections::{HashMap, HashSet, VecDeque};
use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{DecodeError, Result};
use crate::intern::StringTable;
use crate::mapping::Mapper;
use crate::namespace::NamespaceTable;
use crate::term::{Statement, Term, TermValue};
use crate::xml::{Token, Tokenizer};

/// Streaming decoder from OBO-in-OWL RDF/XML to RDF statements.
///
/// Statements come out one at a time with identifiers populated. Equal term
/// content always maps to the same identifier and no identifier triple is
/// produced twice, for the whole life of the decoder including across
/// [`reset`](Decoder::reset).
///
/// # Examples
///
/// ```
/// use gogo_owl::Decoder;
///
/// let doc = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
///                       xmlns:owl="http://www.w3.org/2002/07/owl#">
///   <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0008150"/>
/// </rdf:RDF>"#;
///
/// let mut decoder = Decoder::new(doc.as_bytes())?;
/// let statement = decoder.next_statement()?.expect("one statement");
/// assert_eq!(statement.ids(), [1, 3, 2]);
/// assert!(decoder.next_statement()?.is_none());
/// # Ok::<(), gogo_owl::DecodeError>(())
/// ```
pub struct Decoder<R> {
    tokens: Option<Tokenizer<R>>,
    mapper: Mapper,
    namespaces: NamespaceTable,
    strings: StringTable,
    ids: HashMap<TermValue, u64>,
    seen: HashSet<[u64; 3]>,
    pending: VecDeque<Statement>,
    yielded: u64,
    duplicates: u64,
}

/// What one pull from the tokenizer produced.
enum Pulled {
    Root,
    Batch,
    Nothing,
    End,
}

impl<R: BufRead> Decoder<R> {
    /// Creates a decoder and reads up to the root element, collecting its
    /// namespace bindings.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingRoot`] when the input ends before the
    /// root element, or any error raised while reading up to it.
    pub fn new(reader: R) -> Result<Self> {
        let mut decoder = Self {
            tokens: None,
            mapper: Mapper::new()?,
            namespaces: NamespaceTable::default(),
            strings: StringTable::new(),
            ids: HashMap::new(),
            seen: HashSet::new(),
            pending: VecDeque::new(),
            yielded: 0,
            duplicates: 0,
        };
        decoder.start(reader)?;
        Ok(decoder)
    }

    /// Switches to a new input stream.
    ///
    /// The previous stream, its pending statements, interned strings and
    /// namespace table are dropped. Identifiers and the set of already
    /// produced triples are kept, so a statement seen in an earlier stream is
    /// not produced again.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::new`].
    pub fn reset(&mut self, reader: R) -> Result<()> {
        debug!(
            identifiers = self.ids.len(),
            statements = self.yielded,
            "resetting decoder to a new input"
        );
        self.pending.clear();
        self.strings.clear();
        self.start(reader)
    }

    fn start(&mut self, reader: R) -> Result<()> {
        self.tokens = Some(Tokenizer::new(reader));
        self.namespaces = NamespaceTable::default();
        loop {
            match self.pull()? {
                Pulled::Root => return Ok(()),
                Pulled::End => return Err(DecodeError::MissingRoot),
                Pulled::Batch | Pulled::Nothing => {}
            }
        }
    }

    /// Returns the root namespace bindings of the current input, longest
    /// value first.
    #[must_use]
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Returns the identifier assigned to `value`, if it has been seen.
    #[must_use]
    pub fn id_of(&self, value: &TermValue) -> Option<u64> {
        self.ids.get(value).copied()
    }

    /// Returns the number of distinct terms seen so far.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.ids.len()
    }

    /// Returns the number of statements produced so far.
    #[must_use]
    pub fn statement_count(&self) -> u64 {
        self.yielded
    }

    /// Returns the next statement not produced before, or `None` at end of
    /// input.
    ///
    /// After an error, and after end of input, every call returns `Ok(None)`
    /// until [`reset`](Decoder::reset).
    ///
    /// # Errors
    ///
    /// Returns I/O, XML syntax, unsupported-element, malformed-term and
    /// missing-claim errors.
    pub fn next_statement(&mut self) -> Result<Option<Statement>> {
        loop {
            let Some(statement) = self.pending.pop_front() else {
                if let Pulled::End = self.pull()? {
                    return Ok(None);
                }
                continue;
            };
            let statement = self.identify(statement);
            if self.seen.insert(statement.ids()) {
                self.yielded += 1;
                return Ok(Some(statement));
            }
            self.duplicates += 1;
        }
    }

    /// Like [`next_statement`](Decoder::next_statement), with every term
    /// compacted through the current namespace table.
    ///
    /// # Errors
    ///
    /// Same as [`Decoder::next_statement`].
    pub fn next_compact(&mut self) -> Result<Option<Statement>> {
        Ok(self
            .next_statement()?
            .map(|s| compact_statement(&self.namespaces, &s)))
    }

    /// Returns an iterator over compacted statements.
    pub fn compacted(&mut self) -> Compacted<'_, R> {
        Compacted { decoder: self }
    }

    /// Reads one token, buffering the statements of a recognized element.
    /// Any failure ends the session.
    fn pull(&mut self) -> Result<Pulled> {
        let pulled = self.pull_token();
        if pulled.is_err() {
            self.tokens = None;
            self.pending.clear();
        }
        pulled
    }

    fn pull_token(&mut self) -> Result<Pulled> {
        let Some(tokens) = self.tokens.as_mut() else {
            return Ok(Pulled::End);
        };
        match tokens.next_token()? {
            Token::Root(bindings) => {
                self.namespaces = NamespaceTable::new(bindings);
                debug!(namespaces = self.namespaces.len(), "collected root namespaces");
                Ok(Pulled::Root)
            }
            Token::Element(kind, element) => {
                let batch = self.mapper.map(kind, &element)?;
                trace!(
                    kind = kind.as_str(),
                    about = element.attr_or_empty("about"),
                    statements = batch.len(),
                    "mapped element"
                );
                self.pending.extend(batch);
                Ok(Pulled::Batch)
            }
            Token::Skip => Ok(Pulled::Nothing),
            Token::Eof => {
                debug!(
                    statements = self.yielded,
                    duplicates = self.duplicates,
                    identifiers = self.ids.len(),
                    strings = self.strings.len(),
                    "reached end of input"
                );
                self.tokens = None;
                self.strings.clear();
                Ok(Pulled::End)
            }
        }
    }

    /// Interns term text and assigns identifiers in subject, object,
    /// predicate order.
    fn identify(&mut self, statement: Statement) -> Statement {
        let Statement {
            subject,
            predicate,
            object,
        } = statement;
        let subject = self.assign(subject);
        let object = self.assign(object);
        let predicate = self.assign(predicate);
        Statement::new(subject, predicate, object)
    }

    fn assign(&mut self, term: Term) -> Term {
        let mut term = self.strings.intern_term(term);
        let next = self.ids.len() as u64 + 1;
        let id = *self.ids.entry(term.value().clone()).or_insert(next);
        term.set_id(id);
        term
    }
}

fn compact_statement(namespaces: &NamespaceTable, statement: &Statement) -> Statement {
    Statement::new(
        namespaces.compact(&statement.subject),
        namespaces.compact(&statement.predicate),
        namespaces.compact(&statement.object),
    )
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement().transpose()
    }
}

/// Iterator over compacted statements, created by [`Decoder::compacted`].
pub struct Compacted<'a, R> {
    decoder: &'a mut Decoder<R>,
}

impl<R: BufRead> Iterator for Compacted<'_, R> {
    type Item = Result<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.next_compact().transpose()
    }
}

impl<R> std::fmt::Debug for Decoder<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("open", &self.tokens.is_some())
            .field("namespaces", &self.namespaces.len())
            .field("identifiers", &self.ids.len())
            .field("pending", &self.pending.len())
            .field("statements", &self.yielded)
            .finish()
    }
}
