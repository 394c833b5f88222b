//! XML tokenizer: reads top-level tokens and decodes recognized elements into
//! owned trees.
//!
//! Only the root element's attributes are taken as namespace bindings. Inside
//! a recognized element, names are resolved with the document's XML namespace
//! scope so the mapper sees `(namespace IRI, local name)` pairs.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::{DecodeError, Result};
use crate::mapping::ElementKind;
use crate::namespace::NamespaceBinding;

/// Local name of the document root.
const ROOT: &str = "RDF";

/// A resolved element or attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Name {
    pub(crate) space: String,
    pub(crate) local: String,
}

impl Name {
    pub(crate) fn new(space: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }

    /// Namespace IRI followed by the local name.
    pub(crate) fn qualified(&self) -> String {
        let mut out = String::with_capacity(self.space.len() + self.local.len());
        out.push_str(&self.space);
        out.push_str(&self.local);
        out
    }
}

/// An element subtree with its attributes and direct character data.
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub(crate) name: Name,
    pub(crate) attributes: Vec<(Name, String)>,
    pub(crate) text: String,
    pub(crate) children: Vec<Element>,
}

impl Element {
    fn new(name: Name, attributes: Vec<(Name, String)>) -> Self {
        Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Returns the first attribute with the given local name, in any namespace.
    ///
    /// `rdf:about` and `foo:about` are not told apart; OBO exports only put
    /// `about`, `resource`, `datatype` and `parseType` in the RDF namespace.
    pub(crate) fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name.local == local)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the attribute value, or the empty string when absent.
    pub(crate) fn attr_or_empty(&self, local: &str) -> &str {
        self.attr(local).unwrap_or("")
    }

    /// Iterates over the direct children with the given local name.
    pub(crate) fn children_named<'a>(
        &'a self,
        local: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name.local == local)
    }

    /// Returns the first direct child with the given local name.
    pub(crate) fn child(&self, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name.local == local)
    }
}

/// One top-level token.
#[derive(Debug)]
pub(crate) enum Token {
    /// The root element's attributes.
    Root(Vec<NamespaceBinding>),
    /// A recognized element and its decoded subtree.
    Element(ElementKind, Element),
    /// Character data, comments, end tags and declarations.
    Skip,
    /// End of input.
    Eof,
}

/// Pulls top-level tokens from an XML byte stream.
pub(crate) struct Tokenizer<R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> Tokenizer<R> {
    pub(crate) fn new(reader: R) -> Self {
        let mut reader = NsReader::from_reader(reader);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Reads exactly one top-level token. A recognized start element is
    /// decoded together with its whole subtree.
    pub(crate) fn next_token(&mut self) -> Result<Token> {
        match self.read_event()? {
            Event::Start(start) => {
                let name = self.element_name(&start)?;
                if name.local == ROOT {
                    return Ok(Token::Root(self.root_bindings(&start)?));
                }
                let Some(kind) = ElementKind::from_local_name(&name.local) else {
                    return Err(DecodeError::UnsupportedElement {
                        name: name.local,
                        position: self.position(),
                    });
                };
                let element = self.read_element(name, &start)?;
                Ok(Token::Element(kind, element))
            }
            Event::Eof => Ok(Token::Eof),
            _ => Ok(Token::Skip),
        }
    }

    fn position(&self) -> u64 {
        self.reader.buffer_position() as u64
    }

    fn read_event(&mut self) -> Result<Event<'static>> {
        self.buf.clear();
        let event = self
            .reader
            .read_event_into(&mut self.buf)
            .map(Event::into_owned);
        event.map_err(|err| DecodeError::xml(self.position(), err))
    }

    fn read_element(&mut self, name: Name, start: &BytesStart<'_>) -> Result<Element> {
        let attributes = self.attributes(start)?;
        let mut stack = vec![Element::new(name, attributes)];
        loop {
            match self.read_event()? {
                Event::Start(start) => {
                    let name = self.element_name(&start)?;
                    let attributes = self.attributes(&start)?;
                    stack.push(Element::new(name, attributes));
                }
                Event::End(_) => {
                    let done = stack
                        .pop()
                        .ok_or_else(|| DecodeError::syntax(self.position(), "unbalanced end tag"))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => return Ok(done),
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|err| DecodeError::xml(self.position(), err))?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Event::CData(data) => {
                    let text = String::from_utf8(data.into_inner().into_owned()).map_err(|_| {
                        DecodeError::syntax(self.position(), "CDATA section is not valid UTF-8")
                    })?;
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&text);
                    }
                }
                Event::Eof => {
                    let open = stack.first().map(|e| e.name.local.clone()).unwrap_or_default();
                    return Err(DecodeError::syntax(
                        self.position(),
                        format!("input ended inside <{open}>"),
                    ));
                }
                _ => {}
            }
        }
    }

    fn element_name(&self, start: &BytesStart<'_>) -> Result<Name> {
        let (ns, local) = self.reader.resolve_element(start.name());
        self.resolved_name(ns, local.as_ref())
    }

    fn resolved_name(&self, ns: ResolveResult<'_>, local: &[u8]) -> Result<Name> {
        let space = match ns {
            ResolveResult::Bound(ns) => self.utf8(ns.as_ref())?.to_string(),
            ResolveResult::Unbound => String::new(),
            ResolveResult::Unknown(prefix) => {
                return Err(DecodeError::syntax(
                    self.position(),
                    format!("undeclared namespace prefix {:?}", String::from_utf8_lossy(&prefix)),
                ));
            }
        };
        Ok(Name::new(space, self.utf8(local)?))
    }

    /// Attributes of a non-root element, excluding namespace declarations.
    fn attributes(&self, start: &BytesStart<'_>) -> Result<Vec<(Name, String)>> {
        let mut out = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| DecodeError::xml(self.position(), err.into()))?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let (ns, local) = self.reader.resolve_attribute(attr.key);
            let name = self.resolved_name(ns, local.as_ref())?;
            let value = attr
                .decode_and_unescape_value(self.reader.decoder())
                .map_err(|err| DecodeError::xml(self.position(), err))?;
            out.push((name, value.into_owned()));
        }
        Ok(out)
    }

    /// Every attribute of the root, keyed by its raw name.
    fn root_bindings(&self, start: &BytesStart<'_>) -> Result<Vec<NamespaceBinding>> {
        let mut out = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|err| DecodeError::xml(self.position(), err.into()))?;
            let key = self.utf8(attr.key.as_ref())?;
            let value = attr
                .decode_and_unescape_value(self.reader.decoder())
                .map_err(|err| DecodeError::xml(self.position(), err))?;
            out.push(NamespaceBinding::from_attribute(key, value));
        }
        Ok(out)
    }

    fn utf8<'b>(&self, bytes: &'b [u8]) -> Result<&'b str> {
        std::str::from_utf8(bytes)
            .map_err(|_| DecodeError::syntax(self.position(), "name is not valid UTF-8"))
    }
}
