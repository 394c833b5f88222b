//! Streaming decoder for the OBO-in-OWL RDF/XML profile.
//!
//! The `gogo-owl` crate reads ontology files such as the Gene Ontology's
//! `go.owl` and produces a sequence of RDF statements. Every term carries a
//! session-scoped integer identifier, no identifier triple is produced
//! twice, and anonymous structure (restrictions, intersections, property
//! chains, reified axioms) gets content-addressed blank node labels.
//!
//! # Entry Point
//!
//! ```
//! use gogo_owl::Decoder;
//!
//! let doc = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//!                       xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
//!                       xmlns:owl="http://www.w3.org/2002/07/owl#">
//!   <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0005634">
//!     <rdfs:subClassOf rdf:resource="http://purl.obolibrary.org/obo/GO_0043231"/>
//!   </owl:Class>
//! </rdf:RDF>"#;
//!
//! let statements = Decoder::new(doc.as_bytes())?.collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(statements.len(), 2);
//! # Ok::<(), gogo_owl::DecodeError>(())
//! ```
//!
//! # Compaction
//!
//! ```
//! # let doc = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
//! #                       xmlns:owl="http://www.w3.org/2002/07/owl#"
//! #                       xmlns:obo="http://purl.obolibrary.org/obo/">
//! #   <owl:Class rdf:about="http://purl.obolibrary.org/obo/GO_0005634"/>
//! # </rdf:RDF>"#;
//! let mut decoder = gogo_owl::Decoder::new(doc.as_bytes())?;
//! for statement in decoder.compacted() {
//!     println!("{}", statement?);
//! }
//! # Ok::<(), gogo_owl::DecodeError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod blank;
pub mod decoder;
pub mod error;
mod intern;
mod mapping;
pub mod namespace;
pub mod serializer;
pub mod term;
pub mod vocab;
mod xml;

pub use decoder::{Compacted, Decoder};
pub use error::{DecodeError, Result, TermError};
pub use mapping::ElementKind;
pub use namespace::{NamespaceBinding, NamespaceTable};
pub use term::{Statement, Term, TermKind, TermValue};
