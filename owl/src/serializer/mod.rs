//! Serializers for decoded statements.
//!
//! Only N-Triples ([`ntriples`]) is supported: one statement per line, the
//! same textual form as `Display` on terms and statements.

pub mod ntriples;
