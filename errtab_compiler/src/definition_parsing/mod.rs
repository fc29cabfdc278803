//! Definition parsing: documentation text into description triples
//!
//! Walks the documentation blob paragraph by paragraph and produces ordered
//! (name, short description, long description) triples. Parsing is
//! deliberately permissive: a paragraph that fails the heading pattern is
//! continuation prose, never an error.

pub mod parser;

pub use parser::{parse_definitions, DefinitionParser, DefinitionTriple};
