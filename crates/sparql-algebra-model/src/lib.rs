//! RDF data model for the SPARQL algebra engine
//!
//! This crate defines the values that expression evaluation and query
//! dispatch operate on:
//!
//! - **Terms**: IRIs, literals, blank nodes and variables
//! - **Solutions**: variable bindings and ordered solution sequences
//! - **Patterns**: triple patterns and basic graph patterns, the plain query form
//! - **Vocabulary**: XSD, RDF and XPath function IRIs

pub mod error;
pub mod pattern;
pub mod solution;
pub mod term;
pub mod vocab;

pub use error::{ModelError, ModelResult};
pub use pattern::{Pattern, Triple, TriplePattern};
pub use solution::{Binding, Solution, Solutions};
pub use term::{BlankNode, Iri, Literal, Term, Variable};
