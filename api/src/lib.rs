//! This crate defines the data model shared by the ontology tooling:
//! the shape of [RDF] terms and quads,
//! and the [`DataFactory`](factory::DataFactory) interface used to build them.
//!
//! The model is a deliberately restricted subset of the [RDF/JS data model]:
//! there are no variables, no collections,
//! and no dedicated type for the default graph,
//! which is represented as a [`NamedNode`](term::NamedNode) with an empty IRI
//! (see [`DEFAULT_GRAPH`](quad::DEFAULT_GRAPH)).
//!
//! # Getting Started
//!
//! ```
//! use ontologies_api::prelude::*;
//! use ontologies_api::ns::{rdfs, xsd};
//!
//! let s = NamedNode::new("http://example.org/alice");
//! let label = Literal::new_lang("Alice", "en");
//! let q = Quad::new(s, rdfs::label, label, DEFAULT_GRAPH);
//!
//! assert!(q.graph().is_default_graph());
//! assert_eq!(Literal::new("42").datatype(), &xsd::string);
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [RDF/JS data model]: https://rdf.js.org/data-model-spec/
#![deny(missing_docs)]

pub mod error;
pub mod factory;
pub mod native;
pub mod ns;
pub mod prelude;
pub mod quad;
pub mod term;

pub use error::{FactoryError, Result};
