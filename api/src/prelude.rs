//! General-use types and traits of the ontology data model.

pub use crate::factory::{DataFactory, FactoryOptions, Feature, Indexable, RdfObject, SupportTable};
pub use crate::native::{DateParts, NativeValue};
pub use crate::quad::{Quad, QuadPosition, Quadruple, DEFAULT_GRAPH};
pub use crate::term::{
    BlankNode, Comparable, ForeignTerm, LanguageOrDatatype, Literal, NamedNode, Node, Term,
    TermType,
};
pub use crate::{FactoryError, Result};
