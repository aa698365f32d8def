//! The [`DataFactory`] interface, through which terms and quads are built,
//! compared, keyed and rendered,
//! together with the capability table describing optional factory behaviours.
//!
//! This is a strict subset of the [RDF/JS DataFactory],
//! restricted to RDF-native features (no variables, no literals as predicates...).
//!
//! [RDF/JS DataFactory]: https://rdf.js.org/data-model-spec/#datafactory-interface
use std::fmt;
use std::str::FromStr;

use crate::native::NativeValue;
use crate::quad::{Quad, Quadruple};
use crate::term::*;
use crate::{FactoryError, Result};

/// The canonical key of a term or quad, as returned by [`DataFactory::id`].
pub type Indexable = String;

/// An owned term or quad, as returned by [`DataFactory::from_id`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RdfObject {
    /// A term
    Term(Term),
    /// A quad
    Quad(Quad),
}

impl RdfObject {
    /// Return the term, if this is a term.
    pub fn into_term(self) -> Option<Term> {
        match self {
            RdfObject::Term(t) => Some(t),
            RdfObject::Quad(_) => None,
        }
    }

    /// Return the quad, if this is a quad.
    pub fn into_quad(self) -> Option<Quad> {
        match self {
            RdfObject::Quad(q) => Some(q),
            RdfObject::Term(_) => None,
        }
    }
}

/// Optional behaviours that a [`DataFactory`] may support.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Feature {
    /// Whether the factory supports `Collection` terms.
    Collections,
    /// Whether the factory supports a dedicated `DefaultGraph` term type.
    DefaultGraphType,
    /// Whether the terms produced by the factory carry their own `equals` method.
    EqualsMethod,
    /// Whether the factory allows reverse lookups with [`DataFactory::from_id`].
    Identity,
    /// Whether the factory supports mapping ids back to node instances.
    NodeLookup,
    /// Whether the factory supports `Variable` terms.
    VariableType,
}

impl Feature {
    /// All features, in declaration order.
    pub const ALL: [Feature; 6] = [
        Feature::Collections,
        Feature::DefaultGraphType,
        Feature::EqualsMethod,
        Feature::Identity,
        Feature::NodeLookup,
        Feature::VariableType,
    ];

    /// The conventional name of this feature.
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Collections => "COLLECTIONS",
            Feature::DefaultGraphType => "DEFAULT_GRAPH_TYPE",
            Feature::EqualsMethod => "EQUALS_METHOD",
            Feature::Identity => "IDENTITY",
            Feature::NodeLookup => "NODE_LOOKUP",
            Feature::VariableType => "VARIABLE_TYPE",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// Error raised when parsing an unknown [`Feature`] name.
#[derive(Debug, thiserror::Error)]
#[error("Unknown factory feature '{0}'")]
pub struct UnknownFeature(pub String);

/// The capability table of a [`DataFactory`]:
/// which [`Feature`]s it implements.
///
/// Callers may branch on this table instead of probing behaviour empirically.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct SupportTable {
    collections: bool,
    default_graph_type: bool,
    equals_method: bool,
    identity: bool,
    node_lookup: bool,
    variable_type: bool,
}

impl SupportTable {
    /// Whether `feature` is supported.
    pub fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::Collections => self.collections,
            Feature::DefaultGraphType => self.default_graph_type,
            Feature::EqualsMethod => self.equals_method,
            Feature::Identity => self.identity,
            Feature::NodeLookup => self.node_lookup,
            Feature::VariableType => self.variable_type,
        }
    }

    /// Declare whether `feature` is supported.
    pub fn set(&mut self, feature: Feature, supported: bool) -> &mut Self {
        let flag = match feature {
            Feature::Collections => &mut self.collections,
            Feature::DefaultGraphType => &mut self.default_graph_type,
            Feature::EqualsMethod => &mut self.equals_method,
            Feature::Identity => &mut self.identity,
            Feature::NodeLookup => &mut self.node_lookup,
            Feature::VariableType => &mut self.variable_type,
        };
        *flag = supported;
        self
    }

    /// Consume this table and return it with `feature` set to `supported`.
    #[must_use]
    pub fn with(mut self, feature: Feature, supported: bool) -> Self {
        self.set(feature, supported);
        self
    }

    /// Iterate over the supported features.
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|f| self.supports(*f))
    }
}

/// Options used to build a [`DataFactory`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoryOptions {
    /// Initial value of the blank node counter.
    pub bn_index: u64,
    /// Capability table. When `None`, the factory's own table is used.
    pub supports: Option<SupportTable>,
}

impl FactoryOptions {
    /// Change the initial value of the blank node counter.
    #[must_use]
    pub fn with_bn_index(mut self, bn_index: u64) -> Self {
        self.bn_index = bn_index;
        self
    }

    /// Change the capability table.
    #[must_use]
    pub fn with_supports(mut self, supports: SupportTable) -> Self {
        self.supports = Some(supports);
        self
    }

    /// Declare whether `feature` is supported,
    /// starting from `base` if no table was set yet.
    #[must_use]
    pub fn with_support(mut self, base: SupportTable, feature: Feature, supported: bool) -> Self {
        let table = self.supports.get_or_insert(base);
        table.set(feature, supported);
        self
    }
}

/// A factory for terms and quads.
///
/// Besides construction, a factory provides structural copies,
/// structural equality across representations,
/// and the canonical text form of terms and quads (N-Quads),
/// which also serves as their identity key.
///
/// All methods are pure, except [`blank_node`](DataFactory::blank_node)
/// which advances the factory's blank node counter when it has to make up an identifier.
/// That counter is owned by the factory instance:
/// sharing a factory across threads requires external synchronization.
pub trait DataFactory {
    /// The capability table of this factory.
    fn supports(&self) -> &SupportTable;

    /// Wrap `iri` in a named node, verbatim.
    fn named_node<T: Into<String>>(&self, iri: T) -> NamedNode {
        NamedNode::new(iri)
    }

    /// Build a blank node with the given identifier,
    /// or with a fresh one if `id` is `None` (or empty).
    fn blank_node(&mut self, id: Option<&str>) -> BlankNode;

    /// Build a literal from a string,
    /// with an optional language tag or datatype.
    fn literal<T, L>(&self, value: T, language_or_datatype: L) -> Literal
    where
        T: Into<String>,
        L: Into<LanguageOrDatatype>,
    {
        Literal::with(value, language_or_datatype.into())
    }

    /// Coerce a native value into a typed literal.
    fn native_literal<V: Into<NativeValue>>(&self, value: V) -> Result<Literal>;

    /// The default graph.
    fn default_graph(&self) -> NamedNode {
        crate::quad::DEFAULT_GRAPH
    }

    /// Build a quad, in the default graph if `graph` is `None`.
    fn quad<S, O>(&self, subject: S, predicate: NamedNode, object: O, graph: Option<Node>) -> Quad
    where
        S: Into<Node>,
        O: Into<Term>,
    {
        let graph = graph.unwrap_or_else(|| self.default_graph().into());
        Quad::new(subject, predicate, object, graph)
    }

    /// Build a quadruple, in the default graph if `graph` is `None`.
    fn quadruple<S, O>(
        &self,
        subject: S,
        predicate: NamedNode,
        object: O,
        graph: Option<Node>,
    ) -> Quadruple
    where
        S: Into<Node>,
        O: Into<Term>,
    {
        self.quad(subject, predicate, object, graph).into()
    }

    /// Structural copy of a term.
    fn from_term(&self, original: &Term) -> Term;

    /// Structural copy of a quad.
    fn from_quad(&self, original: &Quad) -> Quad;

    /// Convert a quadruple into a quad.
    fn from_qdr(&self, original: &Quadruple) -> Quad;

    /// Convert a quad into a quadruple.
    fn qdr_from_quad(&self, original: &Quad) -> Quadruple;

    /// Structural copy of a quadruple.
    fn qdr_from_qdr(&self, original: &Quadruple) -> Quadruple;

    /// Compare two terms, quads or quadruples structurally.
    fn equals<'a, 'b, A, B>(&self, a: A, b: B) -> bool
    where
        A: Into<Comparable<'a>>,
        B: Into<Comparable<'b>>;

    /// The canonical key of a term, quad or quadruple.
    fn id<'a, C: Into<Comparable<'a>>>(&self, value: C) -> Result<Indexable> {
        self.to_nq(value)
    }

    /// Recover the term or quad identified by `id`.
    ///
    /// Fails with [`FactoryError::UnparseableId`]
    /// if the factory does not support [`Feature::Identity`].
    fn from_id(&self, id: &str) -> Result<RdfObject> {
        Err(FactoryError::unparseable(
            id,
            "this factory does not support identity lookups",
        ))
    }

    /// The N-Quads rendering of a term, quad or quadruple.
    fn to_nq<'a, C: Into<Comparable<'a>>>(&self, value: C) -> Result<String>;
}
