//! I define how RDF terms
//! (namely [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented.
//!
//! I provide the closed enum [`Term`] over the three concrete term types
//! [`NamedNode`], [`BlankNode`] and [`Literal`],
//! the [`Node`] enum for positions that only accept IRIs and blank nodes,
//! and the [`Comparable`] view over anything that can be compared for equality.
//!
//! All terms are immutable values:
//! they are built once (typically by a [`DataFactory`](crate::factory::DataFactory))
//! and never modified afterwards.
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

mod _comparable;
pub use _comparable::*;
mod _foreign;
pub use _foreign::*;
mod _literal;
pub use _literal::*;

/// The tag of a [`Term`], mirroring the `termType` of the RDF/JS data model.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermType {
    /// A [`NamedNode`]
    NamedNode,
    /// A [`BlankNode`]
    BlankNode,
    /// A [`Literal`]
    Literal,
}

impl TermType {
    /// The RDF/JS name of this term type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::BlankNode => "BlankNode",
            TermType::Literal => "Literal",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermType {
    type Err = crate::FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NamedNode" => Ok(TermType::NamedNode),
            "BlankNode" => Ok(TermType::BlankNode),
            "Literal" => Ok(TermType::Literal),
            other => Err(crate::FactoryError::UnsupportedTermType(other.to_string())),
        }
    }
}

/// A resource of which the IRI is known.
///
/// The IRI is kept verbatim: it is never checked nor normalized.
/// The empty IRI denotes the default graph
/// (see [`DEFAULT_GRAPH`](crate::quad::DEFAULT_GRAPH)).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NamedNode(Cow<'static, str>);

impl NamedNode {
    /// Build a named node wrapping `iri`.
    pub fn new<T: Into<String>>(iri: T) -> Self {
        NamedNode(Cow::Owned(iri.into()))
    }

    /// `const` constructor for [`NamedNode`],
    /// used for the terms of [namespaces](crate::ns).
    pub const fn new_static(iri: &'static str) -> Self {
        NamedNode(Cow::Borrowed(iri))
    }

    /// The IRI of this node.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// The document part of this IRI,
    /// i.e. everything before the first `#`
    /// (or the whole IRI if it contains none).
    pub fn doc(&self) -> &str {
        match self.0.find('#') {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }

    /// Whether this node is the default graph.
    pub fn is_default_graph(&self) -> bool {
        self.0.is_empty()
    }
}

/// A resource with a locally scoped identifier.
///
/// Two blank nodes are the same if and only if their identifiers are equal:
/// identifiers coming from distinct factories are *not* guaranteed to be distinct.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BlankNode(String);

impl BlankNode {
    /// Build a blank node with the given identifier
    /// (without the leading `_:`).
    pub fn new<T: Into<String>>(id: T) -> Self {
        BlankNode(id.into())
    }

    /// The identifier of this blank node.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A node, i.e. a term that can be used in subject or graph position.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Node {
    /// A [`NamedNode`]
    NamedNode(NamedNode),
    /// A [`BlankNode`]
    BlankNode(BlankNode),
}

impl Node {
    /// The IRI or blank node identifier of this node.
    pub fn value(&self) -> &str {
        match self {
            Node::NamedNode(n) => n.value(),
            Node::BlankNode(b) => b.value(),
        }
    }

    /// The type of this node.
    pub fn term_type(&self) -> TermType {
        match self {
            Node::NamedNode(_) => TermType::NamedNode,
            Node::BlankNode(_) => TermType::BlankNode,
        }
    }

    /// Whether this node is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Node::NamedNode(n) if n.is_default_graph())
    }
}

impl From<NamedNode> for Node {
    fn from(other: NamedNode) -> Self {
        Node::NamedNode(other)
    }
}

impl From<BlankNode> for Node {
    fn from(other: BlankNode) -> Self {
        Node::BlankNode(other)
    }
}

impl TryFrom<Term> for Node {
    type Error = Term;

    /// Fails with the original term if it is a literal.
    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::NamedNode(n) => Ok(Node::NamedNode(n)),
            Term::BlankNode(b) => Ok(Node::BlankNode(b)),
            literal => Err(literal),
        }
    }
}

/// An RDF term.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// A [`NamedNode`]
    NamedNode(NamedNode),
    /// A [`BlankNode`]
    BlankNode(BlankNode),
    /// A [`Literal`]
    Literal(Literal),
}

impl Term {
    /// The type of this term.
    pub fn term_type(&self) -> TermType {
        match self {
            Term::NamedNode(_) => TermType::NamedNode,
            Term::BlankNode(_) => TermType::BlankNode,
            Term::Literal(_) => TermType::Literal,
        }
    }

    /// The IRI, blank node identifier or lexical form of this term.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.value(),
            Term::BlankNode(b) => b.value(),
            Term::Literal(l) => l.value(),
        }
    }

    /// Return true if this term is a [`NamedNode`].
    #[inline]
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    /// Return true if this term is a [`BlankNode`].
    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Return true if this term is a [`Literal`].
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Return true if this term is a [`Node`],
    /// i.e. a named node or a blank node.
    #[inline]
    pub fn is_node(&self) -> bool {
        !self.is_literal()
    }

    /// If this term is a [`NamedNode`], return it.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// If this term is a [`BlankNode`], return it.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// If this term is a [`Literal`], return it.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }
}

impl From<NamedNode> for Term {
    fn from(other: NamedNode) -> Self {
        Term::NamedNode(other)
    }
}

impl From<BlankNode> for Term {
    fn from(other: BlankNode) -> Self {
        Term::BlankNode(other)
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Self {
        Term::Literal(other)
    }
}

impl From<Node> for Term {
    fn from(other: Node) -> Self {
        match other {
            Node::NamedNode(n) => Term::NamedNode(n),
            Node::BlankNode(b) => Term::BlankNode(b),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/ns#term", "http://example.org/ns"; "hash IRI")]
    #[test_case("http://example.org/ns/term", "http://example.org/ns/term"; "slash IRI")]
    #[test_case("http://example.org/ns#a#b", "http://example.org/ns"; "first hash wins")]
    #[test_case("", ""; "default graph")]
    fn doc(iri: &str, expected: &str) {
        assert_eq!(NamedNode::new(iri).doc(), expected);
    }

    #[test]
    fn predicates() {
        let n: Term = NamedNode::new("http://example.org/").into();
        let b: Term = BlankNode::new("b1").into();
        let l: Term = Literal::new("x").into();
        assert!(n.is_named_node() && n.is_node() && !n.is_literal());
        assert!(b.is_blank_node() && b.is_node());
        assert!(l.is_literal() && !l.is_node());
        assert_eq!(l.term_type(), TermType::Literal);
        assert_eq!(b.value(), "b1");
    }

    #[test]
    fn term_type_round_trips_through_strings() {
        for tt in [TermType::NamedNode, TermType::BlankNode, TermType::Literal] {
            assert_eq!(tt.to_string().parse::<TermType>().unwrap(), tt);
        }
        assert!("Variable".parse::<TermType>().is_err());
    }

    #[test]
    fn node_from_term() {
        let n = Node::try_from(Term::from(BlankNode::new("x"))).unwrap();
        assert_eq!(n, Node::BlankNode(BlankNode::new("x")));
        assert!(Node::try_from(Term::from(Literal::new("x"))).is_err());
    }

    #[test]
    fn default_graph_detection() {
        assert!(NamedNode::new("").is_default_graph());
        assert!(Node::from(NamedNode::new_static("")).is_default_graph());
        assert!(!Node::from(BlankNode::new("")).is_default_graph());
    }
}
