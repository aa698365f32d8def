//! A quad expresses a single fact within a context:
//! a subject-predicate-object statement, plus the graph it belongs to.
//!
//! Quads come in two interchangeable shapes:
//! [`Quad`], with named components,
//! and [`Quadruple`], an ordered 4-tuple.
//!
//! The graph of a quad is never absent:
//! statements outside any named graph belong to the [`DEFAULT_GRAPH`].
use crate::term::{Comparable, NamedNode, Node, Term};

/// The default graph.
///
/// This data model does not have a dedicated term type for the default graph;
/// it is represented as a [`NamedNode`] with an empty IRI.
pub const DEFAULT_GRAPH: NamedNode = NamedNode::new_static("");

/// A statement with named components.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quad {
    subject: Node,
    predicate: NamedNode,
    object: Term,
    graph: Node,
}

impl Quad {
    /// Build a quad from its four components.
    pub fn new<S, O, G>(subject: S, predicate: NamedNode, object: O, graph: G) -> Self
    where
        S: Into<Node>,
        O: Into<Term>,
        G: Into<Node>,
    {
        Quad {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// The subject of this quad.
    pub fn subject(&self) -> &Node {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn predicate(&self) -> &NamedNode {
        &self.predicate
    }

    /// The object of this quad.
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// The graph of this quad.
    pub fn graph(&self) -> &Node {
        &self.graph
    }

    /// Destructure this quad into its components.
    pub fn into_parts(self) -> (Node, NamedNode, Term, Node) {
        (self.subject, self.predicate, self.object, self.graph)
    }
}

impl From<Quadruple> for Quad {
    fn from(other: Quadruple) -> Self {
        let Quadruple(subject, predicate, object, graph) = other;
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }
}

/// A statement as an ordered 4-tuple `(subject, predicate, object, graph)`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quadruple(pub Node, pub NamedNode, pub Term, pub Node);

impl Quadruple {
    /// Borrow the component at `position`.
    pub fn get(&self, position: QuadPosition) -> Comparable<'_> {
        match position {
            QuadPosition::Subject => (&self.0).into(),
            QuadPosition::Predicate => (&self.1).into(),
            QuadPosition::Object => (&self.2).into(),
            QuadPosition::Graph => (&self.3).into(),
        }
    }
}

impl From<Quad> for Quadruple {
    fn from(other: Quad) -> Self {
        let (s, p, o, g) = other.into_parts();
        Quadruple(s, p, o, g)
    }
}

/// The positions of the components in a [`Quadruple`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum QuadPosition {
    /// Position 0
    Subject = 0,
    /// Position 1
    Predicate = 1,
    /// Position 2
    Object = 2,
    /// Position 3
    Graph = 3,
}

impl QuadPosition {
    /// All positions, in order.
    pub const ALL: [QuadPosition; 4] = [
        QuadPosition::Subject,
        QuadPosition::Predicate,
        QuadPosition::Object,
        QuadPosition::Graph,
    ];
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{BlankNode, Literal};

    fn sample() -> Quad {
        Quad::new(
            BlankNode::new("b1"),
            NamedNode::new("http://example.org/p"),
            Literal::new("o"),
            DEFAULT_GRAPH,
        )
    }

    #[test]
    fn quad_and_quadruple_convert() {
        let q = sample();
        let qdr = Quadruple::from(q.clone());
        assert_eq!(&qdr.0, q.subject());
        assert_eq!(&qdr.1, q.predicate());
        assert_eq!(&qdr.2, q.object());
        assert_eq!(&qdr.3, q.graph());
        assert_eq!(Quad::from(qdr), q);
    }

    #[test]
    fn positions() {
        let qdr = Quadruple::from(sample());
        let values: Vec<_> = QuadPosition::ALL
            .iter()
            .map(|pos| qdr.get(*pos).value().unwrap_or_default())
            .collect();
        assert_eq!(values, ["b1", "http://example.org/p", "o", ""]);
        assert_eq!(QuadPosition::Graph as usize, 3);
    }

    #[test]
    fn default_graph() {
        assert!(sample().graph().is_default_graph());
    }
}
