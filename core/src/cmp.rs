//! Structural equality over [`Comparable`] values.
//!
//! This relation underlies deduplication, indexing and matching,
//! so it must be total over every representation of a term or quad:
//!
//! 1. a value is equal to itself;
//! 2. an absent value is only equal to another absent value;
//! 3. a [foreign term](ForeignTerm) providing its own `equals` decides when it is the left operand;
//! 4. quads and quadruples are equal iff their four components are pairwise equal,
//!    regardless of which of the two shapes each side has,
//!    and are never equal to a term;
//! 5. literals are equal iff their `termType`, value, datatype and language are equal;
//! 6. other terms are equal iff their `termType` and value are equal;
//! 7. terms without a `termType` are never equal to another value.
use std::mem::discriminant;

use ontologies_api::quad::{QuadPosition, Quadruple};
use ontologies_api::term::{Comparable, TermType};

/// Compare two possibly absent values.
pub fn equals_opt(a: Option<Comparable<'_>>, b: Option<Comparable<'_>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => equals(a, b),
        _ => false,
    }
}

/// Compare two values.
pub fn equals(a: Comparable<'_>, b: Comparable<'_>) -> bool {
    if same_value(a, b) {
        return true;
    }
    if let Comparable::Foreign(f) = a {
        if let Some(res) = f.equals(b) {
            return res;
        }
    }
    match (quad_components(a), quad_components(b)) {
        (Some(qa), Some(qb)) => qa.into_iter().zip(qb).all(|(x, y)| equals(x, y)),
        (None, None) => terms_equal(a, b),
        _ => false,
    }
}

fn same_value(a: Comparable<'_>, b: Comparable<'_>) -> bool {
    discriminant(&a) == discriminant(&b) && a.addr() == b.addr()
}

pub(crate) fn quad_components(c: Comparable<'_>) -> Option<[Comparable<'_>; 4]> {
    match c {
        Comparable::Quadruple(q) => Some(QuadPosition::ALL.map(|pos| q.get(pos))),
        Comparable::Quad(q) => Some([
            q.subject().into(),
            q.predicate().into(),
            q.object().into(),
            q.graph().into(),
        ]),
        _ => None,
    }
}

fn terms_equal(a: Comparable<'_>, b: Comparable<'_>) -> bool {
    let (Some(ta), Some(tb)) = (a.term_type(), b.term_type()) else {
        return false;
    };
    if ta != tb || a.value() != b.value() {
        return false;
    }
    if ta == TermType::Literal.as_str() {
        a.datatype() == b.datatype() && a.language() == b.language()
    } else {
        true
    }
}

/// Whether `c` is the default graph.
pub fn is_default_graph(c: Comparable<'_>) -> bool {
    c.term_type() == Some(TermType::NamedNode.as_str()) && c.value() == Some("")
}

/// Compare the components of two quadruples at the given position.
pub fn equals_at(a: &Quadruple, b: &Quadruple, position: QuadPosition) -> bool {
    equals(a.get(position), b.get(position))
}

#[cfg(test)]
mod test {
    use super::*;
    use ontologies_api::ns::{rdf, xsd};
    use ontologies_api::prelude::*;
    use test_case::test_case;

    #[derive(Debug)]
    struct Loose(&'static str, Option<&'static str>);

    impl ForeignTerm for Loose {
        fn term_type(&self) -> Option<&str> {
            self.1
        }
        fn value(&self) -> &str {
            self.0
        }
    }

    /// A foreign term that considers itself equal to anything.
    #[derive(Debug)]
    struct Greedy;

    impl ForeignTerm for Greedy {
        fn term_type(&self) -> Option<&str> {
            Some("NamedNode")
        }
        fn value(&self) -> &str {
            "greedy"
        }
        fn equals(&self, _other: Comparable<'_>) -> Option<bool> {
            Some(true)
        }
    }

    fn nn(iri: &str) -> NamedNode {
        NamedNode::new(iri)
    }

    fn quad() -> Quad {
        Quad::new(nn("http://ex/s"), nn("http://ex/p"), Literal::new("o"), DEFAULT_GRAPH)
    }

    #[test]
    fn identity() {
        let q = quad();
        assert!(equals((&q).into(), (&q).into()));
        let l = Literal::new("x");
        assert!(equals((&l).into(), (&l).into()));
    }

    #[test]
    fn nullness() {
        let n = nn("http://ex/s");
        assert!(equals_opt(None, None));
        assert!(!equals_opt(Some((&n).into()), None));
        assert!(!equals_opt(None, Some((&n).into())));
    }

    #[test_case(Term::from(nn("http://ex/a")), Term::from(nn("http://ex/a")), true; "same IRI")]
    #[test_case(Term::from(nn("http://ex/a")), Term::from(nn("http://ex/b")), false; "different IRI")]
    #[test_case(Term::from(nn("b1")), Term::from(BlankNode::new("b1")), false; "IRI vs blank node")]
    #[test_case(Term::from(BlankNode::new("b1")), Term::from(BlankNode::new("b1")), true; "same blank node")]
    #[test_case(Term::from(Literal::new("1")), Term::from(Literal::new_dt("1", xsd::integer)), false; "different datatype")]
    #[test_case(Term::from(Literal::new_lang("a", "en")), Term::from(Literal::new_lang("a", "fr")), false; "different language")]
    #[test_case(Term::from(Literal::new_lang("a", "en")), Term::from(Literal::new_lang("a", "en")), true; "same language")]
    #[test_case(Term::from(Literal::new("a")), Term::from(nn("a")), false; "literal vs IRI")]
    fn terms(a: Term, b: Term, expected: bool) {
        assert_eq!(equals((&a).into(), (&b).into()), expected);
        assert_eq!(equals((&b).into(), (&a).into()), expected);
    }

    #[test]
    fn literal_compares_datatype_of_both_sides() {
        let a = Literal::new_unchecked("a", xsd::string, Some("en".into()));
        let b = Literal::new_unchecked("a", rdf::langString, Some("en".into()));
        assert!(!equals((&a).into(), (&b).into()));
    }

    #[test]
    fn quad_and_quadruple_are_interchangeable() {
        let q = quad();
        let qdr = Quadruple::from(q.clone());
        assert!(equals((&q).into(), (&qdr).into()));
        assert!(equals((&qdr).into(), (&q).into()));
    }

    #[test]
    fn quads_differing_in_graph() {
        let q1 = quad();
        let (s, p, o, _) = q1.clone().into_parts();
        let q2 = Quad::new(s, p, o, nn("http://ex/g"));
        assert!(!equals((&q1).into(), (&q2).into()));
        let (q1, q2) = (Quadruple::from(q1), Quadruple::from(q2));
        assert!(equals_at(&q1, &q2, QuadPosition::Object));
        assert!(!equals_at(&q1, &q2, QuadPosition::Graph));
    }

    #[test]
    fn quads_never_equal_terms() {
        let q = quad();
        let n = nn("http://ex/s");
        assert!(!equals((&q).into(), (&n).into()));
        assert!(!equals((&n).into(), (&q).into()));
    }

    #[test]
    fn foreign_terms_compare_structurally() {
        let ours = nn("http://ex/a");
        let theirs = Loose("http://ex/a", Some("NamedNode"));
        assert!(equals((&ours).into(), Comparable::Foreign(&theirs)));
        assert!(equals(Comparable::Foreign(&theirs), (&ours).into()));
    }

    #[test]
    fn missing_term_type_is_never_equal() {
        let a = Loose("x", None);
        let b = Loose("x", None);
        assert!(!equals(Comparable::Foreign(&a), Comparable::Foreign(&b)));
        assert!(equals(Comparable::Foreign(&a), Comparable::Foreign(&a)));
    }

    #[test]
    fn instance_equality_takes_precedence_on_the_left() {
        let lit = Literal::new("anything");
        assert!(equals(Comparable::Foreign(&Greedy), (&lit).into()));
        assert!(!equals((&lit).into(), Comparable::Foreign(&Greedy)));
    }

    #[test]
    fn default_graph_detection() {
        assert!(is_default_graph((&DEFAULT_GRAPH).into()));
        assert!(!is_default_graph((&BlankNode::new("")).into()));
    }
}
