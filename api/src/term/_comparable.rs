use super::*;
use crate::factory::RdfObject;
use crate::quad::{Quad, Quadruple};

/// A borrowed view over anything that can be compared
/// by [`DataFactory::equals`](crate::factory::DataFactory::equals)
/// or rendered by [`DataFactory::to_nq`](crate::factory::DataFactory::to_nq).
///
/// The variant is resolved once, when the view is built,
/// so that equality never has to guess whether a value is a term,
/// a quad or a quadruple.
#[derive(Clone, Copy, Debug)]
pub enum Comparable<'a> {
    /// A [`NamedNode`]
    NamedNode(&'a NamedNode),
    /// A [`BlankNode`]
    BlankNode(&'a BlankNode),
    /// A [`Literal`]
    Literal(&'a Literal),
    /// A [`Quad`]
    Quad(&'a Quad),
    /// A [`Quadruple`]
    Quadruple(&'a Quadruple),
    /// A term from another RDF implementation
    Foreign(&'a dyn ForeignTerm),
}

impl<'a> Comparable<'a> {
    /// Whether this value is a term (as opposed to a quad or a quadruple).
    pub fn is_term(&self) -> bool {
        !matches!(*self, Comparable::Quad(_) | Comparable::Quadruple(_))
    }

    /// The RDF/JS `termType` of this value, if it is a term and has one.
    pub fn term_type(&self) -> Option<&'a str> {
        match *self {
            Comparable::NamedNode(_) => Some(TermType::NamedNode.as_str()),
            Comparable::BlankNode(_) => Some(TermType::BlankNode.as_str()),
            Comparable::Literal(_) => Some(TermType::Literal.as_str()),
            Comparable::Foreign(t) => t.term_type(),
            Comparable::Quad(_) | Comparable::Quadruple(_) => None,
        }
    }

    /// The value of this term, if it is a term.
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Comparable::NamedNode(n) => Some(n.value()),
            Comparable::BlankNode(b) => Some(b.value()),
            Comparable::Literal(l) => Some(l.value()),
            Comparable::Foreign(t) => Some(t.value()),
            Comparable::Quad(_) | Comparable::Quadruple(_) => None,
        }
    }

    /// The datatype IRI of this term, if it is a literal.
    pub fn datatype(&self) -> Option<&'a str> {
        match *self {
            Comparable::Literal(l) => Some(l.datatype().value()),
            Comparable::Foreign(t) => t.datatype(),
            _ => None,
        }
    }

    /// The language tag of this term, if it is a language-tagged literal.
    pub fn language(&self) -> Option<&'a str> {
        match *self {
            Comparable::Literal(l) => l.language(),
            Comparable::Foreign(t) => t.language(),
            _ => None,
        }
    }

    /// The address of the underlying value,
    /// used to detect that two views borrow the very same value.
    pub fn addr(&self) -> *const () {
        match *self {
            Comparable::NamedNode(x) => x as *const _ as *const (),
            Comparable::BlankNode(x) => x as *const _ as *const (),
            Comparable::Literal(x) => x as *const _ as *const (),
            Comparable::Quad(x) => x as *const _ as *const (),
            Comparable::Quadruple(x) => x as *const _ as *const (),
            Comparable::Foreign(x) => x as *const _ as *const (),
        }
    }
}

impl<'a> From<&'a NamedNode> for Comparable<'a> {
    fn from(other: &'a NamedNode) -> Self {
        Comparable::NamedNode(other)
    }
}

impl<'a> From<&'a BlankNode> for Comparable<'a> {
    fn from(other: &'a BlankNode) -> Self {
        Comparable::BlankNode(other)
    }
}

impl<'a> From<&'a Literal> for Comparable<'a> {
    fn from(other: &'a Literal) -> Self {
        Comparable::Literal(other)
    }
}

impl<'a> From<&'a Node> for Comparable<'a> {
    fn from(other: &'a Node) -> Self {
        match other {
            Node::NamedNode(n) => Comparable::NamedNode(n),
            Node::BlankNode(b) => Comparable::BlankNode(b),
        }
    }
}

impl<'a> From<&'a Term> for Comparable<'a> {
    fn from(other: &'a Term) -> Self {
        match other {
            Term::NamedNode(n) => Comparable::NamedNode(n),
            Term::BlankNode(b) => Comparable::BlankNode(b),
            Term::Literal(l) => Comparable::Literal(l),
        }
    }
}

impl<'a> From<&'a Quad> for Comparable<'a> {
    fn from(other: &'a Quad) -> Self {
        Comparable::Quad(other)
    }
}

impl<'a> From<&'a Quadruple> for Comparable<'a> {
    fn from(other: &'a Quadruple) -> Self {
        Comparable::Quadruple(other)
    }
}

impl<'a> From<&'a RdfObject> for Comparable<'a> {
    fn from(other: &'a RdfObject) -> Self {
        match other {
            RdfObject::Term(t) => t.into(),
            RdfObject::Quad(q) => Comparable::Quad(q),
        }
    }
}

impl<'a> From<&'a dyn ForeignTerm> for Comparable<'a> {
    fn from(other: &'a dyn ForeignTerm) -> Self {
        Comparable::Foreign(other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ns::xsd;

    #[derive(Debug)]
    struct Var(&'static str);

    impl ForeignTerm for Var {
        fn term_type(&self) -> Option<&str> {
            Some("Variable")
        }
        fn value(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn views_over_terms() {
        let lit = Term::from(Literal::new_dt("1", xsd::integer));
        let view = Comparable::from(&lit);
        assert!(view.is_term());
        assert_eq!(view.term_type(), Some("Literal"));
        assert_eq!(view.value(), Some("1"));
        assert_eq!(view.datatype(), Some(xsd::integer.value()));
        assert_eq!(view.language(), None);
    }

    #[test]
    fn views_over_foreign_terms() {
        let var = Var("x");
        let view = Comparable::from(&var as &dyn ForeignTerm);
        assert_eq!(view.term_type(), Some("Variable"));
        assert_eq!(view.value(), Some("x"));
        assert_eq!(view.datatype(), None);
    }

    #[test]
    fn addresses_identify_values() {
        let a = NamedNode::new("http://example.org/");
        let b = a.clone();
        assert_eq!(Comparable::from(&a).addr(), Comparable::from(&a).addr());
        assert_ne!(Comparable::from(&a).addr(), Comparable::from(&b).addr());
    }
}
