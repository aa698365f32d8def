//! Expose the terms of the [Rio](rio_api) model as [foreign terms](ForeignTerm).
//!
//! NB: since [`rio_api::model`] types have public fields,
//! they can not in general be trusted to contain valid data
//! (e.g. a valid IRI in [`NamedNode`]).
//! However, their typical use-case is to be produced by a parser,
//! which ensures the validity of the underlying data.
//!
//! The [`Trusted`] wrapper is used to materialize the fact that we trust the underlying data of Rio types.
use rio_api::model::{
    BlankNode, GraphName, Literal, NamedNode, Quad as RioQuad, Subject, Term as RioTerm,
};

use ontologies_api::factory::DataFactory;
use ontologies_api::ns::{rdf, xsd};
use ontologies_api::quad::Quad;
use ontologies_api::term::{ForeignTerm, NamedNode as OurNamedNode, Node, Term};
use ontologies_api::{FactoryError, Result};

use crate::PlainFactory;

static XSD_STRING: OurNamedNode = xsd::string;
static RDF_LANG_STRING: OurNamedNode = rdf::langString;

/// The `termType` exposed by RDF-star quoted triples,
/// which this data model does not support.
pub const TRIPLE_TERM_TYPE: &str = "Triple";

/// Wrapper materializing that the data of a Rio term is trusted to be valid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Trusted<T>(pub T);

impl<'a> ForeignTerm for Trusted<NamedNode<'a>> {
    fn term_type(&self) -> Option<&str> {
        Some("NamedNode")
    }

    fn value(&self) -> &str {
        self.0.iri
    }
}

impl<'a> ForeignTerm for Trusted<BlankNode<'a>> {
    fn term_type(&self) -> Option<&str> {
        Some("BlankNode")
    }

    fn value(&self) -> &str {
        self.0.id
    }
}

impl<'a> ForeignTerm for Trusted<Literal<'a>> {
    fn term_type(&self) -> Option<&str> {
        Some("Literal")
    }

    fn value(&self) -> &str {
        lexical_value(self.0)
    }

    fn datatype(&self) -> Option<&str> {
        Some(datatype(self.0))
    }

    fn language(&self) -> Option<&str> {
        language_tag(self.0)
    }
}

fn lexical_value(l: Literal) -> &str {
    use Literal::*;
    match l {
        Simple { value } => value,
        LanguageTaggedString { value, .. } => value,
        Typed { value, .. } => value,
    }
}

fn datatype(l: Literal) -> &str {
    use Literal::*;
    match l {
        Simple { .. } => XSD_STRING.value(),
        LanguageTaggedString { .. } => RDF_LANG_STRING.value(),
        Typed { datatype, .. } => datatype.iri,
    }
}

fn language_tag(l: Literal) -> Option<&str> {
    if let Literal::LanguageTaggedString { language, .. } = l {
        Some(language)
    } else {
        None
    }
}

impl<'a> ForeignTerm for Trusted<Subject<'a>> {
    fn term_type(&self) -> Option<&str> {
        match self.0 {
            Subject::NamedNode(_) => Some("NamedNode"),
            Subject::BlankNode(_) => Some("BlankNode"),
            Subject::Triple(_) => Some(TRIPLE_TERM_TYPE),
        }
    }

    fn value(&self) -> &str {
        match self.0 {
            Subject::NamedNode(n) => n.iri,
            Subject::BlankNode(b) => b.id,
            Subject::Triple(_) => "",
        }
    }
}

impl<'a> ForeignTerm for Trusted<GraphName<'a>> {
    fn term_type(&self) -> Option<&str> {
        match self.0 {
            GraphName::NamedNode(_) => Some("NamedNode"),
            GraphName::BlankNode(_) => Some("BlankNode"),
        }
    }

    fn value(&self) -> &str {
        match self.0 {
            GraphName::NamedNode(n) => n.iri,
            GraphName::BlankNode(b) => b.id,
        }
    }
}

impl<'a> ForeignTerm for Trusted<RioTerm<'a>> {
    fn term_type(&self) -> Option<&str> {
        match self.0 {
            RioTerm::NamedNode(_) => Some("NamedNode"),
            RioTerm::BlankNode(_) => Some("BlankNode"),
            RioTerm::Literal(_) => Some("Literal"),
            RioTerm::Triple(_) => Some(TRIPLE_TERM_TYPE),
        }
    }

    fn value(&self) -> &str {
        match self.0 {
            RioTerm::NamedNode(n) => n.iri,
            RioTerm::BlankNode(b) => b.id,
            RioTerm::Literal(l) => lexical_value(l),
            RioTerm::Triple(_) => "",
        }
    }

    fn datatype(&self) -> Option<&str> {
        if let RioTerm::Literal(l) = self.0 {
            Some(datatype(l))
        } else {
            None
        }
    }

    fn language(&self) -> Option<&str> {
        if let RioTerm::Literal(l) = self.0 {
            language_tag(l)
        } else {
            None
        }
    }
}

/// Copy a Rio quad into this data model.
///
/// A quad without a graph name is put in the default graph.
/// Fails with [`FactoryError::UnsupportedTermType`] on RDF-star quoted triples.
pub fn quad_from_rio(factory: &PlainFactory, q: RioQuad<'_>) -> Result<Quad> {
    let subject = node(factory.from_foreign(&Trusted(q.subject))?)?;
    let predicate = factory.named_node(q.predicate.iri);
    let object = factory.from_foreign(&Trusted(q.object))?;
    let graph = match q.graph_name {
        Some(g) => node(factory.from_foreign(&Trusted(g))?)?,
        None => factory.default_graph().into(),
    };
    Ok(factory.quad(subject, predicate, object, Some(graph)))
}

fn node(term: Term) -> Result<Node> {
    Node::try_from(term).map_err(|t| FactoryError::UnsupportedTermType(t.term_type().to_string()))
}
