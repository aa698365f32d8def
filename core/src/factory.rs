use std::any::Any;
use std::fmt;

use ontologies_api::factory::{DataFactory, FactoryOptions, Feature, RdfObject, SupportTable};
use ontologies_api::native::NativeValue;
use ontologies_api::quad::{Quad, Quadruple};
use ontologies_api::term::*;
use ontologies_api::{FactoryError, Result};

use crate::{cmp, native, nq};

/// The prefix of the blank node identifiers made up by [`PlainFactory`].
pub const BNODE_PREFIX: &str = "b";

/// A [`DataFactory`] building plain values,
/// with a blank node counter of its own.
///
/// Two instances issue overlapping blank node identifiers
/// (`b1`, `b2`...), which must not be assumed distinct.
///
/// When the counter would overflow, it restarts at 1 in a new epoch,
/// and identifiers take the form `b<epoch>-<counter>` (`b1-1`, `b1-2`...),
/// so that no identifier is ever issued twice by the same instance.
#[derive(Clone, Debug)]
pub struct PlainFactory {
    bn_index: u64,
    bn_epoch: u64,
    supports: SupportTable,
}

impl PlainFactory {
    /// A factory with default options.
    pub fn new() -> Self {
        Self::with_options(FactoryOptions::default())
    }

    /// A factory with the given options.
    ///
    /// When `options.supports` is `None`, [`PlainFactory::default_supports`] is used.
    pub fn with_options(options: FactoryOptions) -> Self {
        PlainFactory {
            bn_index: options.bn_index,
            bn_epoch: 0,
            supports: options.supports.unwrap_or_else(Self::default_supports),
        }
    }

    /// The capability table of a factory built without an explicit one:
    /// only [`Feature::Identity`] is supported.
    pub fn default_supports() -> SupportTable {
        SupportTable::default().with(Feature::Identity, true)
    }

    /// The current value of the blank node counter,
    /// i.e. the last number part of the last identifier made up by this factory.
    pub fn bn_index(&self) -> u64 {
        self.bn_index
    }

    /// Build a literal from a value of any type.
    ///
    /// Strings are used as the lexical form, with `language_or_datatype`;
    /// other values are [coerced](DataFactory::native_literal),
    /// and `language_or_datatype` is ignored.
    pub fn literal_from<T, L>(&self, value: &T, language_or_datatype: L) -> Result<Literal>
    where
        T: Any + fmt::Debug,
        L: Into<LanguageOrDatatype>,
    {
        let any = value as &dyn Any;
        if let Some(txt) = any.downcast_ref::<&str>() {
            Ok(self.literal(*txt, language_or_datatype))
        } else if let Some(txt) = any.downcast_ref::<String>() {
            Ok(self.literal(txt.as_str(), language_or_datatype))
        } else {
            self.native_literal(NativeValue::from_any(value)?)
        }
    }

    /// Copy a term of another implementation into this data model.
    ///
    /// A foreign `DefaultGraph` term is mapped to the [default graph](ontologies_api::quad::DEFAULT_GRAPH).
    /// Fails with [`FactoryError::UnsupportedTermType`] for any other term type
    /// outside the supported set.
    pub fn from_foreign(&self, term: &dyn ForeignTerm) -> Result<Term> {
        let term_type = term.term_type().unwrap_or("undefined");
        let term: Term = match term_type.parse::<TermType>() {
            Ok(TermType::NamedNode) => self.named_node(term.value()).into(),
            Ok(TermType::BlankNode) => BlankNode::new(term.value()).into(),
            Ok(TermType::Literal) => match (term.language(), term.datatype()) {
                (Some(tag), _) if !tag.is_empty() => self.literal(term.value(), tag).into(),
                (_, Some(dt)) => self.literal(term.value(), self.named_node(dt)).into(),
                _ => self.literal(term.value(), ()).into(),
            },
            Err(_) if term_type == "DefaultGraph" => self.default_graph().into(),
            Err(err) => return Err(err),
        };
        Ok(term)
    }

    /// Compare two possibly absent values (see [`cmp::equals_opt`]).
    pub fn equals_opt(&self, a: Option<Comparable<'_>>, b: Option<Comparable<'_>>) -> bool {
        cmp::equals_opt(a, b)
    }
}

impl Default for PlainFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl DataFactory for PlainFactory {
    fn supports(&self) -> &SupportTable {
        &self.supports
    }

    fn blank_node(&mut self, id: Option<&str>) -> BlankNode {
        match id {
            Some(id) if !id.is_empty() => BlankNode::new(id),
            _ => {
                self.bn_index = match self.bn_index.checked_add(1) {
                    Some(next) => next,
                    None => {
                        // grows once every 2^64 blank nodes
                        self.bn_epoch += 1;
                        log::warn!(
                            "blank node counter exhausted, entering epoch {}",
                            self.bn_epoch
                        );
                        1
                    }
                };
                let id = if self.bn_epoch == 0 {
                    format!("{}{}", BNODE_PREFIX, self.bn_index)
                } else {
                    format!("{}{}-{}", BNODE_PREFIX, self.bn_epoch, self.bn_index)
                };
                log::trace!("issuing fresh blank node _:{}", id);
                BlankNode::new(id)
            }
        }
    }

    fn native_literal<V: Into<NativeValue>>(&self, value: V) -> Result<Literal> {
        native::to_literal(value.into())
    }

    fn from_term(&self, original: &Term) -> Term {
        match original {
            Term::Literal(lit) => {
                let copy = match lit.language() {
                    Some(tag) => self.literal(lit.value(), tag),
                    None => self.literal(lit.value(), lit.datatype()),
                };
                copy.into()
            }
            other => other.clone(),
        }
    }

    fn from_quad(&self, original: &Quad) -> Quad {
        let object = self.from_term(original.object());
        Quad::new(
            original.subject().clone(),
            original.predicate().clone(),
            object,
            original.graph().clone(),
        )
    }

    fn from_qdr(&self, original: &Quadruple) -> Quad {
        Quad::new(
            original.0.clone(),
            original.1.clone(),
            self.from_term(&original.2),
            original.3.clone(),
        )
    }

    fn qdr_from_quad(&self, original: &Quad) -> Quadruple {
        self.from_quad(original).into()
    }

    fn qdr_from_qdr(&self, original: &Quadruple) -> Quadruple {
        self.from_qdr(original).into()
    }

    fn equals<'a, 'b, A, B>(&self, a: A, b: B) -> bool
    where
        A: Into<Comparable<'a>>,
        B: Into<Comparable<'b>>,
    {
        cmp::equals(a.into(), b.into())
    }

    fn from_id(&self, id: &str) -> Result<RdfObject> {
        if !self.supports.supports(Feature::Identity) {
            return Err(FactoryError::unparseable(
                id,
                "this factory does not support identity lookups",
            ));
        }
        log::trace!("resolving id {:?}", id);
        nq::parse_id(id)
    }

    fn to_nq<'a, C: Into<Comparable<'a>>>(&self, value: C) -> Result<String> {
        nq::render(value.into())
    }
}
