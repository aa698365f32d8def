//! A minimal quad store, built on top of a [`DataFactory`].
//!
//! Stores own their factory:
//! consumers needing one get it from the store ([`LowLevelStore::factory`])
//! rather than from any ambient registry.
use std::collections::HashMap;

use ontologies_api::factory::{DataFactory, Indexable};
use ontologies_api::quad::{Quad, Quadruple};
use ontologies_api::term::{NamedNode, Node, Term};
use ontologies_api::Result;

use crate::PlainFactory;

/// The interface of a quad store.
pub trait LowLevelStore {
    /// The type of factory owned by this store.
    type Factory: DataFactory;

    /// The factory owned by this store.
    fn factory(&self) -> &Self::Factory;

    /// Add a quad built from its components, in the default graph if `graph` is `None`.
    fn add(
        &mut self,
        subject: Node,
        predicate: NamedNode,
        object: Term,
        graph: Option<Node>,
    ) -> Result<Quad> {
        let quad = self.factory().quad(subject, predicate, object, graph);
        self.add_quad(quad)
    }

    /// Add `quad` unless an equal quad is already stored.
    ///
    /// Return the stored quad.
    fn add_quad(&mut self, quad: Quad) -> Result<Quad>;

    /// Add all `quads`, returning the stored ones.
    fn add_quads<I: IntoIterator<Item = Quad>>(&mut self, quads: I) -> Result<Vec<Quad>> {
        quads.into_iter().map(|q| self.add_quad(q)).collect()
    }

    /// Add `quadruple` unless an equal quad is already stored.
    fn add_quadruple(&mut self, quadruple: Quadruple) -> Result<Quadruple> {
        Ok(self.add_quad(quadruple.into())?.into())
    }

    /// Add all `quadruples`, returning the stored ones.
    fn add_quadruples<I: IntoIterator<Item = Quadruple>>(
        &mut self,
        quadruples: I,
    ) -> Result<Vec<Quadruple>> {
        quadruples
            .into_iter()
            .map(|q| self.add_quadruple(q))
            .collect()
    }

    /// Remove the stored quad equal to `quad`, if any.
    ///
    /// Return whether a quad was removed.
    fn remove_quad(&mut self, quad: &Quad) -> Result<bool>;

    /// Remove all `quads`, returning how many were actually stored.
    fn remove_quads<'a, I: IntoIterator<Item = &'a Quad>>(&mut self, quads: I) -> Result<usize> {
        let mut removed = 0;
        for q in quads {
            if self.remove_quad(q)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// The stored quads matching the given components,
    /// where `None` matches anything.
    fn match_quads(
        &self,
        subject: Option<&Node>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
        graph: Option<&Node>,
    ) -> Vec<&Quad>;
}

/// A [`LowLevelStore`] keeping its quads in memory, in insertion order.
///
/// Quads are keyed by their [id](DataFactory::id),
/// and matched with [`DataFactory::equals`].
#[derive(Clone, Debug)]
pub struct MemoryStore<F = PlainFactory> {
    factory: F,
    quads: HashMap<Indexable, Quad>,
    order: Vec<Indexable>,
}

impl<F: DataFactory> MemoryStore<F> {
    /// An empty store owning `factory`.
    pub fn new(factory: F) -> Self {
        MemoryStore {
            factory,
            quads: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Mutable access to the factory of this store,
    /// e.g. to issue fresh blank nodes.
    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// The number of stored quads.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether this store is empty.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over the stored quads, in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            order: self.order.iter(),
            quads: &self.quads,
        }
    }

    /// Whether a quad equal to `quad` is stored.
    pub fn contains(&self, quad: &Quad) -> Result<bool> {
        Ok(self.quads.contains_key(&self.factory.id(quad)?))
    }
}

impl Default for MemoryStore<PlainFactory> {
    fn default() -> Self {
        MemoryStore::new(PlainFactory::new())
    }
}

impl<F: DataFactory> LowLevelStore for MemoryStore<F> {
    type Factory = F;

    fn factory(&self) -> &F {
        &self.factory
    }

    fn add_quad(&mut self, quad: Quad) -> Result<Quad> {
        let id = self.factory.id(&quad)?;
        if let Some(stored) = self.quads.get(&id) {
            return Ok(stored.clone());
        }
        log::debug!("adding quad {}", id);
        self.order.push(id.clone());
        self.quads.insert(id, quad.clone());
        Ok(quad)
    }

    fn remove_quad(&mut self, quad: &Quad) -> Result<bool> {
        let id = self.factory.id(quad)?;
        if self.quads.remove(&id).is_none() {
            log::warn!("removing quad {} which is not in the store", id);
            return Ok(false);
        }
        log::debug!("removing quad {}", id);
        self.order.retain(|i| i != &id);
        Ok(true)
    }

    fn match_quads(
        &self,
        subject: Option<&Node>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
        graph: Option<&Node>,
    ) -> Vec<&Quad> {
        let f = &self.factory;
        self.iter()
            .filter(|q| {
                subject.map_or(true, |s| f.equals(q.subject(), s))
                    && predicate.map_or(true, |p| f.equals(q.predicate(), p))
                    && object.map_or(true, |o| f.equals(q.object(), o))
                    && graph.map_or(true, |g| f.equals(q.graph(), g))
            })
            .collect()
    }
}

impl<'a, F: DataFactory> IntoIterator for &'a MemoryStore<F> {
    type Item = &'a Quad;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the quads of a [`MemoryStore`], in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    order: std::slice::Iter<'a, Indexable>,
    quads: &'a HashMap<Indexable, Quad>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Quad;

    fn next(&mut self) -> Option<Self::Item> {
        let quads = self.quads;
        self.order.find_map(|id| quads.get(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.order.size_hint().1)
    }
}
