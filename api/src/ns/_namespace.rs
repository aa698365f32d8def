use crate::term::NamedNode;

/// A custom namespace.
///
/// The [`get`](Namespace::get) method can be used to create a new IRI by concatenating a suffix to this namespace's IRI.
///
/// Like every IRI handled by this crate, the namespace IRI is not validated.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Namespace(String);

impl Namespace {
    /// Build a custom namespace based on the given IRI.
    pub fn new<T: Into<String>>(iri: T) -> Self {
        Namespace(iri.into())
    }

    /// Build an IRI by appending `suffix` to this namespace.
    pub fn get(&self, suffix: &str) -> NamedNode {
        NamedNode::new(format!("{}{}", self.0, suffix))
    }

    /// The IRI of this namespace, as a named node.
    pub fn as_named_node(&self) -> NamedNode {
        NamedNode::new(self.0.clone())
    }

    /// Return the suffix of `term` relative to this namespace,
    /// if `term` belongs to it.
    pub fn local_name<'a>(&self, term: &'a NamedNode) -> Option<&'a str> {
        term.value().strip_prefix(self.0.as_str())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NamedNode> for Namespace {
    fn from(other: NamedNode) -> Self {
        Namespace(other.value().to_string())
    }
}
