use super::*;

/// A term produced by another RDF implementation.
///
/// This trait lets values that are not built by this crate
/// take part in equality and serialization,
/// through [`Comparable::Foreign`].
/// Implementations only describe the RDF/JS shape of their terms;
/// nothing is assumed about their internal representation.
///
/// # Note to implementors
///
/// [`term_type`](ForeignTerm::term_type) returns the raw RDF/JS `termType`,
/// which may be one that this crate does not support (e.g. `"Variable"`),
/// or `None` for malformed values.
/// Such terms are never equal to anything but themselves,
/// and can not be serialized.
pub trait ForeignTerm: fmt::Debug {
    /// The RDF/JS `termType` of this term, if it has one.
    fn term_type(&self) -> Option<&str>;

    /// The IRI, identifier or lexical form of this term.
    fn value(&self) -> &str;

    /// The datatype IRI of this term, if it is a literal.
    fn datatype(&self) -> Option<&str> {
        None
    }

    /// The language tag of this term, if it is a language-tagged literal.
    fn language(&self) -> Option<&str> {
        None
    }

    /// Instance-level equality.
    ///
    /// Implementations providing their own comparison logic return `Some(_)`,
    /// which then takes precedence over structural equality
    /// whenever this term is the left operand.
    /// The default implementation returns `None`.
    fn equals(&self, other: Comparable<'_>) -> Option<bool> {
        let _ = other;
        None
    }
}
