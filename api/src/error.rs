//! Errors raised by [`DataFactory`](crate::factory::DataFactory) implementations.
use thiserror::Error;

/// Type alias for `Result` with default error `FactoryError`.
///
/// Can be used like `std::result::Result` as well.
pub type Result<T, E = FactoryError> = std::result::Result<T, E>;

/// This error is raised when building, copying, rendering or resolving a term fails.
///
/// All variants denote a violation of the caller's input contract;
/// none of them is transient.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// A date or timestamp given for literal coercion does not denote a representable instant.
    #[error("Invalid date given: {0}")]
    InvalidValue(String),
    /// A native value has no defined RDF literal mapping.
    #[error("Can't parse value '{0}'")]
    UnsupportedValue(String),
    /// A term outside the supported variant set reached serialization.
    #[error("Nonstandard termtype '{0}' given")]
    UnrenderableTerm(String),
    /// A term whose type can not be represented by this data model.
    #[error("The term type '{0}' is not supported by this data model")]
    UnsupportedTermType(String),
    /// An identifier is not the N-Quads rendering of a single term or statement.
    #[error("The identifier '{id}' could not be parsed: {reason}")]
    UnparseableId {
        /// The faulty identifier.
        id: String,
        /// What is wrong with `id`.
        reason: String,
    },
}

impl FactoryError {
    /// Build an [`UnparseableId`](FactoryError::UnparseableId) error.
    pub fn unparseable<T: ToString>(id: &str, reason: T) -> Self {
        FactoryError::UnparseableId {
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}
