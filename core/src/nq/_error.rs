use ontologies_api::FactoryError;
use rio_turtle::TurtleError;
use thiserror::Error;

/// An error raised while parsing an N-Quads document.
#[derive(Debug, Error)]
pub enum NqError {
    /// The document is not valid N-Quads.
    #[error(transparent)]
    Syntax(#[from] TurtleError),
    /// A parsed term can not be represented by this data model.
    #[error("Unsupported term in N-Quads document: {0}")]
    Term(#[from] FactoryError),
}
