//! The [N-Quads] text form of terms and quads.
//!
//! The rendering of a single term or statement serves both as display
//! and as the identity key of terms
//! (see [`DataFactory::id`](ontologies_api::factory::DataFactory::id)).
//! It is parsed back by [`parse_id`].
//! Full documents are parsed by [`parse_str`] and [`parse_bufread`],
//! relying on the [`rio_turtle`] parser.
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
mod _document;
pub use _document::*;
mod _error;
pub use _error::*;
mod _id;
pub use _id::*;
mod _render;
pub use _render::*;
