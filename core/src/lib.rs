//! A plain implementation of the [`DataFactory`](ontologies_api::factory::DataFactory)
//! interface of [`ontologies_api`],
//! together with the algorithms it relies on:
//! * [coercion](native) of native Rust values into typed literals,
//! * [structural equality](cmp) across terms, quads, quadruples and foreign terms,
//! * [N-Quads](nq) rendering, used both for display and as the identity key of terms,
//!   and the corresponding parsers.
//!
//! It also provides a minimal in-memory [store](store) built on top of the factory.
//!
//! # Getting Started
//!
//! ```
//! use ontologies_core::PlainFactory;
//! use ontologies_core::api::prelude::*;
//!
//! let mut f = PlainFactory::new();
//! let q = f.quad(
//!     f.named_node("http://ex/s"),
//!     f.named_node("http://ex/p"),
//!     f.literal("v", ()),
//!     None,
//! );
//! assert_eq!(f.to_nq(&q).unwrap(), r#"<http://ex/s> <http://ex/p> "v" ."#);
//!
//! let b = f.blank_node(None);
//! assert_eq!(b.value(), "b1");
//! ```
#![deny(missing_docs)]

pub use ontologies_api as api;

pub mod cmp;
mod factory;
pub use factory::*;
pub mod native;
pub mod nq;
pub mod rio;
pub mod store;

#[cfg(test)]
mod test;
