//! # Connector Layer
//!
//! HTTP adapters for the Linggle services and the client factory:
//! - N-gram corpora and the bilingual phrase book
//! - LinggleWrite essay services
//! - Grammatical error correction backends

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
