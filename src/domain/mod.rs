//! # Domain Layer
//!
//! Service identifiers, response models and the error type.
//! This layer is independent of the HTTP transport.

mod error;
pub mod models;

pub use error::*;
pub use models::*;
