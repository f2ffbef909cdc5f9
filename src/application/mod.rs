//! # Application Layer
//!
//! Service contracts the connector layer implements.

pub mod interfaces;

pub use interfaces::*;
