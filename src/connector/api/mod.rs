pub mod controller;
pub mod factory;
pub mod router;

pub use factory::{Client, ClientFactory, LinggleConfig};
pub use router::Router;
