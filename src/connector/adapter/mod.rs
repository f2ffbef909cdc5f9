pub mod endpoint;
mod gec_client;
mod http;
mod ngram_client;
mod phrase_book_client;
mod write_client;

pub(crate) use http::default_client;

pub use gec_client::*;
pub use ngram_client::*;
pub use phrase_book_client::*;
pub use write_client::*;
