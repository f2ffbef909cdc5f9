mod ngram_service;

pub use ngram_service::*;
