pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::NgramService;

pub use cli::Commands;

pub use connector::{
    Client, ClientFactory, GecClient, LinggleConfig, NgramClient, PhraseBookClient, Router,
    WriteClient,
};

pub use domain::{
    CheckedSentence, CorrectionEngine, DomainError, EditSuggestion, ErrorType, LanguageMode,
    LmThresholds, Ngram, QueryResult, ServiceIdentifier, WritingSuggestion,
};
