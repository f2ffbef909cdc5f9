use async_trait::async_trait;

use crate::domain::{DomainError, LanguageMode, QueryResult, ServiceIdentifier};

/// Uniform query/example contract of an n-gram corpus.
///
/// Implementors own URL composition and transport. A non-200 answer is
/// reported as `Ok(None)` (or an empty list for examples); only transport
/// and decoding failures surface as errors.
#[async_trait]
pub trait NgramService: Send + Sync {
    /// The corpus this service is bound to.
    fn service(&self) -> ServiceIdentifier;

    /// Look up n-grams matching `text` in the given query language.
    async fn query_in(
        &self,
        text: &str,
        mode: LanguageMode,
    ) -> Result<Option<QueryResult>, DomainError>;

    /// Fetch example sentences containing `ngram`.
    async fn get_example(&self, ngram: &str) -> Result<Vec<String>, DomainError>;

    async fn query(&self, text: &str) -> Result<Option<QueryResult>, DomainError> {
        self.query_in(text, LanguageMode::En).await
    }
}
