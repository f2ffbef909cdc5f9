use serde::{Deserialize, Serialize};

/// A phrase and its corpus frequency, carried on the wire as `["phrase", 123]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ngram(pub String, pub u64);

impl Ngram {
    pub fn new(phrase: impl Into<String>, count: u64) -> Self {
        Self(phrase.into(), count)
    }

    pub fn phrase(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

/// Response of an n-gram lookup, kept exactly as the service returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: String,
    pub ngrams: Vec<Ngram>,
    pub total: u64,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// Share of `total` held by `ngram`, or 0 when the total is zero.
    pub fn ratio(&self, ngram: &Ngram) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        ngram.count() as f64 / self.total as f64
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExampleResponse {
    #[serde(default)]
    pub examples: Vec<String>,
}
