use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::Ngram;
use crate::domain::DomainError;

/// Continuation patterns suggested for an incomplete text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritingSuggestion {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub headword: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default)]
    pub patterns: Vec<Value>,
    /// Fields the service returns beyond the documented ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One tokenized sentence with its per-token DIRC tags and sentence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedSentence {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
    pub score: f64,
}

impl CheckedSentence {
    pub fn new(tokens: Vec<String>, tags: Vec<String>, score: f64) -> Self {
        Self {
            tokens,
            tags,
            score,
        }
    }

    /// Tokens whose tag marks an error (anything other than `O`).
    pub fn flagged_tokens(&self) -> Vec<(&str, &str)> {
        self.tokens
            .iter()
            .zip(&self.tags)
            .filter(|(_, tag)| tag.as_str() != "O")
            .map(|(token, tag)| (token.as_str(), tag.as_str()))
            .collect()
    }
}

/// Essay-checking body: three parallel arrays, one entry per sentence.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EssayCheckResponse {
    #[serde(default)]
    pub sen_arry: Vec<Vec<String>>,
    #[serde(default)]
    pub tag_arry: Vec<Vec<String>>,
    #[serde(default)]
    pub score_arry: Vec<f64>,
}

impl EssayCheckResponse {
    /// Zips the arrays; the result is as long as the shortest one.
    pub fn into_sentences(self) -> Vec<CheckedSentence> {
        self.sen_arry
            .into_iter()
            .zip(self.tag_arry)
            .zip(self.score_arry)
            .map(|((tokens, tags), score)| CheckedSentence::new(tokens, tags, score))
            .collect()
    }
}

/// Essay-assessment body. The service spells the field `cerf`.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentResponse {
    #[serde(default)]
    pub cerf: Option<String>,
    #[serde(default)]
    pub cefr: Option<String>,
}

impl AssessmentResponse {
    pub fn into_level(self) -> Option<String> {
        self.cerf.or(self.cefr)
    }
}

/// Suggested Linggle query for a problematic n-gram, with its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSuggestion {
    pub query: String,
    #[serde(default)]
    pub ngrams: Vec<Ngram>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Delete,
    Insert,
    Replace,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Delete => "delete",
            ErrorType::Insert => "insert",
            ErrorType::Replace => "replace",
        }
    }
}

impl FromStr for ErrorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "delete" => Ok(ErrorType::Delete),
            "insert" => Ok(ErrorType::Insert),
            "replace" => Ok(ErrorType::Replace),
            other => Err(DomainError::invalid_input(format!(
                "unknown error type: {other} (expected delete, insert or replace)"
            ))),
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
