use serde::Serialize;
use tracing::debug;
use url::Url;

use super::endpoint::{join_segments, parse_base};
use super::http::{default_client, fetch_json};
use crate::domain::{
    AssessmentResponse, CheckedSentence, DomainError, EditSuggestion, ErrorType,
    EssayCheckResponse, WritingSuggestion,
};

pub const DEFAULT_WRITE_URL: &str = "https://f.linggle.com/api";

const ORIGIN: &str = "WriteClient";

#[derive(Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

/// The essay endpoints expect the field spelled `courpus`.
#[derive(Serialize)]
struct EssayRequest<'a> {
    courpus: &'a str,
}

/// Client for the LinggleWrite essay services: writing suggestions,
/// CEFR assessment, DIRC error checking and edit suggestions.
#[derive(Debug, Clone)]
pub struct WriteClient {
    client: reqwest::Client,
    base_url: Url,
}

impl WriteClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_url(default_client(), DEFAULT_WRITE_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url, DomainError> {
        join_segments(&self.base_url, &[name])
    }

    pub fn suggest_url(
        &self,
        ngram: &str,
        error_type: ErrorType,
        index: Option<usize>,
    ) -> Result<Url, DomainError> {
        let mut url = join_segments(&self.base_url, &["suggest", ngram])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("err_type", error_type.as_str());
            if let Some(index) = index {
                pairs.append_pair("index", &index.to_string());
            }
        }
        Ok(url)
    }

    /// Continuation patterns for an incomplete text.
    pub async fn suggest_pattern(
        &self,
        text: &str,
    ) -> Result<Option<WritingSuggestion>, DomainError> {
        let url = self.endpoint("write_call")?;
        debug!("{ORIGIN}: POST {url}");
        fetch_json(self.client.post(url).json(&TextRequest { text }), ORIGIN).await
    }

    /// CEFR level of an essay, e.g. `"A2"`.
    pub async fn assess_essay(&self, text: &str) -> Result<Option<String>, DomainError> {
        let url = self.endpoint("aes")?;
        debug!("{ORIGIN}: POST {url}");
        let response: Option<AssessmentResponse> =
            fetch_json(self.client.post(url).json(&EssayRequest { courpus: text }), ORIGIN)
                .await?;
        Ok(response.and_then(AssessmentResponse::into_level))
    }

    /// Per-sentence tokens, DIRC tags and scores for an essay.
    pub async fn check_essay(&self, text: &str) -> Result<Vec<CheckedSentence>, DomainError> {
        let url = self.endpoint("aes_dect")?;
        debug!("{ORIGIN}: POST {url}");
        let response: Option<EssayCheckResponse> =
            fetch_json(self.client.post(url).json(&EssayRequest { courpus: text }), ORIGIN)
                .await?;
        Ok(response
            .map(EssayCheckResponse::into_sentences)
            .unwrap_or_default())
    }

    /// Suggested Linggle query, and its results, for a problematic n-gram.
    pub async fn suggest_edits(
        &self,
        ngram: &str,
        error_type: ErrorType,
        index: Option<usize>,
    ) -> Result<Option<EditSuggestion>, DomainError> {
        let url = self.suggest_url(ngram, error_type, index)?;
        debug!("{ORIGIN}: GET {url}");
        fetch_json(self.client.get(url), ORIGIN).await
    }
}
