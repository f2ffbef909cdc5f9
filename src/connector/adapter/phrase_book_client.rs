use serde_json::Value;
use tracing::debug;
use url::Url;

use super::endpoint::{join_segments, parse_base};
use super::http::{default_client, fetch_json};
use crate::domain::{DomainError, ServiceIdentifier};

pub const DEFAULT_PHRASE_BOOK_URL: &str = "https://bi.linggle.com";

/// Client for the bilingual phrase book (`bi`).
///
/// The phrase book answers with its own JSON layout, which is returned as-is.
#[derive(Debug, Clone)]
pub struct PhraseBookClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PhraseBookClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_url(default_client(), DEFAULT_PHRASE_BOOK_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
        })
    }

    pub fn service(&self) -> ServiceIdentifier {
        ServiceIdentifier::Bi
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn phrase_url(&self, phrase: &str, offset: usize) -> Result<Url, DomainError> {
        let mut url = join_segments(&self.base_url, &["phrase", phrase])?;
        url.query_pairs_mut()
            .append_pair("offset", &offset.to_string());
        Ok(url)
    }

    pub fn sentence_url(&self, source: &str, target: &str) -> Result<Url, DomainError> {
        let mut url = join_segments(&self.base_url, &["sentence"])?;
        url.query_pairs_mut()
            .append_pair("ch", source)
            .append_pair("en", target);
        Ok(url)
    }

    /// Look up phrase translations, paginated by `offset`.
    pub async fn query(&self, phrase: &str, offset: usize) -> Result<Option<Value>, DomainError> {
        let url = self.phrase_url(phrase, offset)?;
        debug!("PhraseBookClient: GET {url}");
        fetch_json(self.client.get(url), "PhraseBookClient").await
    }

    /// Fetch sentence pairs for a `(source, target)` phrase pair.
    pub async fn get_example(
        &self,
        source: &str,
        target: &str,
    ) -> Result<Option<Value>, DomainError> {
        let url = self.sentence_url(source, target)?;
        debug!("PhraseBookClient: GET {url}");
        fetch_json(self.client.get(url), "PhraseBookClient").await
    }
}
