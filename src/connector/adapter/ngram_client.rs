use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::endpoint::{escape_slashes, join_segments, parse_base, query_path, render_template};
use super::http::{default_client, fetch_json};
use crate::application::NgramService;
use crate::domain::{DomainError, ExampleResponse, LanguageMode, QueryResult, ServiceIdentifier};

/// Production template for the n-gram hosts.
pub const DEFAULT_NGRAM_URL: &str = "https://{service}.linggle.com";

#[derive(Serialize)]
struct ExampleRequest<'a> {
    ngram: &'a str,
}

/// Client for one Linggle n-gram corpus (`www`, `coca`, `cna`, `udn`, `zh`, `x`).
///
/// Holds the corpus identifier and its resolved base URL. Nothing is mutated
/// after construction, so a client can be cloned and shared freely.
#[derive(Debug, Clone)]
pub struct NgramClient {
    client: reqwest::Client,
    service: ServiceIdentifier,
    base_url: Url,
}

impl NgramClient {
    /// Build a client against the production host for `service`.
    pub fn new(service: ServiceIdentifier) -> Result<Self, DomainError> {
        Self::with_template(default_client(), service, DEFAULT_NGRAM_URL)
    }

    /// Build a client from a base URL template, where `{service}` is replaced by
    /// the service key. Fails for the phrase-book identifier.
    pub fn with_template(
        client: reqwest::Client,
        service: ServiceIdentifier,
        template: &str,
    ) -> Result<Self, DomainError> {
        if !service.is_ngram() {
            return Err(DomainError::invalid_input(format!(
                "{service} is not an n-gram service"
            )));
        }
        let base_url = parse_base(&render_template(template, service))?;
        Ok(Self {
            client,
            service,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Request target for a query: `{base}/{query|equery}/{escaped text}`.
    pub fn query_url(&self, text: &str, mode: LanguageMode) -> Result<Url, DomainError> {
        let escaped = escape_slashes(text);
        join_segments(&self.base_url, &[query_path(self.service, mode), escaped.as_str()])
    }

    pub fn example_url(&self) -> Result<Url, DomainError> {
        join_segments(&self.base_url, &["example", ""])
    }

    fn origin(&self) -> String {
        format!("NgramClient[{}]", self.service)
    }
}

#[async_trait]
impl NgramService for NgramClient {
    fn service(&self) -> ServiceIdentifier {
        self.service
    }

    async fn query_in(
        &self,
        text: &str,
        mode: LanguageMode,
    ) -> Result<Option<QueryResult>, DomainError> {
        let url = self.query_url(text, mode)?;
        debug!("{}: GET {url}", self.origin());
        fetch_json(self.client.get(url), &self.origin()).await
    }

    async fn get_example(&self, ngram: &str) -> Result<Vec<String>, DomainError> {
        let url = self.example_url()?;
        debug!("{}: POST {url} ngram={ngram:?}", self.origin());
        let response: Option<ExampleResponse> = fetch_json(
            self.client.post(url).json(&ExampleRequest { ngram }),
            &self.origin(),
        )
        .await?;
        Ok(response.map(|r| r.examples).unwrap_or_default())
    }
}
