use serde::Serialize;
use tracing::debug;
use url::Url;

use super::endpoint::{join_segments, parse_base};
use super::http::{default_client, fetch_json};
use crate::domain::{
    CorrectionEngine, CorrectionResponse, DomainError, LmCorrectionResponse, LmThresholds,
};

pub const DEFAULT_NMT_URL: &str = "https://whisky.nlplab.cc";
pub const DEFAULT_SMT_URL: &str = "http://ryze.nlplab.cc:9988";
pub const DEFAULT_LM_URL: &str = "http://ryze.nlplab.cc:9998";

const ORIGIN: &str = "GecClient";

#[derive(Serialize)]
struct LmRequest<'a> {
    sent: &'a str,
    threshold: f64,
    threshold_insert: f64,
}

/// Grammatical error correction over three independent backends.
#[derive(Debug, Clone)]
pub struct GecClient {
    client: reqwest::Client,
    nmt_url: Url,
    smt_url: Url,
    lm_url: Url,
}

impl GecClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_urls(
            default_client(),
            DEFAULT_NMT_URL,
            DEFAULT_SMT_URL,
            DEFAULT_LM_URL,
        )
    }

    pub fn with_base_urls(
        client: reqwest::Client,
        nmt_url: &str,
        smt_url: &str,
        lm_url: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            client,
            nmt_url: parse_base(nmt_url)?,
            smt_url: parse_base(smt_url)?,
            lm_url: parse_base(lm_url)?,
        })
    }

    pub fn nmt_request_url(&self, text: &str) -> Result<Url, DomainError> {
        let mut url = join_segments(&self.nmt_url, &["translate", ""])?;
        url.query_pairs_mut().append_pair("text", text);
        Ok(url)
    }

    pub fn smt_request_url(&self, text: &str) -> Result<Url, DomainError> {
        join_segments(&self.smt_url, &["correct", text])
    }

    pub fn lm_request_url(&self) -> Result<Url, DomainError> {
        join_segments(&self.lm_url, &["correct"])
    }

    /// Correct `text` with the neural translation model.
    pub async fn nmt_correct(&self, text: &str) -> Result<Option<String>, DomainError> {
        let url = self.nmt_request_url(text)?;
        debug!("{ORIGIN}: GET {url}");
        let response: Option<CorrectionResponse> = fetch_json(self.client.get(url), ORIGIN).await?;
        Ok(response.map(|r| r.result))
    }

    /// Correct `text` with the statistical translation model.
    pub async fn smt_correct(&self, text: &str) -> Result<Option<String>, DomainError> {
        let url = self.smt_request_url(text)?;
        debug!("{ORIGIN}: GET {url}");
        let response: Option<CorrectionResponse> = fetch_json(self.client.get(url), ORIGIN).await?;
        Ok(response.map(|r| r.result))
    }

    /// Correct one sentence with the language model.
    pub async fn lm_correct(
        &self,
        sentence: &str,
        thresholds: LmThresholds,
    ) -> Result<Option<String>, DomainError> {
        let url = self.lm_request_url()?;
        debug!(
            "{ORIGIN}: POST {url} threshold={} threshold_insert={}",
            thresholds.threshold, thresholds.threshold_insert
        );
        let request = LmRequest {
            sent: sentence,
            threshold: thresholds.threshold,
            threshold_insert: thresholds.threshold_insert,
        };
        let response: Option<LmCorrectionResponse> =
            fetch_json(self.client.post(url).json(&request), ORIGIN).await?;
        Ok(response.map(LmCorrectionResponse::into_corrected))
    }

    /// Dispatch to the backend named by `engine`. Thresholds only apply to [`CorrectionEngine::Lm`].
    pub async fn correct(
        &self,
        engine: CorrectionEngine,
        text: &str,
        thresholds: LmThresholds,
    ) -> Result<Option<String>, DomainError> {
        match engine {
            CorrectionEngine::Nmt => self.nmt_correct(text).await,
            CorrectionEngine::Smt => self.smt_correct(text).await,
            CorrectionEngine::Lm => self.lm_correct(text, thresholds).await,
        }
    }
}
