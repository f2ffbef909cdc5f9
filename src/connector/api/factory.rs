use tracing::{debug, warn};

use crate::connector::adapter::{
    default_client, GecClient, NgramClient, PhraseBookClient, WriteClient, DEFAULT_LM_URL,
    DEFAULT_NGRAM_URL, DEFAULT_NMT_URL, DEFAULT_PHRASE_BOOK_URL, DEFAULT_SMT_URL,
    DEFAULT_WRITE_URL,
};
use crate::domain::{DomainError, ServiceIdentifier};

/// Base URLs of every upstream service.
///
/// | Variable                  | Default                          |
/// |---------------------------|----------------------------------|
/// | `LINGGLE_NGRAM_URL`       | `https://{service}.linggle.com`  |
/// | `LINGGLE_PHRASE_BOOK_URL` | `https://bi.linggle.com`         |
/// | `LINGGLE_WRITE_URL`       | `https://f.linggle.com/api`      |
/// | `LINGGLE_NMT_URL`         | `https://whisky.nlplab.cc`       |
/// | `LINGGLE_SMT_URL`         | `http://ryze.nlplab.cc:9988`     |
/// | `LINGGLE_LM_URL`          | `http://ryze.nlplab.cc:9998`     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinggleConfig {
    /// Template for the n-gram hosts; `{service}` is replaced by the service key.
    pub ngram_url: String,
    pub phrase_book_url: String,
    pub write_url: String,
    pub nmt_url: String,
    pub smt_url: String,
    pub lm_url: String,
}

impl Default for LinggleConfig {
    fn default() -> Self {
        Self {
            ngram_url: DEFAULT_NGRAM_URL.to_string(),
            phrase_book_url: DEFAULT_PHRASE_BOOK_URL.to_string(),
            write_url: DEFAULT_WRITE_URL.to_string(),
            nmt_url: DEFAULT_NMT_URL.to_string(),
            smt_url: DEFAULT_SMT_URL.to_string(),
            lm_url: DEFAULT_LM_URL.to_string(),
        }
    }
}

impl LinggleConfig {
    /// Production endpoints, each overridable from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: String| lookup(key).unwrap_or(default);
        Self {
            ngram_url: pick("LINGGLE_NGRAM_URL", defaults.ngram_url),
            phrase_book_url: pick("LINGGLE_PHRASE_BOOK_URL", defaults.phrase_book_url),
            write_url: pick("LINGGLE_WRITE_URL", defaults.write_url),
            nmt_url: pick("LINGGLE_NMT_URL", defaults.nmt_url),
            smt_url: pick("LINGGLE_SMT_URL", defaults.smt_url),
            lm_url: pick("LINGGLE_LM_URL", defaults.lm_url),
        }
    }

    /// Point every service at a single host, e.g. a local mock server.
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            ngram_url: base.clone(),
            phrase_book_url: base.clone(),
            write_url: base.clone(),
            nmt_url: base.clone(),
            smt_url: base.clone(),
            lm_url: base,
        }
    }
}

/// A client produced by [`ClientFactory::get_client`].
#[derive(Debug, Clone)]
pub enum Client {
    Ngram(NgramClient),
    PhraseBook(PhraseBookClient),
}

impl Client {
    pub fn service(&self) -> ServiceIdentifier {
        match self {
            Client::Ngram(client) => crate::application::NgramService::service(client),
            Client::PhraseBook(client) => client.service(),
        }
    }

    pub fn as_ngram(&self) -> Option<&NgramClient> {
        match self {
            Client::Ngram(client) => Some(client),
            Client::PhraseBook(_) => None,
        }
    }

    pub fn as_phrase_book(&self) -> Option<&PhraseBookClient> {
        match self {
            Client::PhraseBook(client) => Some(client),
            Client::Ngram(_) => None,
        }
    }
}

/// Builds clients by service identifier, sharing one HTTP connection pool.
pub struct ClientFactory {
    http: reqwest::Client,
    config: LinggleConfig,
}

impl Default for ClientFactory {
    fn default() -> Self {
        Self::new(LinggleConfig::default())
    }
}

impl ClientFactory {
    pub fn new(config: LinggleConfig) -> Self {
        Self {
            http: default_client(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(LinggleConfig::from_env())
    }

    pub fn config(&self) -> &LinggleConfig {
        &self.config
    }

    /// Client for `identifier`, or `None` when the identifier is not supported.
    ///
    /// A configured base URL that does not parse also yields `None`; the cause
    /// is logged.
    pub fn get_client(&self, identifier: &str) -> Option<Client> {
        let service = match identifier.parse::<ServiceIdentifier>() {
            Ok(service) => service,
            Err(e) => {
                debug!("ClientFactory: {e}");
                return None;
            }
        };

        match self.build(service) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("ClientFactory: cannot build client for {service}: {e}");
                None
            }
        }
    }

    fn build(&self, service: ServiceIdentifier) -> Result<Client, DomainError> {
        if service.is_ngram() {
            NgramClient::with_template(self.http.clone(), service, &self.config.ngram_url)
                .map(Client::Ngram)
        } else {
            PhraseBookClient::with_base_url(self.http.clone(), &self.config.phrase_book_url)
                .map(Client::PhraseBook)
        }
    }

    /// N-gram client for `identifier`; fails for unknown or phrase-book identifiers.
    pub fn ngram_client(&self, identifier: &str) -> Result<NgramClient, DomainError> {
        let service: ServiceIdentifier = identifier.parse()?;
        NgramClient::with_template(self.http.clone(), service, &self.config.ngram_url)
    }

    pub fn phrase_book_client(&self) -> Result<PhraseBookClient, DomainError> {
        PhraseBookClient::with_base_url(self.http.clone(), &self.config.phrase_book_url)
    }

    pub fn write_client(&self) -> Result<WriteClient, DomainError> {
        WriteClient::with_base_url(self.http.clone(), &self.config.write_url)
    }

    pub fn gec_client(&self) -> Result<GecClient, DomainError> {
        GecClient::with_base_urls(
            self.http.clone(),
            &self.config.nmt_url,
            &self.config.smt_url,
            &self.config.lm_url,
        )
    }
}
