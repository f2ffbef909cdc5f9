use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Selects which upstream corpus or service a client targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIdentifier {
    /// Google Web 1T
    Www,
    /// Corpus of Contemporary American English
    Coca,
    /// Central News Agency
    Cna,
    /// United Daily News
    Udn,
    Zh,
    /// Bilingual Linggle
    X,
    /// Bilingual phrase book
    Bi,
}

impl ServiceIdentifier {
    pub const ALL: [ServiceIdentifier; 7] = [
        ServiceIdentifier::Www,
        ServiceIdentifier::Coca,
        ServiceIdentifier::Cna,
        ServiceIdentifier::Udn,
        ServiceIdentifier::Zh,
        ServiceIdentifier::X,
        ServiceIdentifier::Bi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceIdentifier::Www => "www",
            ServiceIdentifier::Coca => "coca",
            ServiceIdentifier::Cna => "cna",
            ServiceIdentifier::Udn => "udn",
            ServiceIdentifier::Zh => "zh",
            ServiceIdentifier::X => "x",
            ServiceIdentifier::Bi => "bi",
        }
    }

    /// Whether the identifier is served by the n-gram query/example API.
    pub fn is_ngram(&self) -> bool {
        !matches!(self, ServiceIdentifier::Bi)
    }
}

impl FromStr for ServiceIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::not_found(format!("unknown service identifier: {s}")))
    }
}

impl std::fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Query language for the bilingual (`x`) corpus. Ignored by every other service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    #[default]
    En,
    Zh,
}

impl LanguageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageMode::En => "en",
            LanguageMode::Zh => "zh",
        }
    }
}

impl std::fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
