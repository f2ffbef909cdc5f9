use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Grammatical-error-correction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionEngine {
    /// Neural machine translation
    Nmt,
    /// Statistical machine translation
    Smt,
    /// Language model
    Lm,
}

impl CorrectionEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectionEngine::Nmt => "nmt",
            CorrectionEngine::Smt => "smt",
            CorrectionEngine::Lm => "lm",
        }
    }
}

impl FromStr for CorrectionEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nmt" => Ok(CorrectionEngine::Nmt),
            "smt" => Ok(CorrectionEngine::Smt),
            "lm" => Ok(CorrectionEngine::Lm),
            other => Err(DomainError::invalid_input(format!(
                "unknown correction engine: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for CorrectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confidence thresholds for the language-model corrector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmThresholds {
    pub threshold: f64,
    pub threshold_insert: f64,
}

impl LmThresholds {
    pub fn new(threshold: f64, threshold_insert: f64) -> Self {
        Self {
            threshold,
            threshold_insert,
        }
    }
}

impl Default for LmThresholds {
    fn default() -> Self {
        Self {
            threshold: 0.97,
            threshold_insert: 0.96,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CorrectionResponse {
    #[serde(default)]
    pub result: String,
}

/// The LM service answers with `[original, corrected]`.
#[derive(Debug, Deserialize)]
pub(crate) struct LmCorrectionResponse {
    #[serde(default)]
    pub result: Vec<String>,
}

impl LmCorrectionResponse {
    pub fn into_corrected(self) -> String {
        self.result.into_iter().nth(1).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = LmThresholds::default();
        assert_eq!(t.threshold, 0.97);
        assert_eq!(t.threshold_insert, 0.96);
    }

    #[test]
    fn test_lm_response_takes_second_element() {
        let parsed: LmCorrectionResponse =
            serde_json::from_str(r#"{"result": ["He go home.", "He goes home."]}"#).unwrap();
        assert_eq!(parsed.into_corrected(), "He goes home.");
    }

    #[test]
    fn test_lm_response_short_array_is_empty() {
        let parsed: LmCorrectionResponse =
            serde_json::from_str(r#"{"result": ["He go home."]}"#).unwrap();
        assert_eq!(parsed.into_corrected(), "");
    }

    #[test]
    fn test_correction_response_defaults_to_empty() {
        let parsed: CorrectionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.result, "");
    }
}
