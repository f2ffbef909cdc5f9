use anyhow::Result;

use crate::domain::{CorrectionEngine, LmThresholds};

use super::super::ClientFactory;

pub struct CorrectController<'a> {
    factory: &'a ClientFactory,
}

impl<'a> CorrectController<'a> {
    pub fn new(factory: &'a ClientFactory) -> Self {
        Self { factory }
    }

    pub async fn correct(
        &self,
        text: String,
        engine: CorrectionEngine,
        thresholds: LmThresholds,
    ) -> Result<String> {
        let client = self.factory.gec_client()?;
        Ok(match client.correct(engine, &text, thresholds).await? {
            Some(corrected) if !corrected.is_empty() => corrected,
            _ => format!("No correction from {engine}."),
        })
    }
}
