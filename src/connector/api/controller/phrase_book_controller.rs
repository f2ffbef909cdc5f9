use anyhow::Result;
use serde_json::Value;

use super::super::ClientFactory;

pub struct PhraseBookController<'a> {
    factory: &'a ClientFactory,
}

impl<'a> PhraseBookController<'a> {
    pub fn new(factory: &'a ClientFactory) -> Self {
        Self { factory }
    }

    pub async fn phrase(&self, phrase: String, offset: usize) -> Result<String> {
        let client = self.factory.phrase_book_client()?;
        let body = client.query(&phrase, offset).await?;
        self.format_body(body, &format!("No phrase-book entries for \"{phrase}\"."))
    }

    pub async fn sentence(&self, source: String, target: String) -> Result<String> {
        let client = self.factory.phrase_book_client()?;
        let body = client.get_example(&source, &target).await?;
        self.format_body(
            body,
            &format!("No sentence pairs for \"{source}\" / \"{target}\"."),
        )
    }

    fn format_body(&self, body: Option<Value>, empty: &str) -> Result<String> {
        match body {
            Some(value) => Ok(serde_json::to_string_pretty(&value)?),
            None => Ok(empty.to_string()),
        }
    }
}
