use anyhow::{anyhow, Result};

use crate::application::NgramService;
use crate::domain::{LanguageMode, QueryResult};

use super::super::{Client, ClientFactory};

pub struct NgramController<'a> {
    factory: &'a ClientFactory,
}

impl<'a> NgramController<'a> {
    pub fn new(factory: &'a ClientFactory) -> Self {
        Self { factory }
    }

    pub async fn query(&self, text: String, service: String, zh: bool) -> Result<String> {
        let client = self.ngram_client(&service)?;
        let mode = if zh { LanguageMode::Zh } else { LanguageMode::En };

        match client.query_in(&text, mode).await? {
            Some(result) => Ok(self.format_query_result(&result)),
            None => Ok(format!("No results for \"{text}\".")),
        }
    }

    pub async fn example(&self, ngram: String, service: String) -> Result<String> {
        let client = self.ngram_client(&service)?;
        let examples = client.get_example(&ngram).await?;
        Ok(self.format_examples(&ngram, &examples))
    }

    fn ngram_client(&self, service: &str) -> Result<Box<dyn NgramService>> {
        match self.factory.get_client(service) {
            Some(Client::Ngram(client)) => Ok(Box::new(client)),
            Some(Client::PhraseBook(_)) => Err(anyhow!(
                "service {service} is a phrase book; use the `phrase` and `sentence` commands"
            )),
            None => Err(anyhow!("unsupported service: {service}")),
        }
    }

    fn format_query_result(&self, result: &QueryResult) -> String {
        if result.is_empty() {
            return format!("No results for \"{}\".", result.query);
        }

        let mut output = format!("{} (total: {})\n\n", result.query, result.total);
        for ngram in &result.ngrams {
            output.push_str(&format!(
                "{:>12}  {:>6.2}%  {}\n",
                ngram.count(),
                result.ratio(ngram) * 100.0,
                ngram.phrase()
            ));
        }
        output
    }

    fn format_examples(&self, ngram: &str, examples: &[String]) -> String {
        if examples.is_empty() {
            return format!("No examples for \"{ngram}\".");
        }

        examples
            .iter()
            .enumerate()
            .map(|(i, sentence)| format!("{}. {}", i + 1, sentence))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
