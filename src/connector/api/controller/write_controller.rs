use anyhow::Result;

use crate::domain::{CheckedSentence, EditSuggestion, ErrorType, WritingSuggestion};

use super::super::ClientFactory;

pub struct WriteController<'a> {
    factory: &'a ClientFactory,
}

impl<'a> WriteController<'a> {
    pub fn new(factory: &'a ClientFactory) -> Self {
        Self { factory }
    }

    pub async fn suggest(&self, text: String) -> Result<String> {
        let client = self.factory.write_client()?;
        match client.suggest_pattern(&text).await? {
            Some(suggestion) => self.format_suggestion(&suggestion),
            None => Ok("No suggestions.".to_string()),
        }
    }

    pub async fn assess(&self, text: String) -> Result<String> {
        let client = self.factory.write_client()?;
        Ok(match client.assess_essay(&text).await? {
            Some(level) => format!("CEFR level: {level}"),
            None => "No assessment available.".to_string(),
        })
    }

    pub async fn check(&self, text: String) -> Result<String> {
        let client = self.factory.write_client()?;
        let sentences = client.check_essay(&text).await?;
        Ok(self.format_check(&sentences))
    }

    pub async fn edits(
        &self,
        ngram: String,
        error_type: ErrorType,
        index: Option<usize>,
    ) -> Result<String> {
        let client = self.factory.write_client()?;
        Ok(match client.suggest_edits(&ngram, error_type, index).await? {
            Some(suggestion) => self.format_edits(&suggestion),
            None => format!("No edit suggestions for \"{ngram}\"."),
        })
    }

    fn format_suggestion(&self, suggestion: &WritingSuggestion) -> Result<String> {
        let mut output = format!("Text: {}\n", suggestion.text);
        if let Some(headword) = &suggestion.headword {
            output.push_str(&format!(
                "Headword: {} ({})\n",
                headword,
                suggestion.pos.as_deref().unwrap_or("?")
            ));
        }
        output.push_str("Patterns:\n");
        output.push_str(&serde_json::to_string_pretty(&suggestion.patterns)?);
        Ok(output)
    }

    fn format_check(&self, sentences: &[CheckedSentence]) -> String {
        if sentences.is_empty() {
            return "No sentences checked.".to_string();
        }

        let mut output = String::new();
        for (i, sentence) in sentences.iter().enumerate() {
            output.push_str(&format!(
                "{}. [{:.3}] {}\n",
                i + 1,
                sentence.score,
                sentence.tokens.join(" ")
            ));
            for (token, tag) in sentence.flagged_tokens() {
                output.push_str(&format!("   {tag}: {token}\n"));
            }
        }
        output
    }

    fn format_edits(&self, suggestion: &EditSuggestion) -> String {
        let mut output = format!("Suggested query: {}\n", suggestion.query);
        for ngram in &suggestion.ngrams {
            output.push_str(&format!("{:>12}  {}\n", ngram.count(), ngram.phrase()));
        }
        output
    }
}
