use anyhow::Result;

use crate::domain::LmThresholds;
use crate::Commands;

use super::controller::{CorrectController, NgramController, PhraseBookController, WriteController};
use super::factory::ClientFactory;

pub struct Router<'a> {
    ngram_controller: NgramController<'a>,
    phrase_book_controller: PhraseBookController<'a>,
    write_controller: WriteController<'a>,
    correct_controller: CorrectController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(factory: &'a ClientFactory) -> Self {
        Self {
            ngram_controller: NgramController::new(factory),
            phrase_book_controller: PhraseBookController::new(factory),
            write_controller: WriteController::new(factory),
            correct_controller: CorrectController::new(factory),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Query { text, service, zh } => {
                self.ngram_controller.query(text, service, zh).await
            }
            Commands::Example { ngram, service } => {
                self.ngram_controller.example(ngram, service).await
            }
            Commands::Phrase { phrase, offset } => {
                self.phrase_book_controller.phrase(phrase, offset).await
            }
            Commands::Sentence { source, target } => {
                self.phrase_book_controller.sentence(source, target).await
            }
            Commands::Suggest { text } => self.write_controller.suggest(text).await,
            Commands::Assess { text } => self.write_controller.assess(text).await,
            Commands::Check { text } => self.write_controller.check(text).await,
            Commands::Edits {
                ngram,
                error_type,
                index,
            } => self.write_controller.edits(ngram, error_type, index).await,
            Commands::Correct {
                text,
                engine,
                threshold,
                threshold_insert,
            } => {
                self.correct_controller
                    .correct(text, engine, LmThresholds::new(threshold, threshold_insert))
                    .await
            }
        }
    }
}
