use clap::Subcommand;

use crate::domain::{CorrectionEngine, ErrorType};

#[derive(Subcommand)]
pub enum Commands {
    /// Look up n-grams, e.g. `discuss ?about the issue`
    Query {
        text: String,

        #[arg(short, long, default_value = "www")]
        service: String,

        /// Query the bilingual corpus in Chinese (only meaningful with `--service x`)
        #[arg(long)]
        zh: bool,
    },

    /// Example sentences for an n-gram
    Example {
        ngram: String,

        #[arg(short, long, default_value = "www")]
        service: String,
    },

    /// Look up a phrase in the bilingual phrase book
    Phrase {
        phrase: String,

        #[arg(long, default_value = "0")]
        offset: usize,
    },

    /// Sentence pairs for a Chinese/English phrase pair
    Sentence { source: String, target: String },

    /// Continuous writing patterns for an incomplete text
    Suggest { text: String },

    /// CEFR level of an essay
    Assess { text: String },

    /// Per-token error tags of an essay
    Check { text: String },

    /// Edit suggestions for a problematic n-gram
    Edits {
        ngram: String,

        /// delete, insert or replace
        #[arg(short, long)]
        error_type: ErrorType,

        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Grammatical error correction
    Correct {
        text: String,

        /// nmt, smt or lm
        #[arg(short, long, default_value = "lm")]
        engine: CorrectionEngine,

        #[arg(long, default_value = "0.97")]
        threshold: f64,

        #[arg(long, default_value = "0.96")]
        threshold_insert: f64,
    },
}
