pub mod correct_controller;
pub mod ngram_controller;
pub mod phrase_book_controller;
pub mod write_controller;

pub use correct_controller::CorrectController;
pub use ngram_controller::NgramController;
pub use phrase_book_controller::PhraseBookController;
pub use write_controller::WriteController;
