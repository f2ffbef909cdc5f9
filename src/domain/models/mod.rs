mod correction;
mod essay;
mod ngram;
mod service;

pub use correction::*;
pub use essay::*;
pub use ngram::*;
pub use service::*;
