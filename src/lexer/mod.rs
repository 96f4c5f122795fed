pub mod driver;
pub mod words;

pub use driver::{
    Annotated, ReservedSummary, ScanCounts, Session, Transcript, load_reserved, run, scan,
};
pub use words::{read_text, reserved_words, source_words};
