// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Growing Symbol/Next past the configured cap. Raised before any cell is written.
    #[error("symbol table full: need {needed} more cell(s), {used} of {limit} in use")]
    CapacityExceeded {
        needed: usize,
        used: usize,
        limit: usize,
    },

    /// A Switch or Next slot that is already linked, or a link to a bad cell.
    #[error("refusing to relink {0}")]
    AlreadyLinked(String),

    #[error("{word:?} does not start with an identifier character")]
    NotAnIdentifier { word: String },

    #[error("bad table snapshot: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
