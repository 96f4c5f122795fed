// src/lexer/words.rs
// Splitting raw text into candidate words. Nothing here knows about the tables.

use std::path::Path;

use crate::error::{Error, Result};

#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Words of a reserved-word list: whitespace separated, any number per line.
pub fn reserved_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Words of one source line. Every maximal run of characters outside
/// `[A-Za-z0-9_$]` acts as a single delimiter, so `x=y+1;` gives `x`, `y`, `1`.
pub fn source_words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
