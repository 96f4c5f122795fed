// src/fsa/alphabet.rs
use hashbrown::HashMap;

/// Characters allowed to start a word, in Switch order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '_', '$',
];

pub const ALPHABET_LEN: usize = 54;

/// Bijection between leading characters and Switch slots `0..54`.
#[derive(Debug, Clone)]
pub struct Alphabet {
    index: HashMap<char, usize>,
}

impl Alphabet {
    pub fn new() -> Self {
        let index = ALPHABET.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { index }
    }

    #[inline]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Whether `word` may be fed to the engine at all.
    pub fn accepts(&self, word: &str) -> bool {
        word.chars().next().and_then(|c| self.index_of(c)).is_some()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}
