// src/dev/generator.rs
// Random identifier streams shared by fuzz_fsa and the tests. A narrow
// alphabet and short words keep prefixes colliding so Next chains get deep.

use hashbrown::HashSet;
use rand::Rng;

use crate::fsa::Outcome;

const LEAD: &[u8] = b"abcfiIx_$";
const TAIL: &[u8] = b"abfinorx0_$";

pub fn gen_word<R: Rng>(rng: &mut R, max_len: usize) -> String {
    let len = rng.random_range(1..=max_len.max(1));
    let mut s = String::with_capacity(len);
    s.push(LEAD[rng.random_range(0..LEAD.len())] as char);
    for _ in 1..len {
        s.push(TAIL[rng.random_range(0..TAIL.len())] as char);
    }
    s
}

/// `count` words, drawn with repetition from a pool so repeats are common.
pub fn gen_words<R: Rng>(rng: &mut R, count: usize, max_len: usize) -> Vec<String> {
    let pool: Vec<String> = (0..count.div_ceil(3).max(1))
        .map(|_| gen_word(rng, max_len))
        .collect();
    (0..count)
        .map(|_| {
            if rng.random_bool(0.5) {
                pool[rng.random_range(0..pool.len())].clone()
            } else {
                gen_word(rng, max_len)
            }
        })
        .collect()
}

/// Reference classifier built on plain hash sets.
#[derive(Debug, Default)]
pub struct Oracle {
    reserved: HashSet<String>,
    seen: HashSet<String>,
}

impl Oracle {
    pub fn with_reserved<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            reserved: words.into_iter().map(str::to_string).collect(),
            seen: HashSet::new(),
        }
    }

    pub fn classify(&mut self, word: &str) -> Outcome {
        if self.reserved.contains(word) {
            Outcome::Reserved
        } else if self.seen.insert(word.to_string()) {
            Outcome::New
        } else {
            Outcome::Repeated
        }
    }
}
