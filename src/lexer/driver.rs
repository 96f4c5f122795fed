// src/lexer/driver.rs
// Reserved phase and scan phase over whole texts.

use std::fmt;

use super::words::{read_text, reserved_words, source_words};
use crate::{
    config::Config,
    error::Result,
    fsa::{Insertion, Machine, Marker, Outcome},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReservedSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Inserts every keyword in `text` as `Reserved`, in order.
pub fn load_reserved(machine: &mut Machine, text: &str) -> Result<ReservedSummary> {
    let mut sum = ReservedSummary::default();
    for word in reserved_words(text) {
        if !machine.alphabet().accepts(word) {
            log::warn!("skipping reserved word {word:?}: not an identifier");
            sum.skipped += 1;
            continue;
        }
        match machine.insert(word, Marker::Reserved)? {
            Insertion::Added(_) => sum.inserted += 1,
            Insertion::Duplicate(_) => sum.duplicates += 1,
        }
    }
    log::info!(
        "reserved phase: {} inserted, {} duplicate(s), {} skipped, {} cell(s) used",
        sum.inserted,
        sum.duplicates,
        sum.skipped,
        machine.store().len()
    );
    Ok(sum)
}

/// One classified word, rendered as the word plus its outcome suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub word: String,
    pub outcome: Outcome,
}

impl fmt::Display for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.word, self.outcome.suffix())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounts {
    pub reserved: usize,
    pub new: usize,
    pub repeated: usize,
    pub skipped: usize,
}

impl ScanCounts {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Reserved => self.reserved += 1,
            Outcome::New => self.new += 1,
            Outcome::Repeated => self.repeated += 1,
        }
    }
}

/// Raw input of the scan phase and its annotated counterpart, line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub input: String,
    pub lines: Vec<Vec<Annotated>>,
    pub counts: ScanCounts,
}

impl Transcript {
    pub fn render_line(line: &[Annotated]) -> String {
        line.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Annotated text, one line per input line.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&Self::render_line(line));
            out.push('\n');
        }
        out
    }

    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> + '_ {
        self.lines.iter().flatten().map(|a| a.outcome)
    }
}

/// Classifies every word of `text`, keeping line structure.
pub fn scan(machine: &mut Machine, text: &str) -> Result<Transcript> {
    let mut t = Transcript {
        input: text.to_string(),
        ..Transcript::default()
    };
    for line in text.lines() {
        let mut annotated = Vec::new();
        for word in source_words(line) {
            if !machine.alphabet().accepts(word) {
                log::debug!("skipping {word:?}: does not start an identifier");
                t.counts.skipped += 1;
                continue;
            }
            let outcome = machine.classify(word)?;
            t.counts.record(outcome);
            annotated.push(Annotated {
                word: word.to_string(),
                outcome,
            });
        }
        t.lines.push(annotated);
    }
    log::info!(
        "scan phase: {} line(s), {} reserved, {} new, {} repeated, {} skipped",
        t.lines.len(),
        t.counts.reserved,
        t.counts.new,
        t.counts.repeated,
        t.counts.skipped
    );
    Ok(t)
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Session {
    pub machine: Machine,
    pub reserved: ReservedSummary,
    pub transcript: Transcript,
}

/// Reads both inputs named by `cfg` and runs the two phases.
pub fn run(cfg: &Config) -> Result<Session> {
    let keywords = read_text(&cfg.reserved_path)?;
    let source = read_text(&cfg.source_path)?;

    let mut machine = Machine::with_limit(cfg.max_cells);
    let reserved = load_reserved(&mut machine, &keywords)?;
    let transcript = scan(&mut machine, &source)?;
    Ok(Session {
        machine,
        reserved,
        transcript,
    })
}
