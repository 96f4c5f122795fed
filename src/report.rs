// src/report.rs
// Console dump of the tables followed by the scanned input and annotated output.

use std::fmt::{self, Write};

use crate::{
    fsa::{ALPHABET, SymbolIndex, Store},
    lexer::Transcript,
};

const LABEL_WIDTH: usize = 8;

fn push_row<I, T>(out: &mut String, label: &str, cells: I) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: fmt::Display,
{
    let mut line = String::new();
    write!(line, "{label:<LABEL_WIDTH$}")?;
    for c in cells {
        write!(line, "{c:>4}")?;
    }
    out.push_str(line.trim_end());
    out.push('\n');
    Ok(())
}

fn slot(at: Option<SymbolIndex>) -> String {
    at.map(|i| i.to_string()).unwrap_or_default()
}

/// Switch table: alphabet characters in rows of `width`, each above its run starts.
pub fn switch_table(store: &Store, width: usize) -> Result<String, fmt::Error> {
    let width = width.max(1);
    let mut out = String::from("SWITCH:\n");
    for (chars, slots) in ALPHABET.chunks(width).zip(store.switch().chunks(width)) {
        out.push('\n');
        push_row(&mut out, "", chars)?;
        push_row(&mut out, "switch:", slots.iter().map(|&s| slot(s)))?;
    }
    Ok(out)
}

/// Symbol/Next tables over every used cell, padded out to a full row.
pub fn symbol_next_table(store: &Store, width: usize) -> Result<String, fmt::Error> {
    let width = width.max(1);
    let rows = store.len().div_ceil(width).max(1);
    let mut out = String::from("SYMBOL & NEXT:\n");
    for row in 0..rows {
        let lo = row * width;
        let hi = lo + width;
        out.push('\n');
        push_row(&mut out, "", lo..hi)?;
        push_row(
            &mut out,
            "symbol:",
            (lo..hi).map(|i| {
                store
                    .symbols()
                    .get(i)
                    .map(ToString::to_string)
                    .unwrap_or_default()
            }),
        )?;
        push_row(
            &mut out,
            "next:",
            (lo..hi).map(|i| store.nexts().get(i).copied().map(slot).unwrap_or_default()),
        )?;
    }
    Ok(out)
}

/// The full console report.
pub fn render(store: &Store, transcript: &Transcript, width: usize) -> Result<String, fmt::Error> {
    let mut out = switch_table(store, width)?;
    out.push('\n');
    out.push_str(&symbol_next_table(store, width)?);
    write!(out, "\nInput:\n{}", transcript.input)?;
    if !transcript.input.ends_with('\n') {
        out.push('\n');
    }
    write!(out, "\nOutput:\n\n{}", transcript.output())?;
    Ok(out)
}
