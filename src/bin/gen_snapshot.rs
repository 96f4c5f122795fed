// src/bin/gen_snapshot.rs
// Build the reserved-word tables once and write them to JSON.
// Usage:
//   cargo run --bin gen_snapshot -- keywords.txt               # writes tables/reserved.json
//   cargo run --bin gen_snapshot -- keywords.txt /path/out.json

use std::{env, fs, path::Path};

use anyhow::Context;
use dynfsa::{
    fsa::{Machine, save_store_json},
    lexer::{load_reserved, read_text},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let input = args
        .next()
        .context("usage: gen_snapshot <reserved-words-file> [out.json]")?;
    let out = args
        .next()
        .unwrap_or_else(|| "tables/reserved.json".to_string());
    let out_path = Path::new(&out);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let text = read_text(Path::new(&input))?;
    let mut machine = Machine::new();
    let sum = load_reserved(&mut machine, &text)?;
    println!(
        "[gen_snapshot] {} keyword(s), {} duplicate(s), {} cell(s)",
        sum.inserted,
        sum.duplicates,
        machine.store().len()
    );

    save_store_json(out_path, machine.store())?;
    println!("[gen_snapshot] wrote {}", out_path.display());
    Ok(())
}
