// src/main.rs
// Usage: dynfsa [reserved-words-file] [source-file]
//   DYNFSA_MAX_CELLS=300   cap the Symbol/Next tables
//   DYNFSA_ROW_WIDTH=20    columns per dump row
//   DYNFSA_SNAPSHOT=path   also write the final tables as JSON

use anyhow::Context;
use dynfsa::{config::Config, fsa::save_store_json, lexer, report};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::from_env();
    log::debug!("{cfg:?}");

    let session = lexer::run(&cfg).with_context(|| {
        format!(
            "running {} over {}",
            cfg.reserved_path.display(),
            cfg.source_path.display()
        )
    })?;

    let out = report::render(session.machine.store(), &session.transcript, cfg.row_width)
        .context("formatting report")?;
    print!("{out}");

    if let Some(path) = &cfg.snapshot {
        save_store_json(path, session.machine.store())
            .with_context(|| format!("writing snapshot {}", path.display()))?;
    }
    Ok(())
}
