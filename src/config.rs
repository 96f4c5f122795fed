// src/config.rs
// Run configuration: positional paths plus DYNFSA_* environment variables.

use std::{env, path::PathBuf};

pub const DEFAULT_RESERVED_PATH: &str = "inputfile1.txt";
pub const DEFAULT_SOURCE_PATH: &str = "inputfile2.txt";
pub const DEFAULT_ROW_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reserved_path: PathBuf,
    pub source_path: PathBuf,
    /// Hard cap on Symbol/Next cells; `None` grows without bound.
    pub max_cells: Option<usize>,
    /// Columns per row in the table dumps.
    pub row_width: usize,
    /// Where to write a JSON snapshot of the final tables, if anywhere.
    pub snapshot: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reserved_path: PathBuf::from(DEFAULT_RESERVED_PATH),
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            max_cells: None,
            row_width: DEFAULT_ROW_WIDTH,
            snapshot: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    /// `args` excludes the program name; `var` looks up environment variables.
    pub fn resolve<I, F>(args: I, var: F) -> Self
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();
        if let Some(p) = args.next() {
            cfg.reserved_path = PathBuf::from(p);
        }
        if let Some(p) = args.next() {
            cfg.source_path = PathBuf::from(p);
        }

        cfg.max_cells = parse_var(&var, "DYNFSA_MAX_CELLS");
        cfg.row_width = parse_var(&var, "DYNFSA_ROW_WIDTH")
            .filter(|&w: &usize| {
                if w == 0 {
                    log::warn!("DYNFSA_ROW_WIDTH must be positive, using {DEFAULT_ROW_WIDTH}");
                }
                w > 0
            })
            .unwrap_or(DEFAULT_ROW_WIDTH);
        cfg.snapshot = var("DYNFSA_SNAPSHOT")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        cfg
    }
}

fn parse_var<F>(var: &F, key: &str) -> Option<usize>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = var(key)?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("ignoring {key}={raw:?}: {e}");
            None
        }
    }
}
