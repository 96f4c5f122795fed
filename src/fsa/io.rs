// src/fsa/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use super::{
    alphabet::ALPHABET_LEN,
    store::{Cell, Store, SymbolIndex},
};
use crate::error::{Error, Result};

// -------------------- JSON (de)serialization --------------------

#[serde_as]
#[derive(Serialize, Deserialize)]
struct StoreDisk {
    #[serde_as(as = "[_; 54]")]
    switch: [Option<SymbolIndex>; ALPHABET_LEN],
    symbol: Vec<Cell>,
    next: Vec<Option<SymbolIndex>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl From<&Store> for StoreDisk {
    fn from(s: &Store) -> Self {
        Self {
            switch: *s.switch(),
            symbol: s.symbols().to_vec(),
            next: s.nexts().to_vec(),
            limit: s.limit(),
        }
    }
}

impl StoreDisk {
    fn check(&self) -> std::result::Result<(), String> {
        let n = self.symbol.len();
        if self.next.len() != n {
            return Err(format!(
                "symbol has {n} cells but next has {}",
                self.next.len()
            ));
        }
        if let Some(limit) = self.limit {
            if n > limit {
                return Err(format!("{n} cells exceed the limit of {limit}"));
            }
        }
        if let Some(last) = self.symbol.last() {
            if !last.is_end() {
                return Err(format!("cell {} is {last:?}, not a terminal marker", n - 1));
            }
        }
        for (slot, at) in self.switch.iter().enumerate() {
            if let Some(at) = at {
                if at.idx() >= n {
                    return Err(format!("switch[{slot}] -> {at} is out of bounds"));
                }
            }
        }
        for (i, at) in self.next.iter().enumerate() {
            if let Some(at) = at {
                if at.idx() >= n || at.idx() <= i {
                    return Err(format!("next[{i}] -> {at} does not point at a later run"));
                }
            }
        }
        Ok(())
    }

    fn into_store(self) -> Result<Store> {
        self.check().map_err(Error::Snapshot)?;
        Ok(Store::from_parts(self.switch, self.symbol, self.next, self.limit))
    }
}

pub fn save_store_json(path: &Path, store: &Store) -> Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    write_store_json(&mut w, store)?;
    w.flush()?;
    log::info!("saved {} cell(s) to {}", store.len(), path.display());
    Ok(())
}

pub fn write_store_json<W: Write>(w: W, store: &Store) -> Result<()> {
    serde_json::to_writer_pretty(w, &StoreDisk::from(store))
        .map_err(|e| Error::Snapshot(format!("failed to encode tables: {e}")))
}

pub fn load_store_json_bytes(data: &[u8]) -> Result<Store> {
    serde_json::from_slice::<StoreDisk>(data)
        .map_err(|e| Error::Snapshot(format!("failed to parse tables JSON: {e}")))?
        .into_store()
}

pub fn load_store_json(path: &Path) -> Result<Store> {
    let data = std::fs::read(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    load_store_json_bytes(&data)
}
