// src/fsa/store.rs
// Switch / Symbol / Next tables. Cells are append-only: nothing is ever
// overwritten, and a Next slot is linked at most once.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::alphabet::ALPHABET_LEN;
use crate::error::{Error, Result};

/// Position in the Symbol/Next tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolIndex(u32);

impl SymbolIndex {
    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn succ(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Classification stored in the last cell of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    Reserved,
    Pending,
}

impl Marker {
    pub fn symbol(self) -> char {
        match self {
            Marker::Reserved => '*',
            Marker::Pending => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Char(char),
    End(Marker),
}

impl Cell {
    pub fn is_end(self) -> bool {
        matches!(self, Cell::End(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Char(c) => write!(f, "{c}"),
            Cell::End(m) => write!(f, "{}", m.symbol()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    switch: [Option<SymbolIndex>; ALPHABET_LEN],
    symbol: Vec<Cell>,
    next: Vec<Option<SymbolIndex>>,
    limit: Option<usize>,
}

impl Store {
    /// Empty store that grows without bound.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Empty store that refuses to grow past `limit` cells when one is given.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            switch: [None; ALPHABET_LEN],
            symbol: Vec::new(),
            next: Vec::new(),
            limit,
        }
    }

    pub(crate) fn from_parts(
        switch: [Option<SymbolIndex>; ALPHABET_LEN],
        symbol: Vec<Cell>,
        next: Vec<Option<SymbolIndex>>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            switch,
            symbol,
            next,
            limit,
        }
    }

    /// Run start for alphabet slot `i`; `None` when empty or `i` is not a slot.
    #[inline]
    pub fn switch_slot(&self, i: usize) -> Option<SymbolIndex> {
        self.switch.get(i).copied().flatten()
    }

    /// Links an empty Switch slot. Slots are linked at most once.
    pub(crate) fn set_switch(&mut self, i: usize, at: SymbolIndex) -> Result<()> {
        if at.idx() >= self.symbol.len() {
            return Err(Error::AlreadyLinked(format!("switch[{i}] -> {at} (out of bounds)")));
        }
        let Some(slot) = self.switch.get_mut(i) else {
            return Err(Error::AlreadyLinked(format!("switch[{i}] (no such slot)")));
        };
        if let Some(old) = *slot {
            return Err(Error::AlreadyLinked(format!("switch[{i}] -> {old}")));
        }
        *slot = Some(at);
        Ok(())
    }

    /// Checks that `cells` more cells fit, and pre-allocates them.
    pub(crate) fn reserve(&mut self, cells: usize) -> Result<()> {
        let used = self.symbol.len();
        if let Some(limit) = self.limit {
            if used + cells > limit {
                return Err(Error::CapacityExceeded {
                    needed: cells,
                    used,
                    limit,
                });
            }
        }
        self.symbol.reserve(cells);
        self.next.reserve(cells);
        Ok(())
    }

    /// Writes `cell` at the free cursor and advances it.
    pub(crate) fn append(&mut self, cell: Cell) -> Result<SymbolIndex> {
        self.reserve(1)?;
        let at = u32::try_from(self.symbol.len()).map_err(|_| Error::CapacityExceeded {
            needed: 1,
            used: self.symbol.len(),
            limit: u32::MAX as usize,
        })?;
        self.symbol.push(cell);
        self.next.push(None);
        Ok(SymbolIndex(at))
    }

    /// Links an empty Next slot to a later run. Slots are linked at most once.
    pub(crate) fn set_next(&mut self, at: SymbolIndex, to: SymbolIndex) -> Result<()> {
        if to.idx() >= self.symbol.len() || to <= at {
            return Err(Error::AlreadyLinked(format!("next[{at}] -> {to} (not a later run)")));
        }
        let Some(slot) = self.next.get_mut(at.idx()) else {
            return Err(Error::AlreadyLinked(format!("next[{at}] (out of bounds)")));
        };
        if let Some(old) = *slot {
            return Err(Error::AlreadyLinked(format!("next[{at}] -> {old}")));
        }
        *slot = Some(to);
        Ok(())
    }

    /// # Panics
    ///
    /// If `at` was not handed out by this store.
    #[inline]
    pub fn symbol_at(&self, at: SymbolIndex) -> Cell {
        self.symbol[at.idx()]
    }

    /// # Panics
    ///
    /// If `at` was not handed out by this store.
    #[inline]
    pub fn next_at(&self, at: SymbolIndex) -> Option<SymbolIndex> {
        self.next[at.idx()]
    }

    pub fn len(&self) -> usize {
        self.symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbol.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn switch(&self) -> &[Option<SymbolIndex>; ALPHABET_LEN] {
        &self.switch
    }

    pub fn symbols(&self) -> &[Cell] {
        &self.symbol
    }

    pub fn nexts(&self) -> &[Option<SymbolIndex>] {
        &self.next
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
