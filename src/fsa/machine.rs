// src/fsa/machine.rs
// Insert / classify over the linked Switch-Symbol-Next tables.
//
// A walk starts at Switch[first char] and compares the rest of the word
// cell by cell. A matching character advances both the cell and the word;
// anything else follows Next without consuming input. Every cell therefore
// sits at a fixed depth in the words that reach it, so a terminal marker
// reached with the word fully consumed identifies exactly that word.

use super::{
    alphabet::Alphabet,
    store::{Cell, Marker, Store, SymbolIndex},
};
use crate::error::{Error, Result};

/// Result of classifying one scanned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A keyword registered during the reserved phase.
    Reserved,
    /// First time this identifier has been seen; it is now registered.
    New,
    /// Identifier registered by an earlier `classify`.
    Repeated,
}

impl Outcome {
    /// Character appended to the word in annotated output.
    pub fn suffix(self) -> char {
        match self {
            Outcome::Reserved => '*',
            Outcome::New => '?',
            Outcome::Repeated => '@',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A fresh run was written starting here.
    Added(SymbolIndex),
    /// The word was already present with this marker; nothing was written.
    Duplicate(Marker),
}

/// Where a missing word's run gets hooked in.
#[derive(Debug, Clone, Copy)]
enum Attach {
    Switch(usize),
    Next(SymbolIndex),
}

#[derive(Debug, Clone, Copy)]
enum Walk {
    Found(Marker),
    /// Not stored. `from` is the byte offset of the unconsumed suffix.
    Absent { attach: Attach, from: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Machine {
    alphabet: Alphabet,
    store: Store,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<usize>) -> Self {
        Self::from_store(Store::with_limit(limit))
    }

    pub fn from_store(store: Store) -> Self {
        Self {
            alphabet: Alphabet::new(),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Registers `word` with a terminal `marker`.
    ///
    /// Re-inserting a stored word writes nothing and reports the marker it
    /// already has. A failed insert leaves the tables untouched.
    pub fn insert(&mut self, word: &str, marker: Marker) -> Result<Insertion> {
        match self.walk(word)? {
            Walk::Found(existing) => {
                if existing != marker {
                    log::warn!(
                        "{word:?} already stored as {existing:?}, keeping it over {marker:?}"
                    );
                } else {
                    log::debug!("duplicate insert of {word:?} ({marker:?})");
                }
                Ok(Insertion::Duplicate(existing))
            }
            Walk::Absent { attach, from } => {
                let start = self.append_run(word, attach, from, marker)?;
                Ok(Insertion::Added(start))
            }
        }
    }

    /// Looks `word` up, registering it as a pending identifier when absent.
    pub fn classify(&mut self, word: &str) -> Result<Outcome> {
        let outcome = match self.walk(word)? {
            Walk::Found(Marker::Reserved) => Outcome::Reserved,
            Walk::Found(Marker::Pending) => Outcome::Repeated,
            Walk::Absent { attach, from } => {
                self.append_run(word, attach, from, Marker::Pending)?;
                Outcome::New
            }
        };
        log::trace!("classify {word:?} -> {outcome:?}");
        Ok(outcome)
    }

    /// Read-only lookup: the stored marker for `word`, if any.
    pub fn lookup(&self, word: &str) -> Result<Option<Marker>> {
        Ok(match self.walk(word)? {
            Walk::Found(m) => Some(m),
            Walk::Absent { .. } => None,
        })
    }

    fn walk(&self, word: &str) -> Result<Walk> {
        let mut chars = word.char_indices();
        let slot = chars
            .next()
            .and_then(|(_, c)| self.alphabet.index_of(c))
            .ok_or_else(|| Error::NotAnIdentifier {
                word: word.to_string(),
            })?;

        let Some(mut p) = self.store.switch_slot(slot) else {
            let from = chars.next().map_or(word.len(), |(i, _)| i);
            return Ok(Walk::Absent {
                attach: Attach::Switch(slot),
                from,
            });
        };

        let mut rest = chars.peekable();
        loop {
            match (rest.peek(), self.store.symbol_at(p)) {
                (None, Cell::End(m)) => return Ok(Walk::Found(m)),
                (Some(&(_, c)), Cell::Char(s)) if s == c => {
                    // A Char cell is never last in its run.
                    rest.next();
                    p = p.succ();
                    continue;
                }
                _ => {}
            }
            match self.store.next_at(p) {
                Some(alt) => p = alt,
                None => {
                    let from = rest.peek().map_or(word.len(), |&(i, _)| i);
                    return Ok(Walk::Absent {
                        attach: Attach::Next(p),
                        from,
                    });
                }
            }
        }
    }

    fn append_run(
        &mut self,
        word: &str,
        attach: Attach,
        from: usize,
        marker: Marker,
    ) -> Result<SymbolIndex> {
        let suffix = &word[from..];
        self.store.reserve(suffix.chars().count() + 1)?;

        let mut cells = suffix
            .chars()
            .map(Cell::Char)
            .chain(std::iter::once(Cell::End(marker)));
        let start = self
            .store
            .append(cells.next().unwrap_or(Cell::End(marker)))?;
        for cell in cells {
            self.store.append(cell)?;
        }

        match attach {
            Attach::Switch(slot) => self.store.set_switch(slot, start)?,
            Attach::Next(at) => self.store.set_next(at, start)?,
        }
        log::debug!("stored {word:?} as {marker:?} at {start} (via {attach:?})");
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_reserved(words: &[&str]) -> Machine {
        let mut m = Machine::new();
        for w in words {
            m.insert(w, Marker::Reserved).unwrap();
        }
        m
    }

    #[test]
    fn first_word_gets_its_own_run() {
        let m = with_reserved(&["int"]);
        let s = m.store();
        let i = m.alphabet().index_of('i').unwrap();
        assert_eq!(s.switch_slot(i).map(SymbolIndex::idx), Some(0));
        assert_eq!(
            s.symbols(),
            &[Cell::Char('n'), Cell::Char('t'), Cell::End(Marker::Reserved)]
        );
        assert!(s.nexts().iter().all(Option::is_none));
    }

    #[test]
    fn divergence_links_next_to_the_unconsumed_suffix() {
        let m = with_reserved(&["int", "if", "in"]);
        let s = m.store();
        // int -> n t * ; if diverges at 'n' ; in diverges at 't'
        assert_eq!(
            s.symbols(),
            &[
                Cell::Char('n'),
                Cell::Char('t'),
                Cell::End(Marker::Reserved),
                Cell::Char('f'),
                Cell::End(Marker::Reserved),
                Cell::End(Marker::Reserved),
            ]
        );
        let nexts: Vec<Option<usize>> = s.nexts().iter().map(|n| n.map(SymbolIndex::idx)).collect();
        assert_eq!(nexts, vec![Some(3), Some(5), None, None, None, None]);
    }

    #[test]
    fn scan_marks_new_then_repeated() {
        let mut m = with_reserved(&["int", "class"]);
        let got: Vec<Outcome> = ["int", "x", "class", "x"]
            .iter()
            .map(|w| m.classify(w).unwrap())
            .collect();
        assert_eq!(
            got,
            vec![
                Outcome::Reserved,
                Outcome::New,
                Outcome::Reserved,
                Outcome::Repeated
            ]
        );
    }

    #[test]
    fn keywords_never_repeat() {
        let mut m = with_reserved(&["while"]);
        for _ in 0..5 {
            assert_eq!(m.classify("while").unwrap(), Outcome::Reserved);
        }
    }

    #[test]
    fn prefix_keywords_stay_distinct() {
        let mut m = with_reserved(&["for", "form"]);
        for w in ["for", "form", "for"] {
            assert_eq!(m.classify(w).unwrap(), Outcome::Reserved, "{w}");
        }
        assert_eq!(m.classify("fo").unwrap(), Outcome::New);
        assert_eq!(m.classify("forms").unwrap(), Outcome::New);
        assert_eq!(m.classify("fo").unwrap(), Outcome::Repeated);
        assert_eq!(m.classify("form").unwrap(), Outcome::Reserved);
    }

    #[test]
    fn extensions_of_keywords_are_identifiers() {
        let mut m = with_reserved(&["int"]);
        assert_eq!(m.classify("intx").unwrap(), Outcome::New);
        assert_eq!(m.classify("in").unwrap(), Outcome::New);
        assert_eq!(m.classify("i").unwrap(), Outcome::New);
        assert_eq!(m.classify("int").unwrap(), Outcome::Reserved);
        assert_eq!(m.classify("intx").unwrap(), Outcome::Repeated);
        assert_eq!(m.classify("in").unwrap(), Outcome::Repeated);
        assert_eq!(m.classify("i").unwrap(), Outcome::Repeated);
    }

    #[test]
    fn single_char_words_round_trip_through_switch() {
        let mut m = Machine::new();
        assert_eq!(m.classify("x").unwrap(), Outcome::New);
        assert_eq!(m.store().symbols(), &[Cell::End(Marker::Pending)]);
        assert_eq!(m.classify("x").unwrap(), Outcome::Repeated);
        assert_eq!(m.classify("xy").unwrap(), Outcome::New);
        assert_eq!(m.classify("x").unwrap(), Outcome::Repeated);
        assert_eq!(m.classify("xy").unwrap(), Outcome::Repeated);
    }

    #[test]
    fn duplicate_insert_writes_nothing() {
        let mut m = with_reserved(&["for"]);
        let before = m.store().clone();
        assert_eq!(
            m.insert("for", Marker::Reserved).unwrap(),
            Insertion::Duplicate(Marker::Reserved)
        );
        assert_eq!(m.store(), &before);
        m.insert("form", Marker::Reserved).unwrap();
        assert_eq!(m.classify("for").unwrap(), Outcome::Reserved);
        assert_eq!(m.classify("form").unwrap(), Outcome::Reserved);
    }

    #[test]
    fn duplicate_with_other_marker_keeps_the_stored_one() {
        let mut m = Machine::new();
        m.classify("foo").unwrap();
        assert_eq!(
            m.insert("foo", Marker::Reserved).unwrap(),
            Insertion::Duplicate(Marker::Pending)
        );
        assert_eq!(m.classify("foo").unwrap(), Outcome::Repeated);
    }

    #[test]
    fn lookup_does_not_register() {
        let m = with_reserved(&["do"]);
        assert_eq!(m.lookup("do").unwrap(), Some(Marker::Reserved));
        assert_eq!(m.lookup("done").unwrap(), None);
        assert_eq!(m.store().len(), 2);
    }

    #[test]
    fn unmapped_words_are_rejected() {
        let mut m = Machine::new();
        assert!(matches!(
            m.classify("9abc"),
            Err(Error::NotAnIdentifier { .. })
        ));
        assert!(matches!(
            m.insert("", Marker::Reserved),
            Err(Error::NotAnIdentifier { .. })
        ));
        assert!(m.store().is_empty());
    }

    #[test]
    fn capacity_overflow_leaves_tables_untouched() {
        let mut m = Machine::with_limit(Some(6));
        m.insert("int", Marker::Reserved).unwrap(); // 3 cells
        let before = m.store().clone();
        // "iffy" needs f f y * = 4 more cells
        let err = m.insert("iffy", Marker::Reserved).unwrap_err();
        assert!(matches!(
            err,
            Error::CapacityExceeded {
                needed: 4,
                used: 3,
                limit: 6
            }
        ));
        assert_eq!(m.store(), &before);
        assert_eq!(m.classify("int").unwrap(), Outcome::Reserved);
        // "if" needs f * = 2 cells and fits
        assert_eq!(m.classify("if").unwrap(), Outcome::New);
        assert_eq!(m.store().len(), 5);
    }
}
