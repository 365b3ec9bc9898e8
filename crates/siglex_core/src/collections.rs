//! Collection types used by the lexer.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// An append-only, deduplicating string table.
///
/// Each distinct string gets the index of its first insertion. Indices never
/// change, so `index + category offset` is a stable lexeme code.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: IndexSet<String, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexSet::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Build a table from a fixed list, in order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.intern(entry);
        }
        table
    }

    /// Index of `text`, if present. Matching is exact and case-sensitive.
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<usize> {
        self.entries.get_index_of(text)
    }

    /// Return the index of `text`, appending it first if it is new.
    /// The flag is `true` when the entry was inserted by this call.
    pub fn intern(&mut self, text: &str) -> (usize, bool) {
        match self.lookup(text) {
            Some(index) => (index, false),
            None => self.entries.insert_full(text.to_owned()),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
