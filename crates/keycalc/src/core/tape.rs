//! Calculation tape
//!
//! A bounded log of completed `=` evaluations, shown next to the display.
//! The tape is read-only from the engine's point of view: nothing recorded
//! here ever flows back into the calculator state.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The operation as entered, e.g. `3 + 4`
    pub expression: String,
    /// The rendered result, e.g. `7`
    pub result: String,
}

impl TapeEntry {
    /// Creates a new tape entry
    #[must_use]
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    /// Returns a formatted display string
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded queue of tape entries, oldest dropped first
#[derive(Debug, Clone)]
pub struct Tape {
    entries: VecDeque<TapeEntry>,
    capacity: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    /// Default maximum tape length
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Creates a tape with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates a tape holding at most `capacity` entries
    ///
    /// A capacity of zero disables recording.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest when full
    pub fn push(&mut self, entry: TapeEntry) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records an evaluation
    pub fn record(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.push(TapeEntry::new(expression, result));
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first
    pub fn iter(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter()
    }

    /// Iterates newest first
    pub fn iter_rev(&self) -> impl Iterator<Item = &TapeEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&TapeEntry> {
        self.entries.back()
    }

    /// Returns the last n entries (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&TapeEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Serializes the tape to JSON (oldest first)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// One `expression = result` line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(TapeEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
