// Insertion-ordered frequency table.
//
// Entries live in a Vec so that iteration follows first-seen order, with a
// HashMap from word to slot for O(1) lookups. Sorting reorders the Vec in
// place with a stable sort and rebuilds the index.

use std::collections::HashMap;

use tracing::info;

use super::traits::{SortOutcome, WordFrequencies};
use crate::error::{Result, WordCloudError};

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<(String, u32)>, // (word, count) in insertion or ranked order
    index: HashMap<String, usize>, // word to slot in `entries`
    sorted: bool,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in their current order (insertion order until sorted).
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// Entries in ranked order. Fails unless the table has been sorted.
    pub fn ranked(&self) -> Result<&[(String, u32)]> {
        if self.entries.is_empty() {
            return Err(WordCloudError::EmptyTable);
        }
        if !self.sorted {
            return Err(WordCloudError::TableNotSorted);
        }
        Ok(&self.entries)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| *c as u64).sum()
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (slot, (word, _)) in self.entries.iter().enumerate() {
            self.index.insert(word.clone(), slot);
        }
    }
}

impl WordFrequencies for FrequencyTable {
    fn frequency(&self, word: &str) -> u32 {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    fn increment(&mut self, word: &str) {
        self.sorted = false;
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.sorted = false;
    }

    fn sort(&mut self) -> Result<SortOutcome> {
        if self.entries.is_empty() {
            return Err(WordCloudError::EmptyTable);
        }

        if self.sorted {
            info!(entries = self.entries.len(), "Frequency table is already sorted");
            return Ok(SortOutcome::AlreadySorted);
        }

        // slice::sort_by is stable, so ties keep first-seen order
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.rebuild_index();
        self.sorted = true;

        Ok(SortOutcome::Sorted)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn is_sorted(&self) -> bool {
        self.sorted
    }
}
