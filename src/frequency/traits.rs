// Frequency table trait: the capability set the pipeline depends on.
//
// The tokenizer only ever increments, the consumers only ever read ranked
// entries. Keeping the contract as a trait lets tests substitute a recording
// table without touching the scanner.

use crate::error::Result;

/// Result of a successful `sort()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Entries were reordered into ranked order.
    Sorted,
    /// The table was already ranked; nothing changed.
    AlreadySorted,
}

/// Trait for a word → count table with a ranked order.
pub trait WordFrequencies {
    /// Count for `word`, or 0 if it has never been seen.
    fn frequency(&self, word: &str) -> u32;

    /// Add one occurrence of `word`. Invalidates any previous ranking.
    fn increment(&mut self, word: &str);

    /// Remove every entry and forget the ranking.
    fn clear(&mut self);

    /// Rank entries by descending count, keeping insertion order among ties.
    ///
    /// Fails with `EmptyTable` when there is nothing to rank.
    fn sort(&mut self) -> Result<SortOutcome>;

    fn len(&self) -> usize;

    fn is_sorted(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
