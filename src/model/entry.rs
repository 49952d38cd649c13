use thiserror::Error;

use crate::model::order::{SortOrder, adjacent_swap_sort};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("entry {index} ({name}) has {found} scores, expected {expected}")]
    RaggedScores {
        index: usize,
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("{names} names but {rows} score rows")]
    LengthMismatch { names: usize, rows: usize },
    #[error("entry {index} ({name}) has no scores")]
    NoSubjects { index: usize, name: String },
}

/// One student's name, per-subject scores and derived total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub scores: Vec<u32>,
    pub total: u32,
}

impl Entry {
    /// The total is left at zero until `RankingTable::compute_totals` runs.
    pub fn new(name: impl Into<String>, scores: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            scores,
            total: 0,
        }
    }

    pub fn score_sum(&self) -> u32 {
        self.scores
            .iter()
            .fold(0u32, |acc, &s| acc.saturating_add(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankingTable {
    entries: Vec<Entry>,
    n_subjects: usize,
}

impl RankingTable {
    pub fn new(entries: Vec<Entry>) -> Result<Self, TableError> {
        let n_subjects = entries.first().map(|e| e.scores.len()).unwrap_or(0);
        for (index, entry) in entries.iter().enumerate() {
            if entry.scores.is_empty() {
                return Err(TableError::NoSubjects {
                    index,
                    name: entry.name.clone(),
                });
            }
            if entry.scores.len() != n_subjects {
                return Err(TableError::RaggedScores {
                    index,
                    name: entry.name.clone(),
                    expected: n_subjects,
                    found: entry.scores.len(),
                });
            }
        }
        Ok(Self {
            entries,
            n_subjects,
        })
    }

    /// Builds a table from a name list and a matching list of score rows.
    pub fn from_parallel(names: &[&str], marks: &[&[u32]]) -> Result<Self, TableError> {
        if names.len() != marks.len() {
            return Err(TableError::LengthMismatch {
                names: names.len(),
                rows: marks.len(),
            });
        }
        let entries = names
            .iter()
            .zip(marks.iter())
            .map(|(name, row)| Entry::new(*name, row.to_vec()))
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn n_subjects(&self) -> usize {
        self.n_subjects
    }

    pub fn compute_totals(&mut self) {
        for entry in &mut self.entries {
            entry.total = entry.score_sum();
        }
    }

    pub fn sort_descending_by_total(&mut self) {
        self.sort_by_total(SortOrder::Descending);
    }

    pub fn sort_ascending_by_total(&mut self) {
        self.sort_by_total(SortOrder::Ascending);
    }

    pub fn sort_by_total(&mut self, order: SortOrder) {
        adjacent_swap_sort(&mut self.entries, order, |e| e.total);
    }

    pub fn marks(&self) -> Vec<&[u32]> {
        self.entries.iter().map(|e| e.scores.as_slice()).collect()
    }

    pub fn totals(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.total).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/entry.rs"]
mod tests;
