//! # Display Indexes
//!
//! Users address entries by 1-based position in the MRU order: `1` is the
//! active entry, `2` the one used before it, and so on. The store itself works
//! with 0-based positions; this module is the only place that converts.

use crate::error::{PromptBoxError, Result};
use crate::model::PromptEntry;
use std::str::FromStr;

/// A user-facing, 1-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    pub fn position(&self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = PromptBoxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().trim_end_matches('.').parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(PromptBoxError::Api(format!("Invalid index format: {}", s))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub index: DisplayIndex,
    pub entry: PromptEntry,
    pub is_active: bool,
}

/// Pairs every entry with its display index, in MRU order.
pub fn index_entries(entries: &[PromptEntry]) -> Vec<DisplayEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(position, entry)| DisplayEntry {
            index: DisplayIndex::from_position(position),
            entry: entry.clone(),
            is_active: position == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_index() {
        assert_eq!("1".parse::<DisplayIndex>().unwrap().position(), 0);
        assert_eq!("3.".parse::<DisplayIndex>().unwrap().position(), 2);
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("-1".parse::<DisplayIndex>().is_err());
        assert!("p1".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let idx = DisplayIndex::from_position(4);
        assert_eq!(idx.to_string(), "5");
    }

    #[test]
    fn test_index_entries_marks_first_active() {
        let entries = vec![
            PromptEntry::new("a", Utc::now()),
            PromptEntry::new("b", Utc::now()),
        ];
        let indexed = index_entries(&entries);
        assert_eq!(indexed.len(), 2);
        assert!(indexed[0].is_active);
        assert!(!indexed[1].is_active);
        assert_eq!(indexed[1].index.to_string(), "2");
        assert_eq!(indexed[1].entry.file_name, "b.txt");
    }
}
