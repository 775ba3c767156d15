//! Categorical encoding for cuisine labels.
//!
//! Codes are assigned by descending label frequency, so the most common
//! cuisine gets `0.0`. Equal frequencies are ordered alphabetically, which
//! keeps the mapping stable across loads of the same data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cuisine label with its code and how many records carry it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineEntry {
    pub label: String,
    pub code: f64,
    pub count: usize,
}

/// Bidirectional mapping between cuisine labels and numeric codes
#[derive(Debug, Clone, Default)]
pub struct CuisineIndex {
    entries: Vec<CuisineEntry>,
    by_label: HashMap<String, usize>,
}

impl CuisineIndex {
    /// Build the index from every label occurrence in the data set
    pub fn fit<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for label in labels {
            *counts.entry(label).or_insert(0) += 1;
        }

        let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let entries: Vec<CuisineEntry> = ordered
            .into_iter()
            .enumerate()
            .map(|(position, (label, count))| CuisineEntry {
                label: label.to_string(),
                code: position as f64,
                count,
            })
            .collect();

        let by_label = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.label.clone(), position))
            .collect();

        Self { entries, by_label }
    }

    /// Code for a label, if the label was seen at fit time
    pub fn encode(&self, label: &str) -> Option<f64> {
        self.by_label
            .get(label)
            .map(|&position| self.entries[position].code)
    }

    /// Label for a code, if the code is in range
    pub fn decode(&self, code: f64) -> Option<&str> {
        if code < 0.0 || code.fract() != 0.0 {
            return None;
        }
        self.entries
            .get(code as usize)
            .map(|entry| entry.label.as_str())
    }

    /// All entries, most frequent first
    pub fn entries(&self) -> &[CuisineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_frequency() {
        let index = CuisineIndex::fit(["Thai", "American", "Thai", "Italian", "Thai", "Italian"]);

        assert_eq!(index.encode("Thai"), Some(0.0));
        assert_eq!(index.encode("Italian"), Some(1.0));
        assert_eq!(index.encode("American"), Some(2.0));
        assert_eq!(index.encode("Sushi"), None);
    }

    #[test]
    fn test_ties_are_alphabetical() {
        let index = CuisineIndex::fit(["Mexican", "Chinese", "Mexican", "Chinese", "Greek"]);

        assert_eq!(index.decode(0.0), Some("Chinese"));
        assert_eq!(index.decode(1.0), Some("Mexican"));
        assert_eq!(index.decode(2.0), Some("Greek"));
        assert_eq!(index.decode(3.0), None);
        assert_eq!(index.decode(0.5), None);
    }

    #[test]
    fn test_entry_counts() {
        let index = CuisineIndex::fit(["Thai", "Thai", "Greek"]);
        let entries = index.entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Thai");
        assert_eq!(entries[0].count, 2);
        assert_eq!(entries[1].count, 1);
    }
}
