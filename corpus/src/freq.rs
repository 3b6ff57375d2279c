use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Word counts that remember first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreqDist {
    counts: IndexMap<String, u64>,
}

impl FreqDist {
    pub fn new() -> Self { Self::default() }

    pub fn from_words<'a, I: IntoIterator<Item = &'a String>>(words: I) -> Self {
        let mut fd = Self::new();
        for w in words { *fd.counts.entry(w.clone()).or_insert(0) += 1; }
        fd
    }

    pub fn get(&self, word: &str) -> Option<u64> { self.counts.get(word).copied() }
    pub fn contains(&self, word: &str) -> bool { self.counts.contains_key(word) }
    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }
    pub fn total(&self) -> u64 { self.counts.values().sum() }

    /// Removes keeping the order of the remaining words.
    pub fn remove(&mut self, word: &str) -> Option<u64> { self.counts.shift_remove(word) }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// All entries by descending count; equal counts stay in insertion order (stable sort).
    pub fn most_common(&self) -> Vec<(String, u64)> {
        let mut v: Vec<(String, u64)> = self.counts.iter().map(|(w, c)| (w.clone(), *c)).collect();
        v.sort_by(|a, b| b.1.cmp(&a.1));
        v
    }
}
