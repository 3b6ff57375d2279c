use crate::error::CorpusError;
use crate::extract::DocumentRecord;
use crate::freq::FreqDist;
use crate::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything collected for one term.
///
/// `records` grows while scraping; `all_words` and `frequencies` are derived
/// afterwards in one pass by `combine_words` and `compute_frequencies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCorpus {
    term: Term,
    records: Vec<DocumentRecord>,
    article_count: usize,
    all_words: Vec<String>,
    frequencies: FreqDist,
    collected_at: Option<String>,
}

impl TermCorpus {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            records: Vec::new(),
            article_count: 0,
            all_words: Vec::new(),
            frequencies: FreqDist::new(),
            collected_at: None,
        }
    }

    pub fn term(&self) -> &Term { &self.term }
    pub fn label(&self) -> &str { self.term.label() }
    pub fn records(&self) -> &[DocumentRecord] { &self.records }
    pub fn article_count(&self) -> usize { self.article_count }
    pub fn all_words(&self) -> &[String] { &self.all_words }
    pub fn frequencies(&self) -> &FreqDist { &self.frequencies }
    pub fn collected_at(&self) -> Option<&str> { self.collected_at.as_deref() }

    pub fn set_collected_at(&mut self, ts: String) { self.collected_at = Some(ts); }

    /// Repeated ids are stored again, not merged.
    pub fn add_record(&mut self, record: DocumentRecord) {
        self.records.push(record);
        self.article_count += 1;
    }

    pub fn combine_words(&mut self) {
        self.all_words = self.records.iter().filter_map(|r| r.words.as_ref()).flatten().cloned().collect();
    }

    /// Count `all_words`, dropping the term's own lower-cased label.
    pub fn compute_frequencies(&mut self) {
        let mut fd = FreqDist::from_words(&self.all_words);
        fd.remove(&self.term.label().to_lowercase());
        self.frequencies = fd;
    }

    pub fn check_consistency(&self) -> Result<(), CorpusError> {
        if self.article_count != self.records.len() {
            return Err(CorpusError::Inconsistent {
                label: self.label().to_string(),
                article_count: self.article_count,
                records: self.records.len(),
            });
        }
        Ok(())
    }

    /// The `n` most frequent words. Order among equal counts follows first appearance
    /// in `all_words`; callers should not depend on it.
    pub fn top_words(&self, n: usize) -> Result<Vec<(String, u64)>, CorpusError> {
        let available = self.frequencies.len();
        if n > available {
            return Err(CorpusError::TopWordsOutOfRange { requested: n, available });
        }
        let mut all = self.frequencies.most_common();
        all.truncate(n);
        Ok(all)
    }

    /// Number of records per publication year; records without a year are skipped.
    pub fn year_counts(&self) -> BTreeMap<i32, usize> {
        let mut counts = BTreeMap::new();
        for y in self.records.iter().filter_map(|r| r.year) { *counts.entry(y).or_insert(0) += 1; }
        counts
    }

    #[cfg(test)]
    pub(crate) fn corrupt_count(&mut self, n: usize) { self.article_count = n; }
}
