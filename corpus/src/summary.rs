use crate::term_corpus::TermCorpus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-term overview handed to reporting. Unlike `TermCorpus::top_words`,
/// `top_words` here is clamped to the available vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    pub label: String,
    pub n_articles: usize,
    pub n_with_title: usize,
    pub n_with_abstract: usize,
    pub n_with_year: usize,
    pub n_words: usize,
    pub n_distinct_words: usize,
    pub top_words: Vec<(String, u64)>,
    pub year_counts: BTreeMap<i32, usize>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub collected_at: Option<String>,
}

impl TermSummary {
    pub fn from_corpus(c: &TermCorpus, n_top: usize) -> Self {
        let records = c.records();
        let year_counts = c.year_counts();
        let mut top_words = c.frequencies().most_common();
        top_words.truncate(n_top);
        Self {
            label: c.label().to_string(),
            n_articles: c.article_count(),
            n_with_title: records.iter().filter(|r| r.title.is_some()).count(),
            n_with_abstract: records.iter().filter(|r| r.words.is_some()).count(),
            n_with_year: records.iter().filter(|r| r.year.is_some()).count(),
            n_words: c.all_words().len(),
            n_distinct_words: c.frequencies().len(),
            top_words,
            first_year: year_counts.keys().next().copied(),
            last_year: year_counts.keys().next_back().copied(),
            year_counts,
            collected_at: c.collected_at().map(str::to_string),
        }
    }
}
