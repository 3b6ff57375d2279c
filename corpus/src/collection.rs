use crate::error::{CorpusError, TermError};
use crate::extract::extract;
use crate::fetch::{RecordFetcher, Transport};
use crate::query::QueryBuilder;
use crate::term::{CollectionConfig, Term};
use crate::term_corpus::TermCorpus;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct TermFailure {
    pub label: String,
    pub error: TermError,
}

#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub scraped: usize,
    pub failures: Vec<TermFailure>,
}

impl ScrapeReport {
    pub fn is_clean(&self) -> bool { self.failures.is_empty() }
}

/// One `TermCorpus` per configured term, in configuration order.
pub struct CorpusCollection {
    config: CollectionConfig,
    corpora: Vec<TermCorpus>,
}

impl CorpusCollection {
    pub fn new(config: CollectionConfig) -> Self {
        Self { config, corpora: Vec::new() }
    }

    /// Rebuild a collection from stored corpora.
    pub fn from_parts(config: CollectionConfig, corpora: Vec<TermCorpus>) -> Self {
        Self { config, corpora }
    }

    pub fn config(&self) -> &CollectionConfig { &self.config }
    pub fn corpora(&self) -> &[TermCorpus] { &self.corpora }
    pub fn into_corpora(self) -> Vec<TermCorpus> { self.corpora }
    pub fn get(&self, label: &str) -> Option<&TermCorpus> { self.corpora.iter().find(|c| c.label() == label) }

    /// Scrape every term in order. A failing term is logged, recorded in the report and
    /// left as an empty corpus so indices still line up with the term list.
    pub fn scrape_all<T: Transport + ?Sized>(&mut self, transport: &T) -> ScrapeReport {
        let builder = QueryBuilder::new(&self.config.eutils);
        let fetcher = RecordFetcher::new(transport);
        let mut report = ScrapeReport::default();
        self.corpora.clear();

        for term in &self.config.terms {
            match scrape_term(term, &builder, &fetcher) {
                Ok(corpus) => {
                    info!(label = term.label(), articles = corpus.article_count(), "term scraped");
                    report.scraped += 1;
                    self.corpora.push(corpus);
                }
                Err(e) => {
                    error!(label = term.label(), error = %e, "term failed; continuing");
                    report.failures.push(TermFailure { label: term.label().to_string(), error: e });
                    self.corpora.push(TermCorpus::new(term.clone()));
                }
            }
        }
        report
    }

    pub fn combine_all(&mut self) {
        for c in self.corpora.iter_mut() { c.combine_words(); }
    }

    pub fn compute_all_frequencies(&mut self) {
        for c in self.corpora.iter_mut() { c.compute_frequencies(); }
    }

    /// One line per term: `<label> :  <w1> , <w2> , ... , `.
    pub fn report_top_words(&self, n: usize) -> Result<Vec<String>, CorpusError> {
        self.corpora.iter().map(|c| top_words_line(c, n)).collect()
    }
}

pub fn top_words_line(corpus: &TermCorpus, n: usize) -> Result<String, CorpusError> {
    let words: String = corpus.top_words(n)?.into_iter().map(|(w, _)| w + " , ").collect();
    Ok(format!("{} :  {}", corpus.label(), words))
}

fn scrape_term<T: Transport + ?Sized>(term: &Term, builder: &QueryBuilder, fetcher: &RecordFetcher<'_, T>) -> Result<TermCorpus, TermError> {
    let mut corpus = TermCorpus::new(term.clone());
    let ids = fetcher.resolve_ids(&builder.search(term))?;
    if ids.is_empty() {
        warn!(label = term.label(), "search returned no ids");
    } else {
        for (id, article) in fetcher.resolve_records(&builder.fetch(&ids))? {
            corpus.add_record(extract(id, &article));
        }
    }
    corpus.check_consistency()?;
    corpus.set_collected_at(time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default());
    Ok(corpus)
}
