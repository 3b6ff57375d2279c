use thiserror::Error;

/// Failure while resolving ids or records for one term. Fatal for that term only.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] anyhow::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("id {0:?} is not an integer")]
    BadId(String),

    #[error("fetched {articles} articles for {ids} requested ids")]
    Misaligned { ids: usize, articles: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CorpusError {
    #[error("inconsistent corpus for {label:?}: article_count={article_count} but {records} records")]
    Inconsistent { label: String, article_count: usize, records: usize },

    #[error("requested top {requested} words but only {available} distinct words exist")]
    TopWordsOutOfRange { requested: usize, available: usize },
}

#[derive(Error, Debug)]
pub enum TermError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
