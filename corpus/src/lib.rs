pub mod collection;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod freq;
pub mod persist;
pub mod query;
pub mod summary;
pub mod term;
pub mod term_corpus;
pub mod tokenizer;
pub mod xml;

pub use collection::{CorpusCollection, ScrapeReport, TermFailure};
pub use error::{CorpusError, FetchError, TermError};
pub use extract::DocumentRecord;
pub use fetch::{RecordFetcher, Transport};
pub use freq::FreqDist;
pub use query::{FetchRequest, QueryBuilder, SearchRequest};
pub use summary::TermSummary;
pub use term::{CollectionConfig, EutilsConfig, Term};
pub use term_corpus::TermCorpus;
