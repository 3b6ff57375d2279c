use crate::tokenizer::normalize;
use crate::xml::XmlNode;
use serde::{Deserialize, Serialize};

pub const TITLE_TAG: &str = "ArticleTitle";
pub const ABSTRACT_TAG: &str = "AbstractText";
pub const KEYWORD_TAG: &str = "Keyword";
pub const DATE_CREATED_TAG: &str = "DateCreated";
pub const YEAR_TAG: &str = "Year";

/// Fields pulled from one article. Everything but `id` may be missing upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: u64,
    pub title: Option<String>,
    /// Normalized abstract words; `None` when the article has no abstract.
    pub words: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub year: Option<i32>,
}

impl DocumentRecord {
    pub fn new(id: u64) -> Self {
        Self { id, title: None, words: None, keywords: None, year: None }
    }
}

/// Each field is looked up on its own, so a missing one never hides the rest.
pub fn extract(id: u64, article: &XmlNode) -> DocumentRecord {
    DocumentRecord {
        id,
        title: title(article),
        words: words(article),
        keywords: keywords(article),
        year: year(article),
    }
}

pub fn title(article: &XmlNode) -> Option<String> {
    article.find(TITLE_TAG).map(XmlNode::text_content)
}

/// Only the first `AbstractText` section is used.
pub fn words(article: &XmlNode) -> Option<Vec<String>> {
    article.find(ABSTRACT_TAG).map(|n| normalize(&n.text_content()))
}

pub fn keywords(article: &XmlNode) -> Option<Vec<String>> {
    let kws: Vec<String> = article.find_all(KEYWORD_TAG).into_iter().map(XmlNode::text_content).collect();
    if kws.is_empty() { None } else { Some(kws) }
}

pub fn year(article: &XmlNode) -> Option<i32> {
    article.find(DATE_CREATED_TAG)?.find(YEAR_TAG)?.text_content().trim().parse().ok()
}
