use crate::error::FetchError;
use crate::query::{FetchRequest, SearchRequest};
use crate::xml::{XmlContent, XmlNode};
use anyhow::Result;

pub const ID_TAG: &str = "Id";
pub const ARTICLE_TAG: &str = "PubmedArticle";

/// "Fetch bytes for a URL". Retries, rate limiting and timeouts live behind this trait.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct RecordFetcher<'t, T: Transport + ?Sized> {
    transport: &'t T,
}

impl<'t, T: Transport + ?Sized> RecordFetcher<'t, T> {
    pub fn new(transport: &'t T) -> Self { Self { transport } }

    fn load(&self, url: &str) -> Result<XmlNode, FetchError> {
        let bytes = self.transport.get(url)?;
        Ok(XmlNode::parse(&bytes)?)
    }

    /// Every `Id` in the search response, in response order.
    pub fn resolve_ids(&self, req: &SearchRequest) -> Result<Vec<u64>, FetchError> {
        let root = self.load(&req.url)?;
        root.find_all(ID_TAG)
            .into_iter()
            .map(|n| {
                let raw = n.text_content();
                raw.trim().parse::<u64>().map_err(|_| FetchError::BadId(raw))
            })
            .collect()
    }

    /// Articles paired with the requested ids by position: the i-th article is taken
    /// to be the i-th id. The id is never re-read from the article body.
    pub fn resolve_records(&self, req: &FetchRequest) -> Result<Vec<(u64, XmlNode)>, FetchError> {
        let mut root = self.load(&req.url)?;
        let articles = take_all(&mut root, ARTICLE_TAG);
        if articles.len() > req.ids.len() {
            return Err(FetchError::Misaligned { ids: req.ids.len(), articles: articles.len() });
        }
        if articles.len() < req.ids.len() {
            tracing::warn!(ids = req.ids.len(), articles = articles.len(), "fewer articles than ids; pairing leading ids");
        }
        Ok(req.ids.iter().copied().zip(articles).collect())
    }
}

/// Move every element with `name` out of the tree, in document order, without descending into matches.
fn take_all(node: &mut XmlNode, name: &str) -> Vec<XmlNode> {
    let mut out = Vec::new();
    for c in node.content.iter_mut() {
        if let XmlContent::Element(child) = c {
            if child.name == name {
                out.push(std::mem::take(child));
            } else {
                out.extend(take_all(child, name));
            }
        }
    }
    out
}
