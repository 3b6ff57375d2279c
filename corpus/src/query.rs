use crate::term::{EutilsConfig, Term};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub ids: Vec<u64>,
}

/// Builds esearch/efetch URLs from a fixed option set.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    search_base: String,
    fetch_base: String,
}

impl QueryBuilder {
    pub fn new(cfg: &EutilsConfig) -> Self {
        let mut common = format!("db={}&retmode={}", cfg.db, cfg.retmode);
        if let Some(key) = &cfg.api_key { common.push_str(&format!("&api_key={key}")); }
        let retmax = cfg.retmax.map(|n| format!("&retmax={n}")).unwrap_or_default();
        Self {
            search_base: format!("{}esearch.fcgi?{}{}&term=", cfg.base_url, common, retmax),
            fetch_base: format!("{}efetch.fcgi?{}&id=", cfg.base_url, common),
        }
    }

    /// `"label"`, or `"label" NOT "exclusion"`. Embedded quotes are passed through unescaped.
    pub fn search_expression(term: &Term) -> String {
        match term.exclusion() {
            Some(excl) => format!("\"{}\" NOT \"{}\"", term.label(), excl),
            None => format!("\"{}\"", term.label()),
        }
    }

    pub fn search(&self, term: &Term) -> SearchRequest {
        if term.has_embedded_quote() {
            tracing::warn!(label = term.label(), "term contains a quote character; search expression is malformed");
        }
        SearchRequest { url: format!("{}{}", self.search_base, Self::search_expression(term)) }
    }

    pub fn fetch(&self, ids: &[u64]) -> FetchRequest {
        let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        FetchRequest { url: format!("{}{}", self.fetch_base, joined), ids: ids.to_vec() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_without_exclusion() {
        assert_eq!(QueryBuilder::search_expression(&Term::new("P300")), "\"P300\"");
    }

    #[test]
    fn expression_with_exclusion() {
        let t = Term::with_exclusion("N400", "cell");
        assert_eq!(QueryBuilder::search_expression(&t), "\"N400\" NOT \"cell\"");
    }

    #[test]
    fn quotes_are_not_escaped() {
        let t = Term::new("P\"300");
        assert_eq!(QueryBuilder::search_expression(&t), "\"P\"300\"");
    }

    #[test]
    fn builds_search_and_fetch_urls() {
        let qb = QueryBuilder::new(&EutilsConfig::default());
        let s = qb.search(&Term::new("P300"));
        assert_eq!(s.url, "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi?db=pubmed&retmode=xml&term=\"P300\"");
        let f = qb.fetch(&[1, 22, 333]);
        assert_eq!(f.url, "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi?db=pubmed&retmode=xml&id=1,22,333");
        assert_eq!(f.ids, vec![1, 22, 333]);
    }

    #[test]
    fn optional_options_are_appended() {
        let cfg = EutilsConfig { retmax: Some(500), api_key: Some("k".into()), ..EutilsConfig::default() };
        let qb = QueryBuilder::new(&cfg);
        assert!(qb.search(&Term::new("MMN")).url.ends_with("db=pubmed&retmode=xml&api_key=k&retmax=500&term=\"MMN\""));
        assert!(qb.fetch(&[7]).url.ends_with("db=pubmed&retmode=xml&api_key=k&id=7"));
    }
}
