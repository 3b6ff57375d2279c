use anyhow::{anyhow, Result};
use corpus::{CollectionConfig, CorpusCollection, CorpusError, Term, TermError, Transport};
use std::cell::RefCell;

/// Serves canned esearch/efetch bodies and records every URL asked for.
struct FakeEutils {
    search: &'static str,
    fetch: &'static str,
    calls: RefCell<Vec<String>>,
}

impl FakeEutils {
    fn new(search: &'static str, fetch: &'static str) -> Self {
        Self { search, fetch, calls: RefCell::new(Vec::new()) }
    }
}

impl Transport for FakeEutils {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.borrow_mut().push(url.to_string());
        if url.contains("esearch.fcgi") {
            Ok(self.search.as_bytes().to_vec())
        } else if url.contains("efetch.fcgi") {
            Ok(self.fetch.as_bytes().to_vec())
        } else {
            Err(anyhow!("unexpected url {url}"))
        }
    }
}

const N400_SEARCH: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE eSearchResult PUBLIC "-//NLM//DTD esearch 20060628//EN" "https://eutils.ncbi.nlm.nih.gov/eutils/dtd/20060628/esearch.dtd">
<eSearchResult><Count>2</Count><RetMax>2</RetMax><RetStart>0</RetStart>
<IdList>
<Id>24000001</Id>
<Id>24000002</Id>
</IdList></eSearchResult>"#;

const N400_FETCH: &str = r#"<?xml version="1.0" ?>
<PubmedArticleSet>
<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">24000001</PMID>
    <DateCreated><Year>2013</Year><Month>09</Month><Day>12</Day></DateCreated>
    <Article PubModel="Print">
      <ArticleTitle>A negative wave.</ArticleTitle>
      <Abstract><AbstractText>Negative deflection negative wave</AbstractText></Abstract>
    </Article>
    <KeywordList Owner="NOTNLM"><Keyword MajorTopicYN="N">semantics</Keyword></KeywordList>
  </MedlineCitation>
</PubmedArticle>
<PubmedArticle>
  <MedlineCitation Status="MEDLINE" Owner="NLM">
    <PMID Version="1">24000002</PMID>
    <Article PubModel="Print">
      <ArticleTitle>Untitled commentary</ArticleTitle>
    </Article>
  </MedlineCitation>
</PubmedArticle>
</PubmedArticleSet>"#;

#[test]
fn n400_end_to_end() {
    let transport = FakeEutils::new(N400_SEARCH, N400_FETCH);
    let mut coll = CorpusCollection::new(CollectionConfig::new(vec![Term::new("N400")]));
    let report = coll.scrape_all(&transport);
    assert!(report.is_clean());
    coll.combine_all();
    coll.compute_all_frequencies();

    let c = &coll.corpora()[0];
    assert_eq!(c.label(), "N400");
    assert_eq!(c.article_count(), 2);
    let freqs: Vec<(&str, u64)> = c.frequencies().iter().collect();
    assert_eq!(freqs, vec![("negative", 2), ("deflection", 1), ("wave", 1)]);

    let r0 = &c.records()[0];
    assert_eq!(r0.id, 24000001);
    assert_eq!(r0.year, Some(2013));
    assert_eq!(r0.keywords, Some(vec!["semantics".to_string()]));
    let r1 = &c.records()[1];
    assert_eq!(r1.id, 24000002);
    assert_eq!(r1.title.as_deref(), Some("Untitled commentary"));
    assert_eq!(r1.words, None);
    assert_eq!(r1.year, None);

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].ends_with("&term=\"N400\""));
    assert!(calls[1].ends_with("&id=24000001,24000002"));
}

#[test]
fn exclusion_reaches_the_search_url() {
    let transport = FakeEutils::new(N400_SEARCH, N400_FETCH);
    let mut coll = CorpusCollection::new(CollectionConfig::new(vec![Term::with_exclusion("N400", "cell")]));
    coll.scrape_all(&transport);
    assert!(transport.calls.borrow()[0].ends_with("&term=\"N400\" NOT \"cell\""));
}

#[test]
fn empty_search_skips_fetch() {
    let transport = FakeEutils::new("<eSearchResult><Count>0</Count><IdList/></eSearchResult>", "");
    let mut coll = CorpusCollection::new(CollectionConfig::new(vec![Term::new("P9000")]));
    let report = coll.scrape_all(&transport);
    assert!(report.is_clean());
    assert_eq!(coll.corpora()[0].article_count(), 0);
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn malformed_fetch_fails_only_that_term() {
    let transport = FakeEutils::new(N400_SEARCH, "<PubmedArticleSet><PubmedArticle></PubmedArticleSet>");
    let mut coll = CorpusCollection::new(CollectionConfig::new(vec![Term::new("N400"), Term::new("P600")]));
    let report = coll.scrape_all(&transport);
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(report.failures[0].error, TermError::Fetch(_)));
    assert_eq!(coll.corpora().len(), 2);
    // both terms were still attempted
    assert_eq!(transport.calls.borrow().len(), 4);
}

#[test]
fn too_many_top_words_is_an_error() {
    let transport = FakeEutils::new(N400_SEARCH, N400_FETCH);
    let mut coll = CorpusCollection::new(CollectionConfig::new(vec![Term::new("N400")]));
    coll.scrape_all(&transport);
    coll.combine_all();
    coll.compute_all_frequencies();
    assert_eq!(
        coll.report_top_words(5),
        Err(CorpusError::TopWordsOutOfRange { requested: 5, available: 3 })
    );
    assert_eq!(coll.report_top_words(1).unwrap(), vec!["N400 :  negative , ".to_string()]);
}
