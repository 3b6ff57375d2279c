use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// A search key: the label plus an optional string to exclude from matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    label: String,
    exclusion: Option<String>,
}

impl Term {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), exclusion: None }
    }

    pub fn with_exclusion(label: impl Into<String>, exclusion: impl Into<String>) -> Self {
        Self { label: label.into(), exclusion: Some(exclusion.into()) }
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn exclusion(&self) -> Option<&str> { self.exclusion.as_deref() }

    /// Quote characters are not escaped in search expressions, so such terms produce malformed queries.
    pub fn has_embedded_quote(&self) -> bool {
        self.label.contains('"') || self.exclusion.as_deref().map_or(false, |e| e.contains('"'))
    }

    /// Parse one line of a terms file: `label` or `label | exclusion`.
    pub fn parse_line(line: &str) -> Option<Term> {
        let l = line.trim();
        if l.is_empty() || l.starts_with('#') { return None; }
        match l.split_once('|') {
            Some((label, excl)) => {
                let label = label.trim();
                let excl = excl.trim();
                if label.is_empty() { return None; }
                if excl.is_empty() { Some(Term::new(label)) } else { Some(Term::with_exclusion(label, excl)) }
            }
            None => Some(Term::new(l)),
        }
    }
}

/// Fixed endpoint options shared by every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EutilsConfig {
    pub base_url: String,
    pub db: String,
    pub retmode: String,
    pub retmax: Option<u32>,
    pub api_key: Option<String>,
}

impl Default for EutilsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EUTILS_BASE.to_string(),
            db: "pubmed".to_string(),
            retmode: "xml".to_string(),
            retmax: None,
            api_key: None,
        }
    }
}

/// Immutable configuration handed to a `CorpusCollection` at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub terms: Vec<Term>,
    pub eutils: EutilsConfig,
}

impl CollectionConfig {
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms, eutils: EutilsConfig::default() }
    }
}

pub fn load_terms<P: AsRef<Path>>(path: P) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    for line in BufReader::new(File::open(path.as_ref())?).lines() {
        if let Some(t) = Term::parse_line(&line?) { terms.push(t); }
    }
    if terms.is_empty() { return Err(anyhow!("no terms in {}", path.as_ref().display())); }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_term_lines() {
        assert_eq!(Term::parse_line("P300"), Some(Term::new("P300")));
        assert_eq!(Term::parse_line(" N400 | cell "), Some(Term::with_exclusion("N400", "cell")));
        assert_eq!(Term::parse_line("MMN |"), Some(Term::new("MMN")));
        assert_eq!(Term::parse_line("# comment"), None);
        assert_eq!(Term::parse_line("   "), None);
    }

    #[test]
    fn loads_terms_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("erps.txt");
        std::fs::write(&file, "# components\nP300\n\nN400 | cell\n").unwrap();
        let terms = load_terms(&file).unwrap();
        assert_eq!(terms, vec![Term::new("P300"), Term::with_exclusion("N400", "cell")]);

        std::fs::write(&file, "# nothing\n").unwrap();
        assert!(load_terms(&file).is_err());
    }

    #[test]
    fn flags_embedded_quotes() {
        assert!(Term::new("P\"3").has_embedded_quote());
        assert!(Term::with_exclusion("P3", "a\"b").has_embedded_quote());
        assert!(!Term::with_exclusion("P3", "cell").has_embedded_quote());
    }
}
