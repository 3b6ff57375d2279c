use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}_]+(?:[-/'][\p{L}\p{N}_]+)*").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself","it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while","of","at","by","for","with","about","against","between",
            "into","through","during","before","after","above","below","to","from","up","down","in","out","on","off","over","under",
            "again","further","then","once","here","there","when","where","why","how","all","any","both","each","few","more","most",
            "other","some","such","no","nor","not","only","own","same","so","than","too","very","s","t","can","will","just","don","don't",
            "should","should've","now","d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't","didn","didn't",
            "doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma","mightn","mightn't","mustn","mustn't",
            "needn","needn't","shan","shan't","shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

fn is_alphabetic(token: &str) -> bool { token.chars().all(char::is_alphabetic) }

/// Contraction and possessive endings split off as separate tokens (`alzheimer's` -> `alzheimer` + `'s`).
const CLITICS: &[&str] = &["n't", "'s", "'m", "'d", "'re", "'ve", "'ll"];

/// Split a word-like match into its stem and an optional trailing clitic.
fn split_clitic(token: &str) -> (&str, Option<&str>) {
    for c in CLITICS {
        if token.len() > c.len() && token.ends_with(c) {
            let (stem, tail) = token.split_at(token.len() - c.len());
            return (stem, Some(tail));
        }
    }
    (token, None)
}

/// Clean abstract text into words: NFKC, lowercase, alphabetic-only tokens, English stopwords removed.
/// Source order and repeats are kept.
pub fn normalize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    RE.find_iter(&normalized)
        .flat_map(|m| {
            let (stem, clitic) = split_clitic(m.as_str());
            std::iter::once(stem).chain(clitic)
        })
        .filter(|tok| is_alphabetic(tok) && !is_stopword(tok))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        assert_eq!(normalize("The component appears late."), vec!["component", "appears", "late"]);
    }

    #[test]
    fn splits_clitics() {
        assert_eq!(split_clitic("alzheimer's"), ("alzheimer", Some("'s")));
        assert_eq!(split_clitic("isn't"), ("is", Some("n't")));
        assert_eq!(split_clitic("o'brien"), ("o'brien", None));
        assert_eq!(split_clitic("'s"), ("'s", None));
    }

    #[test]
    fn rejects_mixed_tokens() {
        let w = normalize("The P300 is an event-related potential, 300ms after onset.");
        assert_eq!(w, vec!["potential", "onset"]);
    }
}
