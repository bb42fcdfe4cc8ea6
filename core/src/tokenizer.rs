use crate::{Corpus, Document};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref PUNCTUATION: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref DIGITS: Regex = Regex::new(r"[\n\d]").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    // Punctuation is stripped before lookup, so contractions appear without apostrophes.
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","couldn",
            "d","did","didn","do","does","doesn","doing","don","down","during",
            "each","few","for","from","further",
            "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","isn","it","its","itself",
            "just","ll","m","ma","me","mightn","more","most","mustn","my","myself",
            "needn","no","nor","not","now","o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
            "re","s","same","shan","she","shes","should","shouldn","shouldve","so","some","such",
            "t","than","that","thatll","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","ve","very",
            "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","will","with","won","wouldn",
            "y","you","youd","youll","youre","youve","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Options for turning raw text into index tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Reduce each token to its English Snowball stem.
    pub stem: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self { Self { stem: true } }
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

/// Normalize text with the default options.
pub fn normalize(text: &str) -> Document {
    normalize_with(text, &NormalizeOptions::default())
}

/// NFKC-normalize, drop punctuation, lowercase, drop digits and newlines,
/// split on whitespace, remove stopwords and optionally stem.
///
/// Punctuation is removed rather than treated as a separator, so
/// "all-time" becomes "alltime".
pub fn normalize_with(text: &str, options: &NormalizeOptions) -> Document {
    let composed = text.nfkc().collect::<String>();
    let stripped = PUNCTUATION.replace_all(&composed, "").to_lowercase();
    let cleaned = DIGITS.replace_all(&stripped, "");

    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(|token| if options.stem { STEMMER.stem(token).to_string() } else { token.to_string() })
        .collect()
}

/// Normalize every text into one document of a corpus, keeping input order.
pub fn prepare_corpus<I, S>(texts: I, options: &NormalizeOptions) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().map(|text| normalize_with(text.as_ref(), options)).collect()
}
