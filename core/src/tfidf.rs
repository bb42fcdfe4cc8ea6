use crate::index::document_frequency;
use crate::{DocIndex, DocumentSizes, FrequencyTable, RankError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// TF, IDF and TF-IDF for every word of a [`FrequencyTable`].
///
/// - `tf[w][i]    = count(w, i) / size(i)`, or 0 when document `i` has no tokens
/// - `idf[w]      = ln(N / df(w))`
/// - `tfidf[w][i] = tf[w][i] * idf[w]`
///
/// Built once by [`TfIdfTable::compute`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdfTable {
    num_docs: usize,
    tf: HashMap<String, Vec<f64>>,
    idf: HashMap<String, f64>,
    tfidf: HashMap<String, Vec<f64>>,
}

impl TfIdfTable {
    pub fn compute(frequencies: &FrequencyTable, sizes: &DocumentSizes) -> Result<Self> {
        let n = sizes.len();
        if n == 0 {
            return Err(RankError::EmptyCorpus);
        }
        if frequencies.num_docs() != n {
            return Err(RankError::CorpusSizeMismatch { expected: n, actual: frequencies.num_docs() });
        }

        let mut tf = HashMap::with_capacity(frequencies.num_words());
        let mut idf = HashMap::with_capacity(frequencies.num_words());
        let mut tfidf = HashMap::with_capacity(frequencies.num_words());

        for (word, counts) in frequencies.iter() {
            if counts.len() != n {
                return Err(RankError::Misaligned { word: word.to_string(), len: counts.len(), expected: n });
            }
            let word_tf = term_frequency(counts, sizes);
            let word_idf = inverse_document_frequency(n, document_frequency(counts));
            let word_tfidf: Vec<f64> = word_tf.iter().map(|t| t * word_idf).collect();

            tf.insert(word.to_string(), word_tf);
            idf.insert(word.to_string(), word_idf);
            tfidf.insert(word.to_string(), word_tfidf);
        }

        tracing::debug!(num_docs = n, num_words = tfidf.len(), "computed tf-idf");
        Ok(Self { num_docs: n, tf, idf, tfidf })
    }

    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn num_words(&self) -> usize { self.tfidf.len() }

    pub fn contains(&self, word: &str) -> bool { self.tfidf.contains_key(word) }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tfidf.keys().map(String::as_str)
    }

    pub fn tf(&self, word: &str) -> Option<&[f64]> {
        self.tf.get(word).map(Vec::as_slice)
    }

    pub fn idf(&self, word: &str) -> Option<f64> {
        self.idf.get(word).copied()
    }

    pub fn tfidf(&self, word: &str) -> Option<&[f64]> {
        self.tfidf.get(word).map(Vec::as_slice)
    }

    /// TF-IDF of `word` in document `doc`.
    pub fn weight(&self, word: &str, doc: DocIndex) -> Option<f64> {
        self.tfidf(word).and_then(|w| w.get(doc).copied())
    }

    /// The `k` words occurring in `doc` with the highest TF-IDF there.
    /// Equal weights are ordered by word.
    pub fn top_terms(&self, doc: DocIndex, k: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self
            .tf
            .iter()
            .filter(|(_, tf)| tf.get(doc).is_some_and(|&t| t > 0.0))
            .filter_map(|(word, _)| Some((word.as_str(), self.weight(word, doc)?)))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(k);
        terms
    }
}

/// Free-function form of [`TfIdfTable::compute`].
pub fn compute_tfidf(frequencies: &FrequencyTable, sizes: &DocumentSizes) -> Result<TfIdfTable> {
    TfIdfTable::compute(frequencies, sizes)
}

/// Per-document TF for one word. Documents of size 0 get TF 0 instead of 0/0.
pub fn term_frequency(counts: &[u32], sizes: &DocumentSizes) -> Vec<f64> {
    counts
        .iter()
        .zip(sizes.iter())
        .map(|(&count, size)| if size == 0 { 0.0 } else { count as f64 / size as f64 })
        .collect()
}

/// `ln(num_docs / doc_freq)`. `doc_freq` is at least 1 for any indexed word.
pub fn inverse_document_frequency(num_docs: usize, doc_freq: usize) -> f64 {
    debug_assert!(doc_freq > 0, "indexed words occur in at least one document");
    (num_docs as f64 / doc_freq as f64).ln()
}
