use crate::{Corpus, DocIndex, RankError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Per-word occurrence counts, one column per indexed document.
///
/// Every array always has exactly `num_docs` entries: a word first seen in
/// document `i` is back-filled with zeros for `0..i`, and words missing from a
/// document get an explicit 0 for it. Only [`index`] can grow the table, so a
/// table obtained from it is a complete snapshot of the corpus.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrequencyTable {
    counts: HashMap<String, Vec<u32>>,
    num_docs: usize,
}

impl FrequencyTable {
    pub fn new() -> Self { Self::default() }

    /// Number of documents (columns) indexed so far.
    pub fn num_docs(&self) -> usize { self.num_docs }

    pub fn num_words(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn contains(&self, word: &str) -> bool { self.counts.contains_key(word) }

    /// Counts of `word` in each document, indexed by [`DocIndex`].
    pub fn get(&self, word: &str) -> Option<&[u32]> {
        self.counts.get(word).map(Vec::as_slice)
    }

    pub fn count(&self, word: &str, doc: DocIndex) -> Option<u32> {
        self.get(word).and_then(|counts| counts.get(doc).copied())
    }

    /// Unordered iteration over `(word, counts)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.counts.iter().map(|(w, c)| (w.as_str(), c.as_slice()))
    }

    /// Number of documents containing `word` at least once.
    pub fn document_frequency(&self, word: &str) -> Option<usize> {
        self.get(word).map(document_frequency)
    }

    /// Appends one document as a new column and returns its index.
    ///
    /// Each distinct word is counted in a single pass over the tokens.
    pub(crate) fn add_document(&mut self, tokens: &[String]) -> Result<DocIndex> {
        let doc = self.num_docs;

        let mut doc_counts: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *doc_counts.entry(token.as_str()).or_insert(0) += 1;
        }

        for (word, count) in doc_counts {
            let column = self
                .counts
                .entry(word.to_string())
                .or_insert_with(|| vec![0; doc]);
            if column.len() != doc {
                return Err(RankError::Misaligned { word: word.to_string(), len: column.len(), expected: doc });
            }
            column.push(count);
        }

        // Words absent from this document still get an entry for it.
        for (word, column) in self.counts.iter_mut() {
            if column.len() == doc {
                column.push(0);
            }
            if column.len() != doc + 1 {
                return Err(RankError::Misaligned { word: word.clone(), len: column.len(), expected: doc + 1 });
            }
        }

        self.num_docs += 1;
        Ok(doc)
    }
}

pub(crate) fn document_frequency(counts: &[u32]) -> usize {
    counts.iter().filter(|&&c| c > 0).count()
}

/// Token count of every document, in corpus order. Duplicates count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSizes(Vec<usize>);

impl DocumentSizes {
    pub fn new(sizes: Vec<usize>) -> Self { Self(sizes) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, doc: DocIndex) -> Option<usize> { self.0.get(doc).copied() }

    pub fn as_slice(&self) -> &[usize] { &self.0 }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ { self.0.iter().copied() }
}

/// Builds the frequency table and document sizes for `corpus`, in corpus order.
pub fn index(corpus: &Corpus) -> Result<(FrequencyTable, DocumentSizes)> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }

    let mut table = FrequencyTable::new();
    let mut sizes = Vec::with_capacity(corpus.len());
    for tokens in corpus {
        table.add_document(tokens)?;
        sizes.push(tokens.len());
    }

    let empty_docs = sizes.iter().filter(|&&s| s == 0).count();
    if empty_docs > 0 {
        tracing::warn!(empty_docs, "corpus contains documents without tokens");
    }
    tracing::debug!(num_docs = table.num_docs(), num_words = table.num_words(), "indexed corpus");
    Ok((table, DocumentSizes::new(sizes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn backfills_and_pads_columns() {
        let corpus = Corpus::new(vec![doc("cat cat"), doc("dog"), doc("cat bird")]);
        let (table, sizes) = index(&corpus).unwrap();
        assert_eq!(table.get("cat"), Some(&[2, 0, 1][..]));
        assert_eq!(table.get("dog"), Some(&[0, 1, 0][..]));
        assert_eq!(table.get("bird"), Some(&[0, 0, 1][..]));
        assert_eq!(sizes.as_slice(), &[2, 1, 2]);
        assert_eq!(table.document_frequency("cat"), Some(2));
    }

    #[test]
    fn empty_document_gets_zero_column() {
        let corpus = Corpus::new(vec![doc("cat"), vec![], doc("dog")]);
        let (table, sizes) = index(&corpus).unwrap();
        assert_eq!(sizes.get(1), Some(0));
        for (_, counts) in table.iter() {
            assert_eq!(counts.len(), 3);
            assert_eq!(counts[1], 0);
        }
    }

    #[test]
    fn empty_corpus_is_rejected() {
        assert_eq!(index(&Corpus::default()), Err(RankError::EmptyCorpus));
    }

    #[test]
    fn add_document_keeps_table_width() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.add_document(&doc("a b")).unwrap(), 0);
        assert_eq!(table.add_document(&doc("c")).unwrap(), 1);
        assert_eq!(table.num_docs(), 2);
        assert!(table.iter().all(|(_, c)| c.len() == 2));
        assert_eq!(table.count("c", 0), Some(0));
        assert_eq!(table.count("missing", 0), None);
    }
}
