use crate::DocIndex;

pub type Result<T> = std::result::Result<T, RankError>;

/// Failures raised by the indexing, weighting and ranking stages.
///
/// Empty documents are not an error: their TF is defined as 0.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    #[error("corpus is empty: at least one document is required")]
    EmptyCorpus,

    #[error("word {word:?} in document {doc} is missing from the TF-IDF table")]
    UnknownWord { word: String, doc: DocIndex },

    #[error("frequency array for {word:?} has length {len}, expected {expected}")]
    Misaligned { word: String, len: usize, expected: usize },

    #[error("stage inputs disagree on corpus size: expected {expected} documents, got {actual}")]
    CorpusSizeMismatch { expected: usize, actual: usize },
}
