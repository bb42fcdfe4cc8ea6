//! TF-IDF statistics and document ranking over a fixed, pre-tokenized corpus.
//!
//! The pipeline runs strictly forward:
//! [`index`] builds the aligned [`FrequencyTable`] and [`DocumentSizes`],
//! [`TfIdfTable::compute`] derives TF, IDF and TF-IDF, and [`rank`] sums
//! per-token weights into a descending ranking. [`tokenizer`] turns raw text
//! into the normalized tokens the pipeline expects.

pub mod corpus;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod rank;
pub mod tfidf;
pub mod tokenizer;

pub use corpus::{Corpus, DocIndex, Document};
pub use error::{RankError, Result};
pub use index::{index, DocumentSizes, FrequencyTable};
pub use pipeline::{analyze, rank_corpus, Analysis};
pub use rank::{rank, score_documents, RankedDocument};
pub use tfidf::{compute_tfidf, TfIdfTable};
