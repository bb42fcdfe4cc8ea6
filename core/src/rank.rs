use crate::{Corpus, DocIndex, Document, RankError, Result, TfIdfTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument {
    /// Position of the document in the input corpus.
    pub index: DocIndex,
    pub score: f64,
    pub document: Document,
}

/// Sum of TF-IDF over every token of every document, in corpus order.
///
/// Repeated tokens contribute once per occurrence.
pub fn score_documents(table: &TfIdfTable, corpus: &Corpus) -> Result<Vec<f64>> {
    if corpus.is_empty() {
        return Err(RankError::EmptyCorpus);
    }
    if table.num_docs() != corpus.len() {
        return Err(RankError::CorpusSizeMismatch { expected: corpus.len(), actual: table.num_docs() });
    }

    corpus
        .iter()
        .enumerate()
        .map(|(doc, tokens)| {
            tokens.iter().try_fold(0.0, |score, word| {
                table
                    .weight(word, doc)
                    .map(|weight| score + weight)
                    .ok_or_else(|| RankError::UnknownWord { word: word.clone(), doc })
            })
        })
        .collect()
}

/// Ranks every document of `corpus` by descending score.
///
/// Documents with equal scores keep their corpus order.
pub fn rank(table: &TfIdfTable, corpus: &Corpus) -> Result<Vec<RankedDocument>> {
    let scores = score_documents(table, corpus)?;

    let mut ranked: Vec<RankedDocument> = scores
        .into_iter()
        .zip(corpus.iter())
        .enumerate()
        .map(|(index, (score, document))| RankedDocument { index, score, document: document.clone() })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));

    tracing::debug!(num_docs = ranked.len(), top_score = ranked.first().map(|r| r.score), "ranked corpus");
    Ok(ranked)
}
