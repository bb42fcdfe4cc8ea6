use crate::{index, rank, Corpus, DocumentSizes, FrequencyTable, RankedDocument, Result, TfIdfTable};

/// Every intermediate table of one ranking run, kept for inspection.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub frequencies: FrequencyTable,
    pub sizes: DocumentSizes,
    pub tfidf: TfIdfTable,
    pub ranked: Vec<RankedDocument>,
}

/// Runs indexing, weighting and ranking over `corpus`.
pub fn analyze(corpus: &Corpus) -> Result<Analysis> {
    let (frequencies, sizes) = index(corpus)?;
    let tfidf = TfIdfTable::compute(&frequencies, &sizes)?;
    let ranked = rank(&tfidf, corpus)?;
    Ok(Analysis { frequencies, sizes, tfidf, ranked })
}

/// Ranks `corpus`, discarding the intermediate tables.
pub fn rank_corpus(corpus: &Corpus) -> Result<Vec<RankedDocument>> {
    analyze(corpus).map(|analysis| analysis.ranked)
}
