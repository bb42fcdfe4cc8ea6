use crate::SourceDoc;
use anyhow::Result;
use docrank_core::Analysis;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print only the first `limit` ranked documents.
    pub limit: Option<usize>,
    /// Attach the `n` highest TF-IDF words of each document.
    pub show_terms: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TermWeight<'a> {
    pub word: &'a str,
    pub tfidf: f64,
}

#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    pub rank: usize,
    pub index: usize,
    pub id: &'a str,
    pub score: f64,
    pub tokens: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_terms: Option<Vec<TermWeight<'a>>>,
}

/// Pair ranked documents with their source ids. `sources` must be in corpus order.
pub fn build_report<'a>(analysis: &'a Analysis, sources: &'a [SourceDoc], options: &ReportOptions) -> Vec<ReportEntry<'a>> {
    let limit = options.limit.unwrap_or(analysis.ranked.len());
    analysis
        .ranked
        .iter()
        .take(limit)
        .enumerate()
        .map(|(rank, ranked)| ReportEntry {
            rank: rank + 1,
            index: ranked.index,
            id: sources.get(ranked.index).map(|s| s.id.as_str()).unwrap_or(""),
            score: ranked.score,
            tokens: &ranked.document,
            top_terms: options.show_terms.map(|k| {
                analysis
                    .tfidf
                    .top_terms(ranked.index, k)
                    .into_iter()
                    .map(|(word, tfidf)| TermWeight { word, tfidf })
                    .collect()
            }),
        })
        .collect()
}

pub fn write_text<W: Write>(out: &mut W, entries: &[ReportEntry<'_>]) -> Result<()> {
    for entry in entries {
        writeln!(out, "Document Score: {}. Document: {:?}", entry.score, entry.tokens)?;
        for term in entry.top_terms.iter().flatten() {
            writeln!(out, "    {}: {:.4}", term.word, term.tfidf)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, entries: &[ReportEntry<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}
