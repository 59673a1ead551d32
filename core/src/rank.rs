use crate::idf::IdfTable;
use crate::index::{Document, Query, ScoredEntity, Sentence, Tokenized};
use std::cmp::Ordering;

/// Descending primary score, then descending secondary score, then ascending id.
pub fn ranking_order(a: &ScoredEntity, b: &ScoredEntity) -> Ordering {
    let secondary = |e: &ScoredEntity| e.secondary.unwrap_or(0.0);
    b.primary
        .total_cmp(&a.primary)
        .then_with(|| secondary(b).total_cmp(&secondary(a)))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort by [`ranking_order`] and keep at most `n`. Asking for more than is
/// available returns everything rather than failing.
pub fn top_n(mut scored: Vec<ScoredEntity>, n: usize) -> Vec<ScoredEntity> {
    scored.sort_by(ranking_order);
    scored.truncate(n);
    scored
}

/// TF-IDF of each document against the query: for every query term, its count
/// in the document times its IDF. Terms missing from the document or from the
/// IDF table contribute nothing.
pub fn score_files(query: &Query, documents: &[Document], idfs: &IdfTable) -> Vec<ScoredEntity> {
    documents
        .iter()
        .map(|doc| {
            let primary = query
                .iter()
                .map(|term| doc.term_frequency(term) as f64 * idfs.get(term))
                .sum();
            ScoredEntity { id: doc.id.clone(), primary, secondary: None }
        })
        .collect()
}

/// Sum of IDF over the distinct query terms a sentence contains, with query
/// term density (matched terms / sentence length) as the secondary score.
/// `idfs` must be built over the sentence collection itself.
pub fn score_sentences(query: &Query, sentences: &[Sentence], idfs: &IdfTable) -> Vec<ScoredEntity> {
    sentences
        .iter()
        .map(|sentence| {
            let tokens = sentence.tokens();
            let mut matched = 0usize;
            let mut idf_sum = 0.0;
            for term in query.iter() {
                if tokens.iter().any(|t| t == term) {
                    matched += 1;
                    idf_sum += idfs.get(term);
                }
            }
            let density = if tokens.is_empty() { 0.0 } else { matched as f64 / tokens.len() as f64 };
            ScoredEntity { id: sentence.id().to_string(), primary: idf_sum, secondary: Some(density) }
        })
        .collect()
}

/// Ids of the `n` best documents by TF-IDF, ties by ascending id.
pub fn top_files(query: &Query, documents: &[Document], idfs: &IdfTable, n: usize) -> Vec<String> {
    top_n(score_files(query, documents, idfs), n).into_iter().map(|e| e.id).collect()
}

/// Text of the `n` best sentences by IDF sum, ties by higher query term density.
pub fn top_sentences(query: &Query, sentences: &[Sentence], idfs: &IdfTable, n: usize) -> Vec<String> {
    top_n(score_sentences(query, sentences, idfs), n).into_iter().map(|e| e.id).collect()
}
