use crate::error::Result;
use crate::idf::{compute_idfs, IdfTable};
use crate::index::{Corpus, Query, ScoredEntity};
use crate::rank::{score_files, score_sentences, top_n};
use crate::sentences::extract_sentences;
use crate::tokenizer::Tokenizer;

/// How many documents and sentences an answer keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub files: usize,
    pub sentences: usize,
}

impl Default for MatchLimits {
    fn default() -> Self { Self { files: 1, sentences: 1 } }
}

#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub query: Query,
    /// Best documents first, scored by TF-IDF.
    pub files: Vec<ScoredEntity>,
    /// Best sentences of those documents, scored by IDF sum and query term density.
    pub sentences: Vec<ScoredEntity>,
}

impl Answer {
    pub fn file_ids(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn sentence_texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.id.as_str()).collect()
    }
}

/// A loaded corpus with its document-level IDF table, ready to answer queries.
pub struct QueryEngine {
    corpus: Corpus,
    tokenizer: Tokenizer,
    idfs: IdfTable,
}

impl QueryEngine {
    /// Fails with [`crate::Error::EmptyCollection`] when the corpus has no documents.
    pub fn new(corpus: Corpus, tokenizer: Tokenizer) -> Result<Self> {
        let idfs = compute_idfs(corpus.documents())?;
        tracing::info!(num_docs = idfs.num_entities(), num_terms = idfs.len(), "built document idf table");
        Ok(Self { corpus, tokenizer, idfs })
    }

    pub fn idfs(&self) -> &IdfTable { &self.idfs }

    pub fn parse_query(&self, text: &str) -> Query {
        self.tokenizer.query(text)
    }

    pub fn answer(&self, text: &str, limits: MatchLimits) -> Result<Answer> {
        self.answer_query(self.parse_query(text), limits)
    }

    /// Rank documents, then rank the sentences of the top documents against an
    /// IDF table rebuilt over those sentences alone.
    pub fn answer_query(&self, query: Query, limits: MatchLimits) -> Result<Answer> {
        if query.is_empty() {
            tracing::warn!("query has no terms after normalization");
        } else {
            tracing::debug!(num_terms = query.len(), "parsed query");
        }
        let files = top_n(score_files(&query, self.corpus.documents(), &self.idfs), limits.files);
        tracing::debug!(top_files = ?files.iter().map(|f| &f.id).collect::<Vec<_>>(), "ranked documents");

        let sentences = extract_sentences(files.iter().filter_map(|f| self.corpus.get(&f.id)), &self.tokenizer);
        if sentences.is_empty() {
            tracing::warn!("top documents contain no sentences with terms");
            return Ok(Answer { query, files, sentences: Vec::new() });
        }
        let sentence_idfs = compute_idfs(&sentences)?;
        tracing::debug!(num_sentences = sentence_idfs.num_entities(), num_terms = sentence_idfs.len(), "built sentence idf table");

        let sentences = top_n(score_sentences(&query, &sentences, &sentence_idfs), limits.sentences);
        Ok(Answer { query, files, sentences })
    }
}
