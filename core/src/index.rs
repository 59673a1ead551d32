use std::collections::{BTreeSet, HashMap};

/// Anything that carries an identifier and an ordered token sequence: the unit
/// of an IDF collection and of ranking.
pub trait Tokenized {
    fn id(&self) -> &str;
    fn tokens(&self) -> &[String];
}

#[derive(Debug, Clone)]
pub struct Document {
    /// File name, unique within the corpus.
    pub id: String,
    pub text: String,
    /// Tokens in document order, duplicates retained.
    pub tokens: Vec<String>,
    term_counts: HashMap<String, u32>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>, tokens: Vec<String>) -> Self {
        let mut term_counts: HashMap<String, u32> = HashMap::new();
        for token in &tokens {
            *term_counts.entry(token.clone()).or_insert(0) += 1;
        }
        Self { id: id.into(), text: text.into(), tokens, term_counts }
    }

    /// Occurrences of `term` in this document's tokens.
    pub fn term_frequency(&self, term: &str) -> u32 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }
}

impl Tokenized for Document {
    fn id(&self) -> &str { &self.id }
    fn tokens(&self) -> &[String] { &self.tokens }
}

/// A sentence taken from one of the top documents. Its text doubles as its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<String>,
}

impl Tokenized for Sentence {
    fn id(&self) -> &str { &self.text }
    fn tokens(&self) -> &[String] { &self.tokens }
}

/// Documents keyed by id, held in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Builds a corpus from documents. A later document with an id already
    /// present replaces the earlier one.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut documents: Vec<Document> = documents.into_iter().collect();
        documents.sort_by(|a, b| a.id.cmp(&b.id));
        documents.reverse();
        documents.dedup_by(|later, earlier| later.id == earlier.id);
        documents.reverse();
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents
            .binary_search_by(|d| d.id.as_str().cmp(id))
            .ok()
            .map(|i| &self.documents[i])
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}

/// Normalized query terms. Order is irrelevant and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(BTreeSet<String>);

impl Query {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Ranking record: primary score is the TF-IDF sum for documents or the IDF
/// sum for sentences; the secondary score is query term density, sentences only.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntity {
    pub id: String,
    pub primary: f64,
    pub secondary: Option<f64>,
}
