//! Answer free-text questions over a small directory of plain-text documents.
//!
//! Documents are ranked by TF-IDF, then the sentences of the best documents are
//! ranked by the summed IDF of the query terms they contain, with query term
//! density breaking ties.

pub mod corpus;
pub mod engine;
pub mod error;
pub mod idf;
pub mod index;
pub mod rank;
pub mod sentences;
pub mod tokenizer;

pub use corpus::load_corpus;
pub use engine::{Answer, MatchLimits, QueryEngine};
pub use error::{Error, Result};
pub use idf::{compute_idfs, IdfTable};
pub use index::{Corpus, Document, Query, ScoredEntity, Sentence, Tokenized};
pub use rank::{top_files, top_sentences};
pub use sentences::extract_sentences;
pub use tokenizer::{Tokenizer, TokenizerConfig};
