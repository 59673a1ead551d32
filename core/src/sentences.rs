use crate::index::{Document, Sentence};
use crate::tokenizer::Tokenizer;
use std::collections::BTreeMap;

/// Split text into passages at blank lines. Line breaks inside a passage are
/// folded to single spaces.
pub fn passages(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }
    out
}

/// Sentences of the given documents with their tokens, ordered by text.
///
/// Sentences left with no tokens are dropped. Identical sentence text from
/// different documents or passages collapses to one entry.
pub fn extract_sentences<'a, I>(documents: I, tokenizer: &Tokenizer) -> Vec<Sentence>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut sentences: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for doc in documents {
        for passage in passages(&doc.text) {
            for text in tokenizer.sentences(&passage) {
                let tokens = tokenizer.tokenize(&text);
                if !tokens.is_empty() {
                    sentences.insert(text, tokens);
                }
            }
        }
    }
    sentences.into_iter().map(|(text, tokens)| Sentence { text, tokens }).collect()
}
