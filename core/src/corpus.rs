use crate::error::{Error, Result};
use crate::index::{Corpus, Document};
use crate::tokenizer::Tokenizer;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Load every regular file directly inside `dir` as a UTF-8 document, whatever
/// its extension, and tokenize it. Subdirectories are skipped.
pub fn load_corpus(dir: &Path, tokenizer: &Tokenizer) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() { continue; }
        let path = entry.path();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::ReadFile { path: path.to_path_buf(), source })?;
        let tokens = tokenizer.tokenize(&text);
        let id = entry.file_name().to_string_lossy().into_owned();
        tracing::debug!(%id, num_tokens = tokens.len(), "loaded document");
        documents.push(Document::new(id, text, tokens));
    }

    let corpus = Corpus::new(documents);
    tracing::info!(num_docs = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}
