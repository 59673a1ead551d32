use crate::error::{Error, Result};
use crate::index::Tokenized;
use std::collections::{HashMap, HashSet};

/// Token to IDF over one collection of documents or sentences.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    idfs: HashMap<String, f64>,
    num_entities: usize,
}

impl IdfTable {
    /// IDF of `term`; a term never seen while building the table weighs 0.
    pub fn get(&self, term: &str) -> f64 {
        self.idfs.get(term).copied().unwrap_or(0.0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.idfs.len() }

    pub fn is_empty(&self) -> bool { self.idfs.is_empty() }

    /// Size D of the collection the table was built over.
    pub fn num_entities(&self) -> usize { self.num_entities }
}

/// IDF(t) = ln(D / f(t)) with f(t) the number of entities containing t at
/// least once. No smoothing: a term present everywhere gets 0.
pub fn compute_idfs<T: Tokenized>(entities: &[T]) -> Result<IdfTable> {
    let num_entities = entities.len();
    if num_entities == 0 {
        return Err(Error::EmptyCollection);
    }

    let mut df: HashMap<&str, u32> = HashMap::new();
    for entity in entities {
        let distinct: HashSet<&str> = entity.tokens().iter().map(String::as_str).collect();
        for term in distinct {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    let n = num_entities as f64;
    let idfs = df
        .into_iter()
        .map(|(term, df_t)| (term.to_string(), (n / df_t as f64).ln()))
        .collect::<HashMap<_, _>>();
    tracing::debug!(num_entities, num_terms = idfs.len(), "computed idf table");
    Ok(IdfTable { idfs, num_entities })
}
