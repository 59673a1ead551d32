use crate::index::Query;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\S+").expect("valid regex");
    static ref CLITIC: Regex = Regex::new(r"^(.+?)['’](?:s|m|d|ll|re|ve)$").expect("valid regex");
}

pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a","about","above","after","again","against","ain","all","am","an","and","any","are","aren","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","couldn",
    "d","did","didn","do","does","doesn","doing","don","down","during",
    "each","few","for","from","further",
    "had","hadn","has","hasn","have","haven","having","he","her","here","hers","herself","him","himself","his","how",
    "i","if","in","into","is","isn","it","its","itself",
    "just","ll","m","ma","me","mightn","more","most","mustn","my","myself",
    "needn","no","nor","not","now",
    "o","of","off","on","once","only","or","other","our","ours","ourselves","out","over","own",
    "re","s","same","shan","she","should","shouldn","so","some","such",
    "t","than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
    "under","until","up","ve","very",
    "was","wasn","we","were","weren","what","when","where","which","while","who","whom","why","will","with","won","wouldn",
    "y","you","your","yours","yourself","yourselves",
];

/// Words that end in a period without ending a sentence, lowercased and
/// without the final period.
pub const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr","mrs","ms","dr","prof","sr","jr","st","mt","rev","gen","gov","sen","rep","capt","col","lt","sgt",
    "vs","e.g","i.e","cf","al","ca","approx","fig","vol","ed","dept","inc","ltd","co","corp",
    "u.s","u.k","u.n","u.s.a","ph.d",
    "jan","feb","mar","apr","jun","jul","aug","sep","sept","oct","nov","dec",
];

/// Immutable tokenizer settings, built once at startup and handed to
/// [`Tokenizer::new`].
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    stopwords: HashSet<String>,
    abbreviations: HashSet<String>,
}

impl TokenizerConfig {
    pub fn english() -> Self {
        Self::with_stopwords(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Custom stopwords with the English abbreviations. Stopwords are
    /// lowercased on the way in, matching token normalization.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: lowercased(words),
            abbreviations: lowercased(ENGLISH_ABBREVIATIONS.iter().copied()),
        }
    }

    /// Replace the abbreviations that do not end a sentence.
    pub fn abbreviations<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.abbreviations = lowercased(words);
        self
    }
}

fn lowercased<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| w.as_ref().to_lowercase()).collect()
}

impl Default for TokenizerConfig {
    fn default() -> Self { Self::english() }
}

#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    fn is_stopword(&self, token: &str) -> bool {
        self.config.stopwords.contains(token)
    }

    /// Tokenize text into ordered terms: NFKC normalized and lowercased, with
    /// surrounding punctuation peeled off and a trailing clitic (`'s`, `'ll`,
    /// `'re`, ...) split away. A word that still holds anything but letters
    /// (digits, hyphens, inner apostrophes) is dropped whole, as are stopwords.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut tokens = Vec::new();
        for mat in RE.find_iter(&normalized) {
            let mut word = mat.as_str().trim_matches(|c: char| !c.is_alphanumeric());
            if let Some(stem) = CLITIC.captures(word).and_then(|caps| caps.get(1)) {
                word = stem.as_str();
            }
            if word.is_empty() || !word.chars().all(char::is_alphabetic) { continue; }
            if self.is_stopword(word) { continue; }
            tokens.push(word.to_string());
        }
        tokens
    }

    pub fn query(&self, text: &str) -> Query {
        self.tokenize(text).into_iter().collect()
    }

    /// Split a passage into trimmed sentences on Unicode sentence boundaries.
    /// A boundary right after a known abbreviation or a single-letter initial
    /// (`Dr.`, `U.S.`, `J.`) is not a sentence end.
    pub fn sentences(&self, passage: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut pending = String::new();
        for segment in passage.unicode_sentences() {
            pending.push_str(segment);
            if self.ends_with_abbreviation(segment) { continue; }
            push_trimmed(&mut sentences, &pending);
            pending.clear();
        }
        push_trimmed(&mut sentences, &pending);
        sentences
    }

    fn ends_with_abbreviation(&self, segment: &str) -> bool {
        let Some(last) = segment.split_whitespace().next_back() else { return false };
        let Some(word) = last.strip_suffix('.') else { return false };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return c.is_uppercase();
        }
        self.config.abbreviations.contains(&word.to_lowercase())
    }
}

fn push_trimmed(sentences: &mut Vec<String>, text: &str) {
    let sentence = text.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new(TokenizerConfig::default()) }
}
