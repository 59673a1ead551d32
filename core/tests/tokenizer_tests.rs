use questions_core::tokenizer::{Tokenizer, TokenizerConfig, ENGLISH_STOPWORDS};

#[test]
fn it_normalizes_and_filters() {
    let tokenizer = Tokenizer::new(TokenizerConfig::english());
    let words = tokenizer.tokenize("Running Runners RUN! The café's menu, in 2024: ＳＴＡＲＳ.");
    assert_eq!(words, vec!["running", "runners", "run", "café", "menu", "stars"]);
}

#[test]
fn it_filters_stopwords() {
    let tokenizer = Tokenizer::default();
    let words = tokenizer.tokenize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn every_token_is_lowercase_alphabetic_and_not_a_stopword() {
    let tokenizer = Tokenizer::default();
    let text = "Mr. O'Neil paid $3.50 for TWO apples -- ÉCLAIRS, too! Über-cool? naïve Straße x86 (Yes).";
    for token in tokenizer.tokenize(text) {
        assert!(token.chars().all(char::is_alphabetic), "{token}");
        assert_eq!(token, token.to_lowercase());
        assert!(!ENGLISH_STOPWORDS.contains(&token.as_str()), "{token}");
    }
}

#[test]
fn retokenizing_tokens_is_idempotent() {
    let tokenizer = Tokenizer::default();
    let first = tokenizer.tokenize("The Quick, brown fox; jumped over THE lazy dog's bed... twice!");
    assert_eq!(first, vec!["quick", "brown", "fox", "jumped", "lazy", "dog", "bed", "twice"]);
    let second = tokenizer.tokenize(&first.join(" "));
    assert_eq!(first, second);
}

#[test]
fn query_collapses_repeats() {
    let query = Tokenizer::default().query("Star star STAR, the sun?");
    let terms: Vec<&str> = query.iter().collect();
    assert_eq!(terms, vec!["star", "sun"]);
}
