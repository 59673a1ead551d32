use anyhow::{Context, Result};
use clap::Parser;
use questions_core::{load_corpus, Answer, MatchLimits, QueryEngine, Tokenizer, TokenizerConfig};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "questions")]
#[command(about = "Answer a question from a directory of text documents using TF-IDF", long_about = None)]
struct Cli {
    /// Directory of UTF-8 text files
    corpus: PathBuf,
    /// Number of top documents to report
    #[arg(long, default_value_t = 1)]
    files: usize,
    /// Number of top sentences to report
    #[arg(long, default_value_t = 1)]
    sentences: usize,
    /// Question to answer; read from standard input when omitted
    #[arg(long)]
    query: Option<String>,
    /// Print the answer as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct JsonAnswer<'a> {
    query: Vec<&'a str>,
    files: Vec<JsonFile<'a>>,
    sentences: Vec<JsonSentence<'a>>,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    id: &'a str,
    score: f64,
}

#[derive(Serialize)]
struct JsonSentence<'a> {
    text: &'a str,
    score: f64,
    density: f64,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let tokenizer = Tokenizer::new(TokenizerConfig::english());
    let corpus = load_corpus(&cli.corpus, &tokenizer)
        .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;
    let engine = QueryEngine::new(corpus, tokenizer).context("failed to index corpus")?;

    let question = match cli.query {
        Some(q) => q,
        None => prompt("Query: ")?,
    };
    let limits = MatchLimits { files: cli.files, sentences: cli.sentences };
    let answer = engine.answer(&question, limits)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        write_json(&mut out, &answer)?;
    } else {
        write_plain(&mut out, &answer)?;
    }
    Ok(())
}

/// Print `label` and read one line from standard input. End of input reads as
/// an empty question.
fn prompt(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("failed to read query")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn write_plain(out: &mut impl Write, answer: &Answer) -> Result<()> {
    for id in answer.file_ids() {
        writeln!(out, "{id}")?;
    }
    for sentence in answer.sentence_texts() {
        writeln!(out, "{sentence}")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, answer: &Answer) -> Result<()> {
    let json = JsonAnswer {
        query: answer.query.iter().collect(),
        files: answer.files.iter().map(|f| JsonFile { id: &f.id, score: f.primary }).collect(),
        sentences: answer
            .sentences
            .iter()
            .map(|s| JsonSentence { text: &s.id, score: s.primary, density: s.secondary.unwrap_or(0.0) })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
