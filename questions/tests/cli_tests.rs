use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::tempdir;

fn build_tiny_corpus(dir: &Path) {
    fs::write(dir.join("doc1"), "The sun is a star.").unwrap();
    fs::write(dir.join("doc2"), "A star is hot.").unwrap();
    fs::write(
        dir.join("rust.txt"),
        "Rust has a borrow checker. Rust is fast.\n\nThe borrow checker enforces ownership.",
    )
    .unwrap();
}

fn run(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_questions"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let mut child_stdin = child.stdin.take().unwrap();
        if let Some(input) = stdin {
            child_stdin.write_all(input.as_bytes()).unwrap();
        }
    }
    child.wait_with_output().unwrap()
}

#[test]
fn answers_interactive_query() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let corpus = dir.path().to_string_lossy().to_string();

    let out = run(&[corpus.as_str()], Some("What does the borrow checker do?\n"));
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "Query: rust.txt\nRust has a borrow checker.\n");
}

#[test]
fn answers_query_flag_with_counts() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let corpus = dir.path().to_string_lossy().to_string();

    let out = run(&[corpus.as_str(), "--query", "borrow checker", "--files", "5", "--sentences", "2"], None);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "rust.txt",
            "doc1",
            "doc2",
            "Rust has a borrow checker.",
            "The borrow checker enforces ownership.",
        ]
    );
}

#[test]
fn json_output() {
    let dir = tempdir().unwrap();
    build_tiny_corpus(dir.path());
    let corpus = dir.path().to_string_lossy().to_string();

    let out = run(&[corpus.as_str(), "--query", "Star?", "--json"], None);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["query"], serde_json::json!(["star"]));
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["id"], "doc1");
    assert_eq!(json["sentences"][0]["text"], "The sun is a star.");
    assert_eq!(json["sentences"][0]["density"], 0.5);
}

#[test]
fn wrong_argument_count_prints_usage() {
    let out = run(&[], None);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Usage"), "{stderr}");

    let out = run(&["a", "b"], None);
    assert!(!out.status.success());
}

#[test]
fn missing_corpus_is_fatal() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope").to_string_lossy().to_string();
    let out = run(&[missing.as_str(), "--query", "star"], None);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to load corpus"), "{stderr}");
}

#[test]
fn empty_corpus_is_fatal() {
    let dir = tempdir().unwrap();
    let corpus = dir.path().to_string_lossy().to_string();
    let out = run(&[corpus.as_str(), "--query", "star"], None);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("empty collection"), "{stderr}");
}
