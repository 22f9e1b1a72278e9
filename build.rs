//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let answers = read_word_list("data/answers.txt");
    let guess_only = read_word_list("data/allowed.txt");

    // Daily answers keep file order: the day index selects by position
    generate_word_list(
        &answers,
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Daily answer words, in selection order",
    );

    // Every answer is also a valid guess
    let allowed: BTreeSet<String> = answers.iter().chain(&guess_only).cloned().collect();
    let allowed: Vec<String> = allowed.into_iter().collect();
    generate_word_list(
        &allowed,
        &Path::new(&out_dir).join("allowed.rs"),
        "ALLOWED",
        "All accepted guesses (answers plus guess-only words), sorted",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/answers.txt");
    println!("cargo:rerun-if-changed=data/allowed.txt");
}

fn read_word_list(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            assert!(
                line.len() == 5 && line.bytes().all(|b| b.is_ascii_alphabetic()),
                "{input_path}: '{line}' is not a five-letter word"
            );
            line.to_ascii_uppercase()
        })
        .collect()
}

fn generate_word_list(words: &[String], output_path: &Path, const_name: &str, doc_comment: &str) {
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
