//! Word list loading utilities
//!
//! Loads extra guess words from user-supplied files.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines, `#` comments and anything that is not a
/// 5-letter word are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordly::wordlists::loader::load_from_file;
///
/// let words = load_from_file("my_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    tracing::debug!(
        path = %path.display(),
        loaded = words.len(),
        skipped,
        "Loaded word file"
    );

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_from_file_skips_comments_and_junk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# house words").unwrap();
        writeln!(file, "qajaq").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  Zorro  ").unwrap();
        writeln!(file, "nope").unwrap();
        writeln!(file, "b4d!!").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["QAJAQ", "ZORRO"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("absent.txt")).is_err());
    }
}
