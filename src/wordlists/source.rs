//! Daily word selection and guess dictionary

use super::loader::load_from_file;
use super::{ALLOWED, ANSWERS};
use crate::core::{PuzzleDay, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Answer list plus the dictionary of accepted guesses
///
/// The dictionary always contains every answer.
#[derive(Debug, Clone)]
pub struct WordSource {
    answers: Vec<Word>,
    dictionary: FxHashSet<String>,
}

impl WordSource {
    /// Word source over the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(ANSWERS, ALLOWED)
    }

    /// Word source over explicit lists
    ///
    /// Entries that are not 5-letter words are dropped. Answers are added to
    /// the dictionary whether or not `allowed` lists them.
    ///
    /// # Panics
    /// Panics if `answers` contains no valid word.
    #[must_use]
    pub fn from_lists(answers: &[&str], allowed: &[&str]) -> Self {
        let answers: Vec<Word> = answers.iter().filter_map(|&s| Word::new(s).ok()).collect();
        assert!(!answers.is_empty(), "answer list must not be empty");

        let mut dictionary: FxHashSet<String> = allowed
            .iter()
            .filter_map(|&s| Word::new(s).ok())
            .map(String::from)
            .collect();
        dictionary.extend(answers.iter().map(|w| w.text().to_string()));

        Self {
            answers,
            dictionary,
        }
    }

    /// Add guess-only words from a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn with_extra_words<P: AsRef<Path>>(mut self, path: P) -> io::Result<Self> {
        let before = self.dictionary.len();
        self.dictionary
            .extend(load_from_file(path)?.into_iter().map(String::from));
        tracing::info!(
            added = self.dictionary.len() - before,
            "Extended guess dictionary"
        );
        Ok(self)
    }

    /// The answer for a puzzle day
    ///
    /// Pure and total: day indices past the end of the list wrap around.
    ///
    /// # Examples
    /// ```
    /// use wordly::core::PuzzleDay;
    /// use wordly::wordlists::WordSource;
    ///
    /// let words = WordSource::embedded();
    /// let day = PuzzleDay::new(42);
    /// assert_eq!(words.word_for_day(day), words.word_for_day(day));
    /// ```
    #[must_use]
    pub fn word_for_day(&self, day: PuzzleDay) -> Word {
        let index = day.index() as usize % self.answers.len();
        self.answers[index].clone()
    }

    /// Whether `candidate` is an accepted guess
    ///
    /// Case-insensitive. Anything that is not exactly 5 letters is `false`.
    #[must_use]
    pub fn is_valid_guess(&self, candidate: &str) -> bool {
        if candidate.len() != WORD_LENGTH || !candidate.is_ascii() {
            return false;
        }
        self.dictionary
            .contains(candidate.to_ascii_uppercase().as_str())
    }

    /// Number of daily answers
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }
}

impl Default for WordSource {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn word_for_day_is_deterministic() {
        let first = WordSource::embedded();
        let second = WordSource::embedded();

        for index in [0, 1, 17, 389, 390, 1946, 100_000] {
            let day = PuzzleDay::new(index);
            assert_eq!(first.word_for_day(day), first.word_for_day(day));
            assert_eq!(first.word_for_day(day), second.word_for_day(day));
        }
    }

    #[test]
    fn word_for_day_wraps_around() {
        let words = WordSource::from_lists(&["crane", "slate", "alloy"], &[]);

        assert_eq!(words.word_for_day(PuzzleDay::new(0)).text(), "CRANE");
        assert_eq!(words.word_for_day(PuzzleDay::new(2)).text(), "ALLOY");
        assert_eq!(words.word_for_day(PuzzleDay::new(3)).text(), "CRANE");
        assert_eq!(words.word_for_day(PuzzleDay::new(4)).text(), "SLATE");
    }

    #[test]
    fn every_answer_is_a_valid_guess() {
        let words = WordSource::embedded();
        for &answer in ANSWERS {
            assert!(words.is_valid_guess(answer), "{answer}");
        }
    }

    #[test]
    fn is_valid_guess_case_insensitive() {
        let words = WordSource::embedded();
        assert!(words.is_valid_guess("CRANE"));
        assert!(words.is_valid_guess("crane"));
        assert!(words.is_valid_guess("CrAnE"));
        assert!(words.is_valid_guess("llama"));
    }

    #[test]
    fn common_words_are_accepted() {
        let words = WordSource::embedded();
        for word in [
            "house", "water", "there", "which", "heart", "raise", "stare", "tears", "least",
            "about", "other", "words", "could", "would", "great", "adieu", "crate", "trace",
        ] {
            assert!(words.is_valid_guess(word), "{word}");
        }
        assert!(words.dictionary_size() > 8_000);
    }

    #[test]
    fn is_valid_guess_rejects_without_error() {
        let words = WordSource::embedded();
        assert!(!words.is_valid_guess(""));
        assert!(!words.is_valid_guess("cran"));
        assert!(!words.is_valid_guess("cranes"));
        assert!(!words.is_valid_guess("zzzzz"));
        assert!(!words.is_valid_guess("crané"));
    }

    #[test]
    fn answers_join_dictionary_even_if_not_allowed() {
        let words = WordSource::from_lists(&["crane"], &["slate"]);
        assert!(words.is_valid_guess("crane"));
        assert!(words.is_valid_guess("slate"));
        assert_eq!(words.dictionary_size(), 2);
        assert_eq!(words.answer_count(), 1);
    }

    #[test]
    fn extra_words_extend_dictionary_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qajaq").unwrap();

        let words = WordSource::from_lists(&["crane"], &[])
            .with_extra_words(file.path())
            .unwrap();

        assert!(words.is_valid_guess("QAJAQ"));
        assert_eq!(words.answer_count(), 1);
        assert_eq!(words.word_for_day(PuzzleDay::new(5)).text(), "CRANE");
    }
}
