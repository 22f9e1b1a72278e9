//! Dictionary lookup command

use crate::output::print_check_result;
use crate::wordlists::WordSource;

/// Report whether `word` would be accepted as a guess
pub fn run_check(words: &WordSource, word: &str) -> bool {
    let valid = words.is_valid_guess(word);
    tracing::debug!(word, valid, "Checked word");
    print_check_result(word, valid);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_membership() {
        let words = WordSource::from_lists(&["crane"], &["slate"]);
        assert!(run_check(&words, "slate"));
        assert!(run_check(&words, "CRANE"));
        assert!(!run_check(&words, "zzzzz"));
        assert!(!run_check(&words, "cranes"));
    }
}
