//! Word lists for the daily puzzle
//!
//! Answer and guess lists are embedded at build time from `data/`; the
//! generated `ALLOWED` list already includes every answer.

pub mod loader;
mod source;

pub use source::WordSource;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_are_uppercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_subset_of_allowed() {
        for answer in ANSWERS {
            assert!(
                ALLOWED.binary_search(answer).is_ok(),
                "Answer '{answer}' not in allowed list"
            );
        }
        assert!(ALLOWED_COUNT > ANSWERS_COUNT);
    }
}
