//! Key events the game understands
//!
//! Only A-Z, ENTER and BACKSPACE reach the state machine; front ends map their
//! own events through `Key::parse` or `Key::from_char` and drop the rest.

/// A discrete game input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// An uppercase ASCII letter
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Key for a typed character, `None` unless it is an ASCII letter
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }

    /// Key for a key name: `ENTER`, `BACKSPACE` or a single letter
    ///
    /// # Examples
    /// ```
    /// use wordly::game::Key;
    ///
    /// assert_eq!(Key::parse("ENTER"), Some(Key::Enter));
    /// assert_eq!(Key::parse("q"), Some(Key::Letter('Q')));
    /// assert_eq!(Key::parse("F5"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("ENTER") {
            return Some(Self::Enter);
        }
        if name.eq_ignore_ascii_case("BACKSPACE") {
            return Some(Self::Backspace);
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }
}
