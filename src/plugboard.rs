//! Plugboard: a small set of disjoint letter-swap pairs.
//!
//! Applied identically at the start and the end of the signal path. The
//! derived mapping is an involution: letters outside any pair map to
//! themselves, members of a pair map to each other.

use crate::error::ConfigurationError;

/// Maximum number of swap pairs a plugboard accepts.
const MAX_PAIRS: usize = 10;

/// A validated plugboard. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(char, char)>,
}

impl Plugboard {
    /// Creates a plugboard from a collection of two-character swap strings.
    ///
    /// Pairs are trimmed and uppercased before validation, so `"ab"` and
    /// `" AB "` both configure the swap `{A, B}`.
    ///
    /// # Parameters
    /// - `pairs`: Swap pairs, each exactly two characters long.
    ///
    /// # Errors
    /// - [`ConfigurationError::TooManyPlugPairs`] for more than 10 pairs.
    /// - [`ConfigurationError::InvalidPlugPair`] for a pair whose length is
    ///   not exactly two characters.
    /// - [`ConfigurationError::DuplicatePlugLetter`] if any letter appears
    ///   more than once across all pairs, including doubled inside one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let board = Plugboard::new(&["AB", "cd"]).unwrap();
    /// assert_eq!(board.swap('A'), 'B');
    /// assert_eq!(board.swap('C'), 'D');
    /// assert_eq!(board.swap('Z'), 'Z');
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self, ConfigurationError> {
        if pairs.len() > MAX_PAIRS {
            return Err(ConfigurationError::TooManyPlugPairs(pairs.len()));
        }

        let mut normalized = Vec::with_capacity(pairs.len());
        let mut seen: Vec<char> = Vec::with_capacity(pairs.len() * 2);
        for pair in pairs {
            let pair = pair.as_ref().trim().to_ascii_uppercase();
            let mut chars = pair.chars();
            let (a, b) = match (chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), None) => (a, b),
                _ => return Err(ConfigurationError::InvalidPlugPair(pair)),
            };
            for letter in [a, b] {
                if seen.contains(&letter) {
                    return Err(ConfigurationError::DuplicatePlugLetter(letter));
                }
                seen.push(letter);
            }
            normalized.push((a, b));
        }

        Ok(Plugboard { pairs: normalized })
    }

    /// Creates a plugboard with no pairs; every letter maps to itself.
    pub fn empty() -> Self {
        Plugboard { pairs: Vec::new() }
    }

    /// Returns the number of configured pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are configured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Swaps one letter through the board.
    ///
    /// If `letter` belongs to a configured pair the other member is
    /// returned; otherwise the letter passes through unchanged.
    pub fn swap(&self, letter: char) -> char {
        for &(a, b) in &self.pairs {
            if letter == a {
                return b;
            }
            if letter == b {
                return a;
            }
        }
        letter
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}
