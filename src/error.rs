//! Error types for the Enigma library.

use thiserror::Error;

/// Errors raised while assembling a machine from configuration.
///
/// All validation is eager: every variant can only occur during
/// construction of a component or of the full [`Enigma`](crate::Enigma).
/// A machine that was built successfully never fails while encrypting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Rotor model name is not among the supported set.
    #[error("unsupported rotor model: {0}")]
    UnknownRotorModel(String),
    /// Reflector model name is not among the supported set.
    #[error("unsupported reflector model: {0}")]
    UnknownReflectorModel(String),
    /// Initial rotor window is not a single letter A-Z.
    #[error("rotor window must be a single letter A-Z, got {0:?}")]
    InvalidWindow(char),
    /// More than 10 plugboard pairs were supplied.
    #[error("plugboard supports at most 10 swap pairs, got {0}")]
    TooManyPlugPairs(usize),
    /// A plugboard pair is not exactly two characters.
    #[error("plugboard pair must be exactly two characters: {0:?}")]
    InvalidPlugPair(String),
    /// A letter appears in more than one plugboard pair.
    #[error("letter {0:?} cannot be swapped more than once")]
    DuplicatePlugLetter(char),
    /// The engine was configured without any rotors.
    #[error("at least one rotor is required")]
    NoRotors,
}
