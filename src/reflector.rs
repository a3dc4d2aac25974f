//! Reflector: fixed involutive permutation with no fixed point.
//!
//! The reflector sends the signal back through the rotor stack from the
//! opposite side. Applying it twice returns the original letter and no
//! letter maps to itself, so the signal never exits where it entered.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::ConfigurationError;

/// Supported reflector models.
///
/// `Bt` and `Ct` are the thin variants used alongside the `Beta` and
/// `Gamma` rotors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorModel {
    B,
    C,
    Bt,
    Ct,
}

impl ReflectorModel {
    /// Returns the permutation table for this model.
    pub(crate) fn permutation(self) -> &'static [u8; 26] {
        match self {
            ReflectorModel::B => b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorModel::C => b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
            ReflectorModel::Bt => b"ENKQAUYWJICOPBLMDXZVFTHRGS",
            ReflectorModel::Ct => b"RDOBJNTKVEHMLFCWZAXGYIPSUQ",
        }
    }
}

impl FromStr for ReflectorModel {
    type Err = ConfigurationError;

    /// Parses a model name, trimmed and case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(ReflectorModel::B),
            "C" => Ok(ReflectorModel::C),
            "BT" => Ok(ReflectorModel::Bt),
            "CT" => Ok(ReflectorModel::Ct),
            _ => Err(ConfigurationError::UnknownReflectorModel(
                s.trim().to_string(),
            )),
        }
    }
}

impl fmt::Display for ReflectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectorModel::B => "B",
            ReflectorModel::C => "C",
            ReflectorModel::Bt => "BT",
            ReflectorModel::Ct => "CT",
        };
        f.write_str(name)
    }
}

/// A fixed reflector. Stateless after construction.
pub struct Reflector {
    model: ReflectorModel,
    permutation: &'static [u8; 26],
}

impl Reflector {
    /// Creates a reflector from a model name.
    ///
    /// # Parameters
    /// - `model`: Reflector model name (`"B"`, `"C"`, `"BT"` or `"CT"`).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownReflectorModel`] for anything
    /// else.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Reflector;
    ///
    /// let reflector = Reflector::new("B").unwrap();
    /// assert_eq!(reflector.reflect('A'), 'Y');
    /// assert_eq!(reflector.reflect('Y'), 'A');
    /// ```
    pub fn new(model: &str) -> Result<Self, ConfigurationError> {
        let model: ReflectorModel = model.parse()?;
        Ok(Reflector {
            model,
            permutation: model.permutation(),
        })
    }

    /// Returns this reflector's model.
    pub fn model(&self) -> ReflectorModel {
        self.model
    }

    /// Reflects one letter. Pure, total over A-Z, no side effects.
    pub fn reflect(&self, letter: char) -> char {
        self.permutation[alphabet::index_of(letter) as usize] as char
    }
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector").field("model", &self.model).finish()
    }
}
