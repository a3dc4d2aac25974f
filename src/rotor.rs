//! Rotor: wired wheel with a mutable rotation offset.
//!
//! Implements the stateful unit of the machine. Each rotor holds a fixed
//! 26-letter wiring permutation, the letter currently visible in its
//! window, and a pass flag that tells the engine whether the rotor to its
//! left should step on the next keystroke.
//!
//! The exit pass carries two embedded side effects: the rotor always
//! advances itself after computing its output, and the pass flag is
//! recomputed from the new window position. The exit pass also reuses the
//! forward wiring table rather than its positional inverse; both behaviors
//! are kept exactly as the machine being modeled implements them, which
//! makes the overall substitution non-reciprocal.

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::error::ConfigurationError;

/// Supported rotor models.
///
/// Each model selects a fixed wiring permutation and a notch set of zero,
/// one or two letters. `Beta` and `Gamma` have no notch and never signal
/// their left neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorModel {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorModel {
    /// Returns the wiring permutation for this model.
    ///
    /// Index 0 is the letter that `A` maps to at offset zero.
    pub(crate) fn wiring(self) -> &'static [u8; 26] {
        match self {
            RotorModel::I => b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorModel::II => b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorModel::III => b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorModel::IV => b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorModel::V => b"VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorModel::VI => b"JPGVOUMFYQBENHZRDKASXLICTW",
            RotorModel::VII => b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorModel::VIII => b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
            RotorModel::Beta => b"LEYJVCNIXWPBQMDRTAKZGFUHOS",
            RotorModel::Gamma => b"FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }

    /// Returns the window letters at which this rotor signals its left
    /// neighbor to advance.
    pub(crate) fn notches(self) -> &'static [char] {
        match self {
            RotorModel::I => &['Q'],
            RotorModel::II => &['E'],
            RotorModel::III => &['V'],
            RotorModel::IV => &['J'],
            RotorModel::V => &['H'],
            RotorModel::VI | RotorModel::VII | RotorModel::VIII => &['H', 'U'],
            RotorModel::Beta | RotorModel::Gamma => &[],
        }
    }
}

impl FromStr for RotorModel {
    type Err = ConfigurationError;

    /// Parses a model name, trimmed and case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Ok(RotorModel::I),
            "II" => Ok(RotorModel::II),
            "III" => Ok(RotorModel::III),
            "IV" => Ok(RotorModel::IV),
            "V" => Ok(RotorModel::V),
            "VI" => Ok(RotorModel::VI),
            "VII" => Ok(RotorModel::VII),
            "VIII" => Ok(RotorModel::VIII),
            "BETA" => Ok(RotorModel::Beta),
            "GAMMA" => Ok(RotorModel::Gamma),
            _ => Err(ConfigurationError::UnknownRotorModel(s.trim().to_string())),
        }
    }
}

impl fmt::Display for RotorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RotorModel::I => "I",
            RotorModel::II => "II",
            RotorModel::III => "III",
            RotorModel::IV => "IV",
            RotorModel::V => "V",
            RotorModel::VI => "VI",
            RotorModel::VII => "VII",
            RotorModel::VIII => "VIII",
            RotorModel::Beta => "BETA",
            RotorModel::Gamma => "GAMMA",
        };
        f.write_str(name)
    }
}

/// A single rotor: fixed wiring, mutable window, per-keystroke pass flag.
///
/// Only `window` and `pass` ever change after construction, and only while
/// a character is being encrypted.
pub struct Rotor {
    model: RotorModel,
    wiring: &'static [u8; 26],
    notches: &'static [char],
    window: char,
    pass: bool,
}

impl Rotor {
    /// Creates a rotor from a model name and an initial window letter.
    ///
    /// The model name is trimmed and case-insensitive; the window is
    /// normalized to uppercase.
    ///
    /// # Parameters
    /// - `model`: Rotor model name (`"I"` through `"VIII"`, `"BETA"`, `"GAMMA"`).
    /// - `window`: Initial window letter, `a`-`z` or `A`-`Z`.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownRotorModel`] for an unsupported
    /// model and [`ConfigurationError::InvalidWindow`] if the window is not
    /// a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::new("III", 'a').unwrap();
    /// assert_eq!(rotor.window(), 'A');
    /// ```
    pub fn new(model: &str, window: char) -> Result<Self, ConfigurationError> {
        let model: RotorModel = model.parse()?;
        let window = window.to_ascii_uppercase();
        if !window.is_ascii_uppercase() {
            return Err(ConfigurationError::InvalidWindow(window));
        }
        Ok(Rotor {
            model,
            wiring: model.wiring(),
            notches: model.notches(),
            window,
            pass: false,
        })
    }

    /// Returns this rotor's model.
    pub fn model(&self) -> RotorModel {
        self.model
    }

    /// Returns the letter currently visible in the window.
    pub fn window(&self) -> char {
        self.window
    }

    /// Entry-side traversal: the signal enters from the right of the rotor.
    ///
    /// The current window offset is added to the input position before the
    /// wiring lookup. No state changes.
    ///
    /// # Parameters
    /// - `input`: One uppercase letter.
    ///
    /// # Returns
    /// The substituted letter.
    pub fn forward_pass(&self, input: char) -> char {
        let offset = alphabet::index_of(self.window);
        let idx = (alphabet::index_of(input) + offset).rem_euclid(alphabet::LEN);
        self.wiring[idx as usize] as char
    }

    /// Exit-side traversal after reflection, with embedded stepping.
    ///
    /// The window offset is subtracted from the input position and looked
    /// up in the same forward wiring table (not its inverse). After the
    /// output is computed the rotor advances itself once and the pass flag
    /// is recomputed from the new window position.
    ///
    /// # Parameters
    /// - `input`: One uppercase letter.
    ///
    /// # Returns
    /// The substituted letter.
    pub fn backward_pass(&mut self, input: char) -> char {
        let offset = alphabet::index_of(self.window);
        let idx = (alphabet::index_of(input) - offset).rem_euclid(alphabet::LEN);
        let output = self.wiring[idx as usize] as char;
        self.advance();
        self.pass = self.notches.contains(&self.window);
        output
    }

    /// Advances the window by one letter, wrapping Z to A.
    pub fn advance(&mut self) {
        self.window = alphabet::letter_at(alphabet::index_of(self.window) + 1);
    }

    /// Reports whether the rotor to this rotor's left should step on the
    /// next keystroke.
    ///
    /// The flag reflects the notch check performed at the end of the most
    /// recent exit pass.
    pub fn ready_to_propagate(&self) -> bool {
        self.pass
    }
}

impl fmt::Debug for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotor")
            .field("model", &self.model)
            .field("window", &self.window)
            .field("pass", &self.pass)
            .finish()
    }
}
