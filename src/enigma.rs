//! Enigma: the machine orchestrator.
//!
//! Owns the ordered rotor bank, the reflector and the plugboard, and
//! drives the per-keystroke stepping rule plus the bidirectional signal
//! path. One call to [`Enigma::encrypt`] processes exactly one letter and
//! leaves the machine ready for the next.

use tracing::debug;

use crate::error::ConfigurationError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// The assembled cipher machine.
///
/// Rotors are ordered left to right as configured; the rightmost rotor is
/// the fast one. The only state that changes over the machine's lifetime
/// is the rotors' window and pass-flag state, advanced once per processed
/// character.
#[derive(Debug)]
pub struct Enigma {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    /// Builds a machine from raw configuration strings.
    ///
    /// All validation happens here; a machine that constructs successfully
    /// can never fail while encrypting.
    ///
    /// # Parameters
    /// - `rotor_specs`: `(model, initial window)` pairs, leftmost rotor first.
    /// - `reflector`: Reflector model name (`"B"`, `"C"`, `"BT"`, `"CT"`).
    /// - `plug_pairs`: Plugboard swap pairs, at most 10 two-character strings.
    ///
    /// # Errors
    /// Any [`ConfigurationError`]: unknown rotor or reflector model, invalid
    /// window letter, invalid plugboard pairs, or an empty rotor list.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Enigma;
    ///
    /// let mut machine = Enigma::new(
    ///     &[("I", 'A'), ("II", 'A'), ("III", 'A')],
    ///     "B",
    ///     &[],
    /// ).unwrap();
    /// assert_eq!(machine.encrypt('A'), 'G');
    /// ```
    pub fn new(
        rotor_specs: &[(&str, char)],
        reflector: &str,
        plug_pairs: &[&str],
    ) -> Result<Self, ConfigurationError> {
        if rotor_specs.is_empty() {
            return Err(ConfigurationError::NoRotors);
        }
        let rotors = rotor_specs
            .iter()
            .map(|&(model, window)| Rotor::new(model, window))
            .collect::<Result<Vec<_>, _>>()?;
        let reflector = Reflector::new(reflector)?;
        let plugboard = Plugboard::new(plug_pairs)?;

        debug!(
            rotors = rotor_specs.len(),
            reflector = %reflector.model(),
            plug_pairs = plugboard.len(),
            "enigma machine configured"
        );

        Ok(Enigma {
            rotors,
            reflector,
            plugboard,
        })
    }

    /// Encrypts one uppercase letter and advances the machine state.
    ///
    /// The signal path is: plugboard, rotor stepping, rotor chain right to
    /// left, reflector, rotor chain left to right (each rotor self-advances
    /// on this leg), plugboard.
    ///
    /// Callers must supply a single uppercase A-Z letter; anything else is
    /// outside the machine's alphabet and must be filtered upstream.
    ///
    /// # Parameters
    /// - `letter`: One uppercase letter.
    ///
    /// # Returns
    /// The enciphered letter.
    pub fn encrypt(&mut self, letter: char) -> char {
        let mut c = self.plugboard.swap(letter);
        self.step_rotors();
        for rotor in self.rotors.iter().rev() {
            c = rotor.forward_pass(c);
        }
        c = self.reflector.reflect(c);
        for rotor in self.rotors.iter_mut() {
            c = rotor.backward_pass(c);
        }
        self.plugboard.swap(c)
    }

    /// Applies the stepping rule ahead of the signal path.
    ///
    /// The rightmost rotor always advances. Every other rotor, scanned from
    /// rightmost-but-one toward the leftmost, advances when its immediate
    /// right neighbor raised its pass flag during the previous keystroke's
    /// exit pass. Propagation moves at most one position per neighbor
    /// trigger per keystroke.
    fn step_rotors(&mut self) {
        let last = self.rotors.len() - 1;
        self.rotors[last].advance();
        for i in (0..last).rev() {
            if self.rotors[i + 1].ready_to_propagate() {
                self.rotors[i].advance();
            }
        }
    }

    /// Returns the current window letters, leftmost rotor first.
    pub fn windows(&self) -> Vec<char> {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Returns the number of rotors in the bank.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }
}
