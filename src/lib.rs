//! Enigma rotor cipher machine simulator.
//!
//! Simulates an electromechanical letter-substitution cipher: a
//! configurable bank of rotating wired rotors, a fixed reflector and a
//! plugboard, composed into a per-character substitution with mutating
//! internal state.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (disjoint letter-swap pairs — applied entering and leaving)
//!     ↕
//! Rotor       (fixed wiring permutation + mutable window + notch state)
//!     ↕ N rotors in a bank, rightmost is the fast rotor
//! Reflector   (fixed involutive permutation — turns the signal around)
//!     ↕
//! Enigma      (orchestrator — stepping rule + bidirectional signal path)
//! ```
//!
//! Signal path per keystroke: plugboard, rotor stepping, rotor chain right
//! to left, reflector, rotor chain left to right, plugboard.
//!
//! # Examples
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new(
//!     &[("I", 'A'), ("II", 'A'), ("III", 'A')],
//!     "B",
//!     &["QW", "ER"],
//! ).unwrap();
//!
//! let ciphertext: String = "HELLO".chars().map(|c| machine.encrypt(c)).collect();
//! assert_eq!(ciphertext.len(), 5);
//! ```
//!
//! The machine mutates on every keystroke, so the same plaintext letter
//! enciphers differently at each position:
//!
//! ```
//! use enigma::Enigma;
//!
//! let mut machine = Enigma::new(&[("I", 'A'), ("II", 'A'), ("III", 'A')], "B", &[]).unwrap();
//! let a = machine.encrypt('A');
//! let b = machine.encrypt('A');
//! assert_ne!(a, b);
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod enigma;
mod plugboard;
mod reflector;
mod rotor;

pub use enigma::Enigma;
pub use error::ConfigurationError;
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorModel};
pub use rotor::{Rotor, RotorModel};
