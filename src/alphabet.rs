//! Index arithmetic over the 26-letter uppercase alphabet.
//!
//! All rotor and reflector math works on positions 0..26; these helpers
//! convert between letters and positions with wraparound in both
//! directions.

/// Number of letters in the machine alphabet.
pub(crate) const LEN: i32 = 26;

/// Returns the position of `letter` in the alphabet (A = 0, Z = 25).
///
/// Callers must supply an uppercase ASCII letter; this is the contract of
/// the whole signal path (the CLI filters input before it gets here).
pub(crate) fn index_of(letter: char) -> i32 {
    (letter as i32) - ('A' as i32)
}

/// Returns the letter at position `index`, wrapping modulo 26.
///
/// Negative indices wrap from the end, so `letter_at(-1) == 'Z'`.
pub(crate) fn letter_at(index: i32) -> char {
    (b'A' + index.rem_euclid(LEN) as u8) as char
}
