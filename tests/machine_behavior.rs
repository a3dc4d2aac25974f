//! End-to-end behavior tests for the assembled machine.
//!
//! All expected strings are frozen vectors: any change in output means the
//! signal path or the stepping rule regressed. The three-rotor `I,II,III`
//! at `A,A,A` with reflector `B` configuration doubles as the reference
//! scenario — one keystroke of `A` must produce `G` and leave the windows
//! at `B,B,C`.

use enigma::Enigma;

fn encrypt_str(machine: &mut Enigma, text: &str) -> String {
    text.chars().map(|c| machine.encrypt(c)).collect()
}

fn windows_str(machine: &Enigma) -> String {
    machine.windows().into_iter().collect()
}

#[test]
fn reference_scenario_single_keystroke() {
    let mut machine = Enigma::new(&[("I", 'A'), ("II", 'A'), ("III", 'A')], "B", &[]).unwrap();
    assert_eq!(machine.encrypt('A'), 'G');
    assert_eq!(windows_str(&machine), "BBC");
}

#[test]
fn frozen_vector_standard_rotors() {
    let mut machine = Enigma::new(&[("I", 'A'), ("II", 'A'), ("III", 'A')], "B", &[]).unwrap();
    assert_eq!(encrypt_str(&mut machine, "HELLOWORLD"), "EQYUKJUPST");
    assert_eq!(windows_str(&machine), "LKU");
}

#[test]
fn frozen_vector_with_plugboard_and_reflector_c() {
    let mut machine = Enigma::new(
        &[("II", 'B'), ("IV", 'Q'), ("VI", 'Z')],
        "C",
        &["AB", "CD", "EF"],
    )
    .unwrap();
    assert_eq!(
        encrypt_str(&mut machine, "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"),
        "RSXFNSCHZKXNGDHOMLRIONTMPRXWFYYIUKU"
    );
    assert_eq!(windows_str(&machine), "KCR");
}

#[test]
fn frozen_vector_thin_reflector_with_beta() {
    let mut machine =
        Enigma::new(&[("BETA", 'K'), ("V", 'V'), ("VIII", 'H')], "BT", &["XQ"]).unwrap();
    assert_eq!(encrypt_str(&mut machine, "ENIGMA"), "XTMUWB");
    assert_eq!(windows_str(&machine), "QBT");
}

#[test]
fn frozen_vector_single_rotor() {
    let mut machine = Enigma::new(&[("III", 'V')], "CT", &[]).unwrap();
    assert_eq!(encrypt_str(&mut machine, "AAAAA"), "FDHVB");
    assert_eq!(windows_str(&machine), "F");
}

#[test]
fn frozen_vector_long_run_crosses_notches() {
    // 30 keystrokes carry rotor II across its E notch, which steps rotor I
    // an extra position on the following keystroke.
    let mut machine = Enigma::new(&[("I", 'A'), ("II", 'A'), ("III", 'A')], "B", &[]).unwrap();
    let input: String = std::iter::repeat('A').take(30).collect();
    assert_eq!(
        encrypt_str(&mut machine, &input),
        "GTXTASOKAMJDFPOMZXXCRJMDUCFWBW"
    );
    assert_eq!(windows_str(&machine), "FEI");
}

#[test]
fn window_trajectory_shows_notch_coupling() {
    let mut machine = Enigma::new(&[("I", 'A'), ("II", 'A'), ("III", 'A')], "B", &[]).unwrap();
    let expected = ["BBC", "CCE", "DDG", "EEI", "GFK", "HGM", "IHO", "JIQ"];
    for want in expected {
        machine.encrypt('A');
        assert_eq!(windows_str(&machine), want);
    }
}

#[test]
fn identical_machines_produce_identical_streams() {
    let config: (&[(&str, char)], &str, &[&str]) = (
        &[("VII", 'M'), ("III", 'Z'), ("V", 'Q')],
        "C",
        &["AZ", "BY"],
    );
    let mut first = Enigma::new(config.0, config.1, config.2).unwrap();
    let mut second = Enigma::new(config.0, config.1, config.2).unwrap();
    for c in "ATTACKATDAWNATTACKATDAWN".chars() {
        assert_eq!(first.encrypt(c), second.encrypt(c));
    }
    assert_eq!(first.windows(), second.windows());
}

#[test]
fn output_is_always_uppercase_letter() {
    let mut machine =
        Enigma::new(&[("IV", 'J'), ("VIII", 'U')], "CT", &["KL", "MN"]).unwrap();
    for i in 0..26u8 {
        let out = machine.encrypt((b'A' + i) as char);
        assert!(out.is_ascii_uppercase(), "non-letter output {:?}", out);
    }
}
