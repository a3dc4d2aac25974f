//! Command-line front end for the Enigma machine.
//!
//! Mirrors the classic operator setup: rotor models and initial window
//! positions left to right, a reflector model and optional plugboard
//! pairs. Input is read from stdin line by line; only ASCII letters are
//! fed to the machine and everything else is dropped.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use enigma::Enigma;

#[derive(Parser, Debug)]
#[command(name = "enigma", version, about = "Enigma rotor cipher machine")]
struct Cli {
    #[arg(help = "Plugboard swaps (pairs of characters)")]
    plugs: Vec<String>,

    #[arg(
        short = 'R',
        long,
        required = true,
        num_args = 1..,
        help = "Rotor models in order from left to right"
    )]
    rotors: Vec<String>,

    #[arg(
        short = 'M',
        long,
        required = true,
        num_args = 1..,
        help = "Initial rotor window positions"
    )]
    mode: Vec<String>,

    #[arg(long, help = "Reflector model (B, C, BT or CT)")]
    reflector: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut machine = build_machine(&cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input line")?;
        let ciphertext: String = line
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| machine.encrypt(c.to_ascii_uppercase()))
            .collect();
        writeln!(out, "{}", ciphertext)?;
    }
    Ok(())
}

/// Validates the raw argument strings and assembles the machine.
fn build_machine(cli: &Cli) -> anyhow::Result<Enigma> {
    if cli.rotors.len() != cli.mode.len() {
        bail!(
            "got {} rotors but {} window positions; each rotor needs exactly one",
            cli.rotors.len(),
            cli.mode.len()
        );
    }

    let mut specs = Vec::with_capacity(cli.rotors.len());
    for (model, window) in cli.rotors.iter().zip(cli.mode.iter()) {
        let window = window.trim();
        let mut chars = window.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => bail!("window position must be a single letter, got {:?}", window),
        };
        specs.push((model.as_str(), letter));
    }

    let plugs: Vec<&str> = cli.plugs.iter().map(String::as_str).collect();
    Ok(Enigma::new(&specs, &cli.reflector, &plugs)?)
}
