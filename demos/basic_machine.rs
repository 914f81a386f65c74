//! Basic Machine
//!
//! This example encodes a message and decodes it again on a second machine
//! built from the same settings.
//!
//! Key concepts:
//! - Assembling a machine from settings strings
//! - Encoding and decoding are the same operation
//! - Rotor positions advance with every letter
//! - Watching the middle rotor double-step
//! - Checking a whole key sheet before building from it
//!
//! Run with: cargo run --example basic_machine

use enigma_rotor::builder::create_machine;
use enigma_rotor::core::Symbol;
use enigma_rotor::settings::{is_plugboard_violation, violations, MachineSettings};

fn letters(positions: &[Symbol]) -> String {
    positions.iter().map(|s| s.as_char()).collect()
}

fn main() {
    println!("=== Basic Machine Example ===\n");

    let settings = ("I II III", "B", "01 01 01", "A D U");
    let plugs = ["KI", "XN", "FL"];

    let mut sender = create_machine(settings.0, settings.1, settings.2, settings.3, &plugs)
        .expect("settings are valid");
    let ciphertext = sender.encode("ATTACKATDAWN").expect("plaintext is A-Z");

    println!("Plaintext:  ATTACKATDAWN");
    println!("Ciphertext: {ciphertext}");
    println!("Positions after encoding: {}\n", letters(&sender.positions()));

    let mut receiver = create_machine(settings.0, settings.1, settings.2, settings.3, &plugs)
        .expect("settings are valid");
    let plaintext = receiver.encode(&ciphertext).expect("ciphertext is A-Z");
    println!("Decoded:    {plaintext}\n");

    println!("Stepping from A D U:");
    receiver.reset();
    for step in receiver.trace(4).steps() {
        let marker = if step.double_step { "  <- double step" } else { "" };
        println!("  {} -> {}{marker}", letters(&step.before), letters(&step.after));
    }

    println!("\nChecking a key sheet with mistakes:");
    let sheet = MachineSettings::new("I II VI", "B", "01 01 30", "A D U")
        .with_plugboard(["KI", "IX", "FF"]);
    for violation in violations(&sheet.validate()) {
        let area = if is_plugboard_violation(&violation) {
            "plugboard"
        } else {
            "rotors"
        };
        println!("  [{area}] {violation}");
    }

    println!("\n=== Example Complete ===");
}
