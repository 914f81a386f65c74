//! Crib Search
//!
//! This example recovers an unknown reflector and an unknown set of
//! starting positions by decoding under every candidate and keeping the
//! ones that contain a known word.
//!
//! Key concepts:
//! - Every candidate gets a freshly built machine
//! - Candidate generators for reflectors and positions
//! - Structured logging of the search (set RUST_LOG=debug to see hits)
//!
//! Run with: RUST_LOG=info cargo run --example crib_search

use enigma_rotor::search::{position_candidates, reflector_candidates, search, Crib};
use enigma_rotor::settings::MachineSettings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    println!("=== Crib Search Example ===\n");

    println!("Unknown reflector, crib SECRETS:");
    let base = MachineSettings::new("Beta Gamma V", "A", "04 02 14", "M J M")
        .with_plugboard(["KI", "XN", "FL"]);
    let crib = Crib::new("SECRETS").expect("crib is A-Z");
    let hits = search(
        reflector_candidates(&base),
        "DMEXBMKYCVPNQBEDHXVPZGKMTFFBJRPJTLHLCHOTKOYXGGHZ",
        &crib,
    )
    .expect("ciphertext is A-Z");
    for hit in &hits {
        println!("  reflector {}: {}", hit.settings.reflector, hit.plaintext);
    }

    println!("\nUnknown positions, crib UNIVERSITY:");
    let base = MachineSettings::new("Beta I III", "B", "23 02 10", "A A A")
        .with_plugboard(["VH", "PT", "ZG", "BJ", "EY", "FS"]);
    let crib = Crib::new("UNIVERSITY").expect("crib is A-Z");
    let hits = search(
        position_candidates(&base),
        "CMFSUPKNCBMUYEQVVDYKLRQZTPUFHSWWAKTUGXMPAMYAFITXIJKMH",
        &crib,
    )
    .expect("ciphertext is A-Z");
    for hit in &hits {
        println!("  positions {}: {}", hit.settings.initial_positions, hit.plaintext);
        match hit.settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("  could not serialize settings: {e}"),
        }
    }

    println!("\n=== Example Complete ===");
}
