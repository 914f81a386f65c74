//! Enigma Rotor: an electromechanical rotor cipher machine
//!
//! The machine is a chain of substitutions. Each key press first steps the
//! rotors, then sends the letter through the plugboard, right to left
//! through the rotors, into the reflector, back left to right through the
//! rotors and out through the plugboard again. Because the reflector is
//! self-paired, decoding is the same operation as encoding.
//!
//! # Core Concepts
//!
//! - **Components**: `Plugboard`, `Rotor` and `Reflector` in [`core`](crate::core)
//! - **Stepping**: the rotor state machine, including the double-step anomaly
//! - **Builder**: named wirings and assembly from settings strings
//! - **Settings**: serializable key sheets with all-at-once validation
//! - **Search**: crib matching over candidate settings
//!
//! # Example
//!
//! ```rust
//! use enigma_rotor::builder::create_machine;
//!
//! let mut machine = create_machine("I II III", "B", "01 01 01", "A A A", &[]).unwrap();
//! let ciphertext = machine.encode("HELLO").unwrap();
//!
//! let mut receiver = create_machine("I II III", "B", "01 01 01", "A A A", &[]).unwrap();
//! assert_eq!(receiver.encode(&ciphertext).unwrap(), "HELLO");
//! ```

pub mod builder;
pub mod core;
pub mod search;
pub mod settings;

// Re-export commonly used types
pub use crate::builder::{create_machine, BuildError, MachineBuilder};
pub use crate::core::{CoreError, Machine, Symbol};
pub use crate::settings::MachineSettings;
