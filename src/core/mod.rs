//! Core machine components.
//!
//! This module contains the cipher machine itself:
//! - `Symbol`: validated alphabet letters with wrap-around arithmetic
//! - `Wiring`: total substitution tables shared by rotors and reflectors
//! - `Plugboard` and `Lead`: involutive letter swaps at the machine's entry
//! - `Rotor`: a wiring with position, ring setting and optional notch
//! - `Reflector`: a self-paired wiring that can be partially rewired
//! - `Machine`: the stepping state machine and the encode pipeline
//!
//! Nothing here knows about component names or settings strings; that is
//! the job of the [`builder`](crate::builder) module.

mod error;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
mod stepping;
mod substitution;
mod symbol;
mod wiring;

pub use error::CoreError;
pub use machine::Machine;
pub use plugboard::{Lead, Plugboard, MAX_LEADS};
pub use reflector::Reflector;
pub use rotor::{Direction, Notch, Rotor, MAX_RING, MIN_RING};
pub use stepping::{StepHistory, StepOutcome};
pub use substitution::Substitution;
pub use symbol::{Symbol, ALPHABET_LEN};
pub use wiring::Wiring;
