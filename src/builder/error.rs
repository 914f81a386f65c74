//! Build errors for machine construction.

use crate::core::CoreError;
use thiserror::Error;

/// Errors that can occur when assembling a machine from settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Unknown {kind} {name:?}")]
    UnknownComponent { kind: &'static str, name: String },

    #[error("Expected {expected} {setting} (one per rotor), found {found}")]
    SettingsMismatch {
        setting: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid ring setting {0:?}: expected a number from 01 to 26")]
    InvalidRingSetting(String),

    #[error("Invalid rotor position {0:?}: expected a single letter A-Z")]
    InvalidPosition(String),

    #[error("Invalid rewiring pair {0:?}: expected two distinct letters A-Z")]
    InvalidRewiring(String),

    #[error("No rotors specified. Add at least one rotor")]
    NoRotors,

    #[error("Reflector not specified. Call .reflector(name) before .build()")]
    MissingReflector,

    #[error(transparent)]
    Core(#[from] CoreError),
}
