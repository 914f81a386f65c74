//! Serializable machine settings.
//!
//! `MachineSettings` is the daily key sheet in data form: the same strings
//! an operator would read off (`"Beta Gamma V"`, `"04 02 14"`, ...), plus any
//! reflector rewiring. Settings round-trip through JSON so search drivers can
//! ship candidate configurations around and report the ones that matched.
//!
//! Settings never capture rotor positions mid-message; a machine built from
//! them always starts at `initial_positions`.

pub mod error;
pub mod validation;

pub use error::SettingsError;
pub use validation::{is_plugboard_violation, validate, violations, SettingsValidation};

use crate::builder::{
    parse_pair, parse_positions, parse_rings, parse_rotors, BuildError, MachineBuilder,
};
use crate::core::Machine;
use serde::{Deserialize, Serialize};

/// Settings for one machine, in operator notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Space-separated rotor names, leftmost first
    pub rotors: String,

    /// Reflector name
    pub reflector: String,

    /// Space-separated ring settings `01`–`26`, one per rotor
    pub ring_settings: String,

    /// Space-separated starting letters, one per rotor
    pub initial_positions: String,

    /// Two-letter plugboard leads
    #[serde(default)]
    pub plugboard: Vec<String>,

    /// Two-letter reflector pairs swapped in after the reflector is built
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reflector_rewiring: Vec<String>,
}

impl MachineSettings {
    pub fn new(
        rotors: impl Into<String>,
        reflector: impl Into<String>,
        ring_settings: impl Into<String>,
        initial_positions: impl Into<String>,
    ) -> Self {
        Self {
            rotors: rotors.into(),
            reflector: reflector.into(),
            ring_settings: ring_settings.into(),
            initial_positions: initial_positions.into(),
            plugboard: Vec::new(),
            reflector_rewiring: Vec::new(),
        }
    }

    /// Replace the plugboard leads.
    pub fn with_plugboard<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.plugboard = pairs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the reflector rewiring pairs.
    pub fn with_rewiring<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.reflector_rewiring = pairs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rotors(mut self, rotors: impl Into<String>) -> Self {
        self.rotors = rotors.into();
        self
    }

    pub fn with_reflector(mut self, reflector: impl Into<String>) -> Self {
        self.reflector = reflector.into();
        self
    }

    pub fn with_ring_settings(mut self, ring_settings: impl Into<String>) -> Self {
        self.ring_settings = ring_settings.into();
        self
    }

    pub fn with_positions(mut self, initial_positions: impl Into<String>) -> Self {
        self.initial_positions = initial_positions.into();
        self
    }

    /// Check every field, collecting all violations rather than the first.
    pub fn validate(&self) -> SettingsValidation {
        validate(self)
    }

    /// Build a fresh machine. Fails on the first bad setting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::settings::MachineSettings;
    ///
    /// let settings = MachineSettings::new("I II III", "B", "01 01 01", "A A A");
    /// let mut machine = settings.build().unwrap();
    /// assert_eq!(machine.encode("AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn build(&self) -> Result<Machine, BuildError> {
        let rewiring = self
            .reflector_rewiring
            .iter()
            .map(|pair| parse_pair(pair))
            .collect::<Result<Vec<_>, _>>()?;

        MachineBuilder::new()
            .rotors(parse_rotors(&self.rotors)?)
            .reflector(self.reflector.parse()?)
            .rings(parse_rings(&self.ring_settings)?)
            .positions(parse_positions(&self.initial_positions)?)
            .plugs(self.plugboard.iter().cloned())
            .rewire_reflector(rewiring)
            .build()
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SettingsError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(|e| SettingsError::DeserializationFailed(e.to_string()))
    }
}
