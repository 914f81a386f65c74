//! Named rotor and reflector wirings.

use crate::builder::error::BuildError;
use crate::core::{Notch, Reflector, Rotor, Symbol, Wiring};
use std::fmt;
use std::str::FromStr;

/// The rotors the factory knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotorName {
    I,
    II,
    III,
    IV,
    V,
    Beta,
    Gamma,
}

impl RotorName {
    pub const ALL: [RotorName; 7] = [
        Self::I,
        Self::II,
        Self::III,
        Self::IV,
        Self::V,
        Self::Beta,
        Self::Gamma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
            Self::Beta => "Beta",
            Self::Gamma => "Gamma",
        }
    }

    /// Right-hand contacts in alphabet order.
    fn letters(self) -> &'static str {
        match self {
            Self::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            Self::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            Self::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            Self::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            Self::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
            Self::Beta => "LEYJVCNIXWPBQMDRTAKZGFUHOS",
            Self::Gamma => "FSOKANUERHMBTIYCWLQPZXVGJD",
        }
    }

    fn notch_letter(self) -> Option<char> {
        match self {
            Self::I => Some('Q'),
            Self::II => Some('E'),
            Self::III => Some('V'),
            Self::IV => Some('J'),
            Self::V => Some('Z'),
            Self::Beta | Self::Gamma => None,
        }
    }

    /// Build a fresh rotor at position `A`, ring `01`.
    pub fn build(self) -> Result<Rotor, BuildError> {
        let wiring = Wiring::from_letters(self.letters())?;
        let notch = match self.notch_letter() {
            Some(c) => Notch::Notch(Symbol::try_from(c)?),
            None => Notch::NoNotch,
        };
        Ok(Rotor::new(self.as_str(), wiring, notch))
    }
}

impl FromStr for RotorName {
    type Err = BuildError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .ok_or_else(|| BuildError::UnknownComponent {
                kind: "rotor",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for RotorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reflectors the factory knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReflectorName {
    A,
    B,
    C,
}

impl ReflectorName {
    pub const ALL: [ReflectorName; 3] = [Self::A, Self::B, Self::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    fn letters(self) -> &'static str {
        match self {
            Self::A => "EJMZALYXVBWFCRQUONTSPIKHGD",
            Self::B => "YRUHQSLDPXNGOKMIEBFZCWVJAT",
            Self::C => "FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }

    pub fn build(self) -> Result<Reflector, BuildError> {
        let wiring = Wiring::from_letters(self.letters())?;
        Ok(Reflector::new(self.as_str(), wiring)?)
    }
}

impl FromStr for ReflectorName {
    type Err = BuildError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .ok_or_else(|| BuildError::UnknownComponent {
                kind: "reflector",
                name: name.to_string(),
            })
    }
}

impl fmt::Display for ReflectorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
