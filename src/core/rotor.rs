//! Rotors.
//!
//! A rotor is a fixed wiring turning inside the machine. Its `position` is
//! the letter showing in the window and advances as keys are pressed; the
//! `ring` setting offsets the wiring against that letter. Notched rotors
//! carry their right neighbour's turnover to the rotor on their left.

use super::error::CoreError;
use super::symbol::Symbol;
use super::wiring::Wiring;
use serde::{Deserialize, Serialize};

/// Lowest valid ring setting.
pub const MIN_RING: u8 = 1;
/// Highest valid ring setting.
pub const MAX_RING: u8 = 26;

/// Whether a rotor can carry a turnover to its left neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notch {
    /// Thin rotors (Beta, Gamma) never trigger a turnover.
    NoNotch,
    /// Turnover happens when the rotor leaves this position.
    Notch(Symbol),
}

/// Direction the signal travels through a rotor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From the plugboard towards the reflector.
    RightToLeft,
    /// From the reflector back towards the plugboard.
    LeftToRight,
}

/// A wiring with a mutable position and fixed ring setting.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::core::{Direction, Notch, Rotor, Symbol, Wiring};
///
/// let wiring = Wiring::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
/// let q = Symbol::try_from('Q').unwrap();
/// let mut rotor = Rotor::new("I", wiring, Notch::Notch(q));
///
/// let a = Symbol::try_from('A').unwrap();
/// assert_eq!(rotor.encode(a, Direction::RightToLeft).unwrap().as_char(), 'E');
///
/// rotor.set_position(q);
/// assert!(rotor.is_on_notch());
/// rotor.rotate();
/// assert_eq!(rotor.position().as_char(), 'R');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: Wiring,
    notch: Notch,
    ring: u8,
    position: Symbol,
}

impl Rotor {
    /// Create a rotor at position `A` with ring setting `01`.
    pub fn new(name: impl Into<String>, wiring: Wiring, notch: Notch) -> Self {
        Self {
            name: name.into(),
            wiring,
            notch,
            ring: MIN_RING,
            position: Symbol::A,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Symbol {
        self.position
    }

    pub fn set_position(&mut self, position: Symbol) {
        self.position = position;
    }

    pub fn ring(&self) -> u8 {
        self.ring
    }

    /// Set the ring setting. Values outside `1..=26` are rejected.
    pub fn set_ring(&mut self, ring: u8) -> Result<(), CoreError> {
        if !(MIN_RING..=MAX_RING).contains(&ring) {
            return Err(CoreError::InvalidRing(ring));
        }
        self.ring = ring;
        Ok(())
    }

    pub fn notch(&self) -> Notch {
        self.notch
    }

    /// The notch letter, if this rotor has one.
    pub fn has_notch(&self) -> Option<Symbol> {
        match self.notch {
            Notch::Notch(symbol) => Some(symbol),
            Notch::NoNotch => None,
        }
    }

    /// True when the rotor carries a notch and is currently sitting on it.
    pub fn is_on_notch(&self) -> bool {
        self.has_notch() == Some(self.position)
    }

    /// Advance one position, wrapping `Z` to `A`.
    pub fn rotate(&mut self) {
        self.position = self.position.shifted(1);
    }

    /// Pass a symbol through the rotor in the given direction.
    ///
    /// The input is offset by the rotor's rotation relative to its ring,
    /// looked up in the wiring, and the offset is undone on the way out.
    pub fn encode(&self, symbol: Symbol, direction: Direction) -> Result<Symbol, CoreError> {
        let offset = self.offset();
        let contact = symbol.shifted(offset);
        let output = match direction {
            Direction::RightToLeft => self.wiring.forward(contact)?,
            Direction::LeftToRight => self.wiring.backward(contact)?,
        };
        Ok(output.shifted(-offset))
    }

    fn offset(&self) -> i32 {
        self.position.index() as i32 - (self.ring as i32 - 1)
    }
}
