//! Errors raised by the machine's components.

use thiserror::Error;

/// Errors that can occur when assembling or driving core components.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A lead must join exactly two distinct uppercase letters
    #[error("Invalid lead {0:?}: expected two distinct uppercase letters")]
    InvalidLead(String),

    #[error("Plugboard is full: at most {max} leads can be fitted")]
    PlugboardFull { max: usize },

    /// A letter may only be plugged into one lead
    #[error("Lead {lead:?} reuses letter {symbol} already plugged into another lead")]
    DuplicateLead { lead: String, symbol: char },

    /// A contact was missing from a wiring table. Unreachable for validated tables.
    #[error("Rotor wiring has no contact for {0}")]
    RotorWiring(char),

    #[error("Invalid wiring table: {0}")]
    InvalidWiring(String),

    #[error("Wiring is not self-paired: {from} maps to {to} but {to} does not map back")]
    NotInvolutive { from: char, to: char },

    #[error("Ring setting {0} is outside 1..=26")]
    InvalidRing(u8),

    #[error("Invalid symbol {0:?}: only uppercase letters A-Z are supported")]
    InvalidSymbol(char),
}
