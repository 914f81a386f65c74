//! Reflectors.
//!
//! The reflector sends the signal back through the rotors. Its wiring is
//! made of 13 disjoint pairs, so it never maps a letter to itself and is its
//! own inverse.

use super::error::CoreError;
use super::substitution::Substitution;
use super::symbol::Symbol;
use super::wiring::Wiring;
use tracing::{debug, warn};

/// A self-paired wiring that the signal passes through once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: Wiring,
}

impl Reflector {
    /// Wrap a wiring, rejecting it unless every contact is paired with its mirror.
    pub fn new(name: impl Into<String>, wiring: Wiring) -> Result<Self, CoreError> {
        wiring.check_involution()?;
        Ok(Self {
            name: name.into(),
            wiring,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Reflect a symbol back towards the rotors.
    pub fn encode(&self, symbol: Symbol) -> Result<Symbol, CoreError> {
        self.wiring.forward(symbol)
    }

    /// Swap a subset of the reflector's pairs.
    ///
    /// Each stored pair that shares its first letter with a replacement
    /// `(a, b)` becomes `(a, b)`; each stored pair ending in `a` becomes
    /// `(b, a)`, so lookups stay symmetric. The replacements must partition
    /// exactly the letters of the pairs they displace. Swapping `AY, BR` for
    /// `AR, BY` is a valid rewiring; an inconsistent set leaves the reflector
    /// in an unspecified, possibly non-involutive state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::builder::reflector_from_name;
    /// use enigma_rotor::core::{Substitution, Symbol};
    ///
    /// let mut reflector = reflector_from_name("B").unwrap();
    /// let a = Symbol::try_from('A').unwrap();
    /// let r = Symbol::try_from('R').unwrap();
    /// let b = Symbol::try_from('B').unwrap();
    /// let y = Symbol::try_from('Y').unwrap();
    ///
    /// reflector.rewire(&[(a, r), (b, y)]);
    ///
    /// assert_eq!(reflector.substitute(a), r);
    /// assert_eq!(reflector.substitute(y), b);
    /// assert!(reflector.is_involution());
    /// ```
    pub fn rewire(&mut self, pairs: &[(Symbol, Symbol)]) {
        debug!(reflector = %self.name, pairs = pairs.len(), "rewiring reflector");
        self.wiring.replace_pairs(pairs);
        if let Err(error) = self.wiring.check_involution() {
            warn!(reflector = %self.name, %error, "rewiring left the reflector unpaired");
        }
    }
}

/// Infallible view of the reflector for involution checks.
///
/// A contact lost to an inconsistent rewiring maps to itself here, which the
/// overridden [`Substitution::is_involution`] reports as a failure.
/// [`Reflector::encode`] is the checked path and returns
/// [`CoreError::RotorWiring`] instead.
impl Substitution for Reflector {
    fn substitute(&self, symbol: Symbol) -> Symbol {
        self.wiring.forward(symbol).unwrap_or(symbol)
    }

    fn is_involution(&self) -> bool {
        self.wiring.check_involution().is_ok()
    }
}
