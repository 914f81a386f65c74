//! The `Substitution` trait shared by stateless components.
//!
//! Leads, the plugboard and reflectors all map one symbol to another without
//! touching any internal state. They are also self-inverse, which the
//! [`Substitution::is_involution`] check verifies over the whole alphabet.

use super::symbol::Symbol;

/// A fixed symbol-to-symbol mapping with no side effects.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::core::{Lead, Substitution, Symbol};
///
/// let lead = Lead::new("KI").unwrap();
/// let k = Symbol::try_from('K').unwrap();
///
/// assert_eq!(lead.substitute(k), Symbol::try_from('I').unwrap());
/// assert!(lead.is_involution());
/// ```
pub trait Substitution {
    /// Map `symbol` through this component.
    fn substitute(&self, symbol: Symbol) -> Symbol;

    /// Check that applying the substitution twice returns every symbol unchanged.
    fn is_involution(&self) -> bool {
        Symbol::all().all(|s| self.substitute(self.substitute(s)) == s)
    }
}
