//! Wiring tables.
//!
//! A wiring is stored as 26 directed contact pairs `(input, output)`. Rotors
//! read the pairs in both directions; reflectors only read them forwards.
//! The pair list is kept in its original order because reflector rewiring
//! replaces entries in place.

use super::error::CoreError;
use super::symbol::{Symbol, ALPHABET_LEN};

const SIZE: usize = ALPHABET_LEN as usize;

/// A total substitution table over the alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wiring {
    pairs: Vec<(Symbol, Symbol)>,
    forward: [Option<Symbol>; SIZE],
    backward: [Option<Symbol>; SIZE],
}

impl Wiring {
    /// Build a wiring from its right-hand contacts listed in alphabet order.
    ///
    /// `"EKMFLGDQVZNTOWYHXUSPAIBRCJ"` wires `A` to `E`, `B` to `K`, and so on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::core::{Symbol, Wiring};
    ///
    /// let wiring = Wiring::from_letters("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// let a = Symbol::try_from('A').unwrap();
    /// let e = Symbol::try_from('E').unwrap();
    ///
    /// assert_eq!(wiring.forward(a).unwrap(), e);
    /// assert_eq!(wiring.backward(e).unwrap(), a);
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, CoreError> {
        let outputs = letters
            .chars()
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CoreError::InvalidWiring(format!("{letters:?} contains a non-letter")))?;

        if outputs.len() != SIZE {
            return Err(CoreError::InvalidWiring(format!(
                "expected {SIZE} contacts, found {}",
                outputs.len()
            )));
        }

        Self::from_pairs(Symbol::all().zip(outputs).collect())
    }

    /// Build a wiring from explicit contact pairs.
    ///
    /// Every symbol must appear exactly once on each side.
    pub fn from_pairs(pairs: Vec<(Symbol, Symbol)>) -> Result<Self, CoreError> {
        if pairs.len() != SIZE {
            return Err(CoreError::InvalidWiring(format!(
                "expected {SIZE} contact pairs, found {}",
                pairs.len()
            )));
        }

        let mut seen_in = [false; SIZE];
        let mut seen_out = [false; SIZE];
        for &(input, output) in &pairs {
            if std::mem::replace(&mut seen_in[input.index() as usize], true) {
                return Err(CoreError::InvalidWiring(format!(
                    "input contact {input} is wired twice"
                )));
            }
            if std::mem::replace(&mut seen_out[output.index() as usize], true) {
                return Err(CoreError::InvalidWiring(format!(
                    "output contact {output} is wired twice"
                )));
            }
        }

        let mut wiring = Self {
            pairs,
            forward: [None; SIZE],
            backward: [None; SIZE],
        };
        wiring.rebuild_lookup();
        Ok(wiring)
    }

    /// Follow a contact from its input side to its output side.
    pub fn forward(&self, symbol: Symbol) -> Result<Symbol, CoreError> {
        self.forward[symbol.index() as usize].ok_or(CoreError::RotorWiring(symbol.as_char()))
    }

    /// Follow a contact from its output side back to its input side.
    pub fn backward(&self, symbol: Symbol) -> Result<Symbol, CoreError> {
        self.backward[symbol.index() as usize].ok_or(CoreError::RotorWiring(symbol.as_char()))
    }

    /// The directed contact pairs in storage order.
    pub fn pairs(&self) -> &[(Symbol, Symbol)] {
        &self.pairs
    }

    /// Verify every contact is present and matched by its mirror image.
    pub fn check_involution(&self) -> Result<(), CoreError> {
        if let Some(missing) = Symbol::all().find(|s| self.forward[s.index() as usize].is_none()) {
            return Err(CoreError::RotorWiring(missing.as_char()));
        }
        for &(from, to) in &self.pairs {
            if from == to || self.forward[to.index() as usize] != Some(from) {
                return Err(CoreError::NotInvolutive {
                    from: from.as_char(),
                    to: to.as_char(),
                });
            }
        }
        Ok(())
    }

    /// Overwrite stored pairs that share a first symbol with a replacement.
    ///
    /// For each stored pair and each replacement `(a, b)` in turn: a stored
    /// pair starting with `a` becomes `(a, b)`, a stored pair ending with `a`
    /// becomes `(b, a)`. Replacements are expected to partition exactly the
    /// symbols of the pairs they displace.
    pub(crate) fn replace_pairs(&mut self, replacements: &[(Symbol, Symbol)]) {
        for stored in &mut self.pairs {
            for &(first, second) in replacements {
                if first == stored.0 {
                    *stored = (first, second);
                } else if first == stored.1 {
                    *stored = (second, first);
                }
            }
        }
        self.rebuild_lookup();
    }

    // First matching pair wins, as a linear scan of the pair list would.
    fn rebuild_lookup(&mut self) {
        self.forward = [None; SIZE];
        self.backward = [None; SIZE];
        for &(input, output) in &self.pairs {
            self.forward[input.index() as usize].get_or_insert(output);
            self.backward[output.index() as usize].get_or_insert(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTOR_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    fn sym(c: char) -> Symbol {
        Symbol::try_from(c).unwrap()
    }

    #[test]
    fn forward_and_backward_are_inverse() {
        let wiring = Wiring::from_letters(ROTOR_I).unwrap();
        for s in Symbol::all() {
            assert_eq!(wiring.backward(wiring.forward(s).unwrap()).unwrap(), s);
        }
    }

    #[test]
    fn rejects_short_tables() {
        assert!(matches!(
            Wiring::from_letters("ABC"),
            Err(CoreError::InvalidWiring(_))
        ));
    }

    #[test]
    fn rejects_repeated_outputs() {
        let result = Wiring::from_letters("AACDEFGHIJKLMNOPQRSTUVWXYZ");
        assert!(matches!(result, Err(CoreError::InvalidWiring(_))));
    }

    #[test]
    fn rejects_non_letters() {
        let result = Wiring::from_letters("abcdefghijklmnopqrstuvwxyz");
        assert!(matches!(result, Err(CoreError::InvalidWiring(_))));
    }

    #[test]
    fn rejects_repeated_inputs() {
        let mut pairs: Vec<_> = Symbol::all().map(|s| (s, s)).collect();
        pairs[1] = (sym('A'), sym('B'));
        assert!(matches!(
            Wiring::from_pairs(pairs),
            Err(CoreError::InvalidWiring(_))
        ));
    }

    #[test]
    fn reflector_table_is_involutive() {
        let wiring = Wiring::from_letters(REFLECTOR_B).unwrap();
        assert!(wiring.check_involution().is_ok());
    }

    #[test]
    fn rotor_table_is_not_involutive() {
        let wiring = Wiring::from_letters(ROTOR_I).unwrap();
        assert!(matches!(
            wiring.check_involution(),
            Err(CoreError::NotInvolutive { .. })
        ));
    }

    #[test]
    fn identity_table_is_not_involutive() {
        // Self-wired contacts cannot occur in a reflector.
        let wiring = Wiring::from_letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(wiring.check_involution().is_err());
    }

    #[test]
    fn replace_pairs_swaps_partners() {
        let mut wiring = Wiring::from_letters(REFLECTOR_B).unwrap();
        wiring.replace_pairs(&[(sym('A'), sym('R')), (sym('B'), sym('Y'))]);

        assert_eq!(wiring.forward(sym('A')).unwrap(), sym('R'));
        assert_eq!(wiring.forward(sym('R')).unwrap(), sym('A'));
        assert_eq!(wiring.forward(sym('B')).unwrap(), sym('Y'));
        assert_eq!(wiring.forward(sym('Y')).unwrap(), sym('B'));
        assert_eq!(wiring.forward(sym('C')).unwrap(), sym('U'));
        assert!(wiring.check_involution().is_ok());
    }

    #[test]
    fn inconsistent_replacement_is_caught_by_involution_check() {
        let mut wiring = Wiring::from_letters(REFLECTOR_B).unwrap();
        wiring.replace_pairs(&[(sym('A'), sym('B'))]);

        assert_eq!(wiring.forward(sym('Y')), Err(CoreError::RotorWiring('Y')));
        assert_eq!(wiring.check_involution(), Err(CoreError::RotorWiring('Y')));
    }

    #[test]
    fn replace_pairs_keeps_storage_slots() {
        let mut wiring = Wiring::from_letters(REFLECTOR_B).unwrap();
        wiring.replace_pairs(&[(sym('A'), sym('R')), (sym('B'), sym('Y'))]);

        // The slot that held (Y, A) now holds the reversed replacement.
        assert_eq!(wiring.pairs()[24], (sym('R'), sym('A')));
        assert_eq!(wiring.pairs()[17], (sym('Y'), sym('B')));
    }
}
