//! The assembled cipher machine.

use super::error::CoreError;
use super::plugboard::Plugboard;
use super::reflector::Reflector;
use super::rotor::{Direction, Rotor};
use super::stepping::{self, StepHistory, StepOutcome};
use super::substitution::Substitution;
use super::symbol::Symbol;

/// A plugboard, a bank of rotors and a reflector.
///
/// Rotors are ordered leftmost first, as they are named in a settings string
/// such as `"I II III"`; the last rotor is the fast one nearest the
/// plugboard. Encoding mutates rotor positions, so independent trials need
/// their own machine or a call to [`Machine::reset`].
#[derive(Clone, Debug)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    start_positions: Vec<Symbol>,
}

impl Machine {
    /// Assemble a machine. The rotors' current positions become the
    /// positions [`Machine::reset`] returns to.
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector, plugboard: Plugboard) -> Self {
        let start_positions = rotors.iter().map(Rotor::position).collect();
        Self {
            rotors,
            reflector,
            plugboard,
            start_positions,
        }
    }

    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Mutable access for rewiring the reflector between trials.
    pub fn reflector_mut(&mut self) -> &mut Reflector {
        &mut self.reflector
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Current rotor positions, leftmost first.
    pub fn positions(&self) -> Vec<Symbol> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Move every rotor to a new position and make that the reset point.
    ///
    /// Extra positions are ignored and missing ones leave rotors where they are.
    pub fn set_positions(&mut self, positions: &[Symbol]) {
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
        self.start_positions = self.positions();
    }

    /// Return every rotor to the positions the machine was assembled with.
    pub fn reset(&mut self) {
        for (rotor, &position) in self.rotors.iter_mut().zip(&self.start_positions) {
            rotor.set_position(position);
        }
    }

    /// Run one stepping cycle without encoding anything.
    pub fn advance(&mut self) -> StepOutcome {
        stepping::advance(&mut self.rotors)
    }

    /// Run `cycles` stepping cycles and return what happened in each.
    pub fn trace(&mut self, cycles: usize) -> StepHistory {
        (0..cycles).fold(StepHistory::new(), |history, _| history.record(self.advance()))
    }

    /// Step the rotors, then send one symbol through the full signal path.
    pub fn encode_symbol(&mut self, symbol: Symbol) -> Result<Symbol, CoreError> {
        self.advance();

        let mut signal = self.plugboard.substitute(symbol);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.encode(signal, Direction::RightToLeft)?;
        }
        signal = self.reflector.encode(signal)?;
        for rotor in &self.rotors {
            signal = rotor.encode(signal, Direction::LeftToRight)?;
        }
        Ok(self.plugboard.substitute(signal))
    }

    /// Encode a string of uppercase letters.
    ///
    /// Decoding is the same operation from the same starting positions.
    /// Input is validated before any rotor moves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::builder::create_machine;
    ///
    /// let mut machine = create_machine("I II III", "B", "01 01 01", "A A A", &[]).unwrap();
    /// assert_eq!(machine.encode("AAAAA").unwrap(), "BDZGO");
    ///
    /// machine.reset();
    /// assert_eq!(machine.encode("BDZGO").unwrap(), "AAAAA");
    /// ```
    pub fn encode(&mut self, text: &str) -> Result<String, CoreError> {
        let symbols = Symbol::parse_text(text)?;
        symbols
            .into_iter()
            .map(|s| self.encode_symbol(s).map(Symbol::as_char))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rotor::Notch;
    use crate::core::wiring::Wiring;

    fn sym(c: char) -> Symbol {
        Symbol::try_from(c).unwrap()
    }

    fn machine(positions: &str, plugs: &[&str]) -> Machine {
        let tables = [
            ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
            ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
            ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
        ];
        let rotors = tables
            .iter()
            .zip(positions.chars())
            .map(|(&(name, letters, notch), position)| {
                let mut rotor = Rotor::new(
                    name,
                    Wiring::from_letters(letters).unwrap(),
                    Notch::Notch(sym(notch)),
                );
                rotor.set_position(sym(position));
                rotor
            })
            .collect();
        let reflector =
            Reflector::new("B", Wiring::from_letters("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap())
                .unwrap();
        Machine::new(rotors, reflector, Plugboard::from_pairs(plugs).unwrap())
    }

    #[test]
    fn encodes_reference_vector() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encode("AAAAA").unwrap(), "BDZGO");
        assert_eq!(m.positions(), vec![sym('A'), sym('A'), sym('F')]);
    }

    #[test]
    fn decoding_reverses_encoding() {
        let mut m = machine("AAA", &["KI", "XN"]);
        let ciphertext = m.encode("HELLO").unwrap();
        assert_ne!(ciphertext, "HELLO");

        m.reset();
        assert_eq!(m.encode(&ciphertext).unwrap(), "HELLO");
    }

    #[test]
    fn no_letter_encodes_to_itself() {
        let mut m = machine("AAA", &[]);
        let plaintext = "A".repeat(200);
        let ciphertext = m.encode(&plaintext).unwrap();
        assert!(!ciphertext.contains('A'));
    }

    #[test]
    fn rejects_invalid_input_before_stepping() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encode("HELLO WORLD"), Err(CoreError::InvalidSymbol(' ')));
        assert_eq!(m.positions(), vec![sym('A'); 3]);
    }

    #[test]
    fn empty_input_encodes_to_empty_output() {
        let mut m = machine("AAA", &[]);
        assert_eq!(m.encode("").unwrap(), "");
        assert_eq!(m.positions(), vec![sym('A'); 3]);
    }

    #[test]
    fn encoding_is_not_idempotent() {
        let mut m = machine("AAA", &[]);
        let first = m.encode("AAAAA").unwrap();
        let second = m.encode("AAAAA").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn set_positions_moves_the_reset_point() {
        let mut m = machine("AAA", &[]);
        m.set_positions(&[sym('A'), sym('D'), sym('U')]);
        m.encode("ABC").unwrap();
        m.reset();
        assert_eq!(m.positions(), vec![sym('A'), sym('D'), sym('U')]);
    }

    #[test]
    fn trace_reports_double_step() {
        let mut m = machine("ADU", &[]);
        let history = m.trace(4);
        assert_eq!(history.steps().len(), 4);
        assert_eq!(history.double_steps(), 1);
        assert!(history.steps()[2].double_step);
        assert_eq!(m.positions(), vec![sym('B'), sym('F'), sym('Y')]);
    }

    #[test]
    fn rewired_reflector_changes_output() {
        let mut plain = machine("AAA", &[]);
        let mut rewired = machine("AAA", &[]);
        rewired
            .reflector_mut()
            .rewire(&[(sym('A'), sym('R')), (sym('B'), sym('Y'))]);

        let text = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        assert_ne!(plain.encode(text).unwrap(), rewired.encode(text).unwrap());

        let ciphertext = {
            rewired.reset();
            rewired.encode(text).unwrap()
        };
        rewired.reset();
        assert_eq!(rewired.encode(&ciphertext).unwrap(), text);
    }
}
