//! Builder for assembling machines.

use crate::builder::catalog::{ReflectorName, RotorName};
use crate::builder::error::BuildError;
use crate::core::{Lead, Machine, Plugboard, Symbol};
use tracing::debug;

/// Builder for constructing machines with a fluent API.
///
/// Rotors are added leftmost first. Ring settings and positions are optional
/// as a whole (defaulting to `01` and `A`), but when given there must be
/// exactly one per rotor.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::builder::{MachineBuilder, ReflectorName, RotorName};
/// use enigma_rotor::core::Symbol;
///
/// let m = Symbol::try_from('M').unwrap();
/// let j = Symbol::try_from('J').unwrap();
///
/// let mut machine = MachineBuilder::new()
///     .rotors([RotorName::Beta, RotorName::Gamma, RotorName::V])
///     .reflector(ReflectorName::C)
///     .rings([4, 2, 14])
///     .positions([m, j, m])
///     .plug("KI")
///     .plug("XN")
///     .plug("FL")
///     .build()
///     .unwrap();
///
/// let plaintext = machine
///     .encode("DMEXBMKYCVPNQBEDHXVPZGKMTFFBJRPJTLHLCHOTKOYXGGHZ")
///     .unwrap();
/// assert!(plaintext.contains("SECRETS"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    rotors: Vec<RotorName>,
    reflector: Option<ReflectorName>,
    rings: Option<Vec<u8>>,
    positions: Option<Vec<Symbol>>,
    plugs: Vec<String>,
    rewiring: Vec<(Symbol, Symbol)>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rotor to the left-to-right rotor order.
    pub fn rotor(mut self, name: RotorName) -> Self {
        self.rotors.push(name);
        self
    }

    /// Append several rotors, leftmost first.
    pub fn rotors(mut self, names: impl IntoIterator<Item = RotorName>) -> Self {
        self.rotors.extend(names);
        self
    }

    /// Set the reflector (required).
    pub fn reflector(mut self, name: ReflectorName) -> Self {
        self.reflector = Some(name);
        self
    }

    /// Ring settings, one per rotor, leftmost first.
    pub fn rings(mut self, rings: impl IntoIterator<Item = u8>) -> Self {
        self.rings = Some(rings.into_iter().collect());
        self
    }

    /// Starting positions, one per rotor, leftmost first.
    pub fn positions(mut self, positions: impl IntoIterator<Item = Symbol>) -> Self {
        self.positions = Some(positions.into_iter().collect());
        self
    }

    /// Fit a plugboard lead such as `"KI"`. Validated on build.
    pub fn plug(mut self, pair: impl Into<String>) -> Self {
        self.plugs.push(pair.into());
        self
    }

    /// Fit several plugboard leads.
    pub fn plugs<I, P>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.plugs.extend(pairs.into_iter().map(Into::into));
        self
    }

    /// Reflector pairs to swap in after the reflector is built.
    pub fn rewire_reflector(mut self, pairs: impl IntoIterator<Item = (Symbol, Symbol)>) -> Self {
        self.rewiring.extend(pairs);
        self
    }

    /// Build the machine.
    /// Returns the first error found; nothing is returned on failure.
    pub fn build(self) -> Result<Machine, BuildError> {
        if self.rotors.is_empty() {
            return Err(BuildError::NoRotors);
        }
        let reflector_name = self.reflector.ok_or(BuildError::MissingReflector)?;

        let count = self.rotors.len();
        let rings = self.rings.unwrap_or_else(|| vec![1; count]);
        check_count("ring settings", count, rings.len())?;
        let positions = self.positions.unwrap_or_else(|| vec![Symbol::A; count]);
        check_count("initial positions", count, positions.len())?;

        let mut rotors = Vec::with_capacity(count);
        for ((name, ring), position) in self.rotors.iter().zip(rings).zip(positions) {
            let mut rotor = name.build()?;
            rotor.set_ring(ring)?;
            rotor.set_position(position);
            rotors.push(rotor);
        }

        let mut reflector = reflector_name.build()?;
        if !self.rewiring.is_empty() {
            reflector.rewire(&self.rewiring);
        }

        let mut plugboard = Plugboard::new();
        for pair in &self.plugs {
            plugboard.add(Lead::new(pair)?)?;
        }

        debug!(
            rotors = ?self.rotors,
            reflector = %reflector_name,
            leads = plugboard.leads().len(),
            "machine assembled"
        );
        Ok(Machine::new(rotors, reflector, plugboard))
    }
}

fn check_count(setting: &'static str, expected: usize, found: usize) -> Result<(), BuildError> {
    if expected == found {
        Ok(())
    } else {
        Err(BuildError::SettingsMismatch {
            setting,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CoreError;

    fn sym(c: char) -> Symbol {
        Symbol::try_from(c).unwrap()
    }

    #[test]
    fn builder_requires_rotors() {
        let result = MachineBuilder::new().reflector(ReflectorName::B).build();
        assert!(matches!(result, Err(BuildError::NoRotors)));
    }

    #[test]
    fn builder_requires_reflector() {
        let result = MachineBuilder::new().rotor(RotorName::I).build();
        assert!(matches!(result, Err(BuildError::MissingReflector)));
    }

    #[test]
    fn defaults_rings_and_positions() {
        let machine = MachineBuilder::new()
            .rotors([RotorName::I, RotorName::II, RotorName::III])
            .reflector(ReflectorName::B)
            .build()
            .unwrap();

        assert_eq!(machine.positions(), vec![sym('A'); 3]);
        assert!(machine.rotors().iter().all(|r| r.ring() == 1));
        assert!(machine.plugboard().leads().is_empty());
    }

    #[test]
    fn rejects_ring_count_mismatch() {
        let result = MachineBuilder::new()
            .rotors([RotorName::I, RotorName::II, RotorName::III])
            .reflector(ReflectorName::B)
            .rings([1, 1])
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::SettingsMismatch {
                setting: "ring settings",
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn rejects_position_count_mismatch() {
        let result = MachineBuilder::new()
            .rotors([RotorName::I, RotorName::II])
            .reflector(ReflectorName::B)
            .positions([sym('A'), sym('B'), sym('C')])
            .build();

        assert!(matches!(
            result,
            Err(BuildError::SettingsMismatch {
                setting: "initial positions",
                expected: 2,
                found: 3,
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_ring() {
        let result = MachineBuilder::new()
            .rotor(RotorName::I)
            .reflector(ReflectorName::B)
            .rings([27])
            .build();

        assert_eq!(result.unwrap_err(), BuildError::Core(CoreError::InvalidRing(27)));
    }

    #[test]
    fn plugboard_errors_surface() {
        let duplicate = MachineBuilder::new()
            .rotor(RotorName::I)
            .reflector(ReflectorName::B)
            .plugs(["AB", "BC"])
            .build();
        assert!(matches!(
            duplicate,
            Err(BuildError::Core(CoreError::DuplicateLead { .. }))
        ));

        let invalid = MachineBuilder::new()
            .rotor(RotorName::I)
            .reflector(ReflectorName::B)
            .plug("AA")
            .build();
        assert!(matches!(
            invalid,
            Err(BuildError::Core(CoreError::InvalidLead(_)))
        ));
    }

    #[test]
    fn applies_settings_positionally() {
        let machine = MachineBuilder::new()
            .rotors([RotorName::Beta, RotorName::I, RotorName::III])
            .reflector(ReflectorName::A)
            .rings([23, 2, 10])
            .positions([sym('X'), sym('Y'), sym('Z')])
            .build()
            .unwrap();

        let rings: Vec<u8> = machine.rotors().iter().map(|r| r.ring()).collect();
        let names: Vec<&str> = machine.rotors().iter().map(|r| r.name()).collect();
        assert_eq!(rings, vec![23, 2, 10]);
        assert_eq!(names, vec!["Beta", "I", "III"]);
        assert_eq!(machine.positions(), vec![sym('X'), sym('Y'), sym('Z')]);
        assert_eq!(machine.reflector().name(), "A");
    }

    #[test]
    fn rewiring_is_applied_to_reflector() {
        let machine = MachineBuilder::new()
            .rotor(RotorName::I)
            .reflector(ReflectorName::B)
            .rewire_reflector([(sym('A'), sym('R')), (sym('B'), sym('Y'))])
            .build()
            .unwrap();

        assert_eq!(machine.reflector().encode(sym('A')).unwrap(), sym('R'));
    }
}
