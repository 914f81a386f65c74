//! Builder API for machine construction.
//!
//! This module resolves component names to their wiring tables and
//! assembles machines, either through the fluent [`MachineBuilder`] or from
//! the plain settings strings operators write down:
//!
//! - rotor order: `"Beta Gamma V"` (leftmost first)
//! - reflector: `"A"`, `"B"` or `"C"`
//! - ring settings: `"04 02 14"`
//! - initial positions: `"M J M"`
//! - plugboard: `["KI", "XN", "FL"]`

pub mod catalog;
pub mod error;
pub mod machine;

pub use catalog::{ReflectorName, RotorName};
pub use error::BuildError;
pub use machine::MachineBuilder;

use crate::core::{Machine, Reflector, Rotor, Symbol, MAX_RING, MIN_RING};

/// Build a fresh rotor by name, at position `A` with ring `01`.
///
/// # Example
///
/// ```
/// use enigma_rotor::builder::rotor_from_name;
///
/// let rotor = rotor_from_name("III").unwrap();
/// assert_eq!(rotor.has_notch().map(|s| s.as_char()), Some('V'));
/// assert!(rotor_from_name("VI").is_err());
/// ```
pub fn rotor_from_name(name: &str) -> Result<Rotor, BuildError> {
    name.parse::<RotorName>()?.build()
}

/// Build a fresh reflector by name.
pub fn reflector_from_name(name: &str) -> Result<Reflector, BuildError> {
    name.parse::<ReflectorName>()?.build()
}

/// Assemble a machine from settings strings.
///
/// # Example
///
/// ```
/// use enigma_rotor::builder::create_machine;
///
/// let mut machine = create_machine(
///     "IV V Beta I",
///     "A",
///     "18 24 03 05",
///     "E Z G P",
///     &["PC", "XZ", "FM", "QA", "ST", "NB", "HY", "OR", "EV", "IU"],
/// )
/// .unwrap();
///
/// let plaintext = machine
///     .encode("BUPXWJCDPFASXBDHLBBIBSRNWCSZXQOLBNXYAXVHOGCUUIBCVMPUZYUUKHI")
///     .unwrap();
/// assert_eq!(plaintext, "CONGRATULATIONSONPRODUCINGYOURWORKINGENIGMAMACHINESIMULATOR");
/// ```
pub fn create_machine(
    rotors: &str,
    reflector: &str,
    ring_settings: &str,
    initial_positions: &str,
    plugboard_pairs: &[&str],
) -> Result<Machine, BuildError> {
    MachineBuilder::new()
        .rotors(parse_rotors(rotors)?)
        .reflector(reflector.parse()?)
        .rings(parse_rings(ring_settings)?)
        .positions(parse_positions(initial_positions)?)
        .plugs(plugboard_pairs.iter().copied())
        .build()
}

/// Parse a space-separated rotor order such as `"I II III"`.
pub fn parse_rotors(rotors: &str) -> Result<Vec<RotorName>, BuildError> {
    rotors.split_whitespace().map(str::parse).collect()
}

/// Parse space-separated ring settings such as `"01 02 26"`.
pub fn parse_rings(rings: &str) -> Result<Vec<u8>, BuildError> {
    rings.split_whitespace().map(parse_ring).collect()
}

pub fn parse_ring(token: &str) -> Result<u8, BuildError> {
    token
        .parse::<u8>()
        .ok()
        .filter(|ring| (MIN_RING..=MAX_RING).contains(ring))
        .ok_or_else(|| BuildError::InvalidRingSetting(token.to_string()))
}

/// Parse space-separated starting positions such as `"A D U"`.
pub fn parse_positions(positions: &str) -> Result<Vec<Symbol>, BuildError> {
    positions.split_whitespace().map(parse_position).collect()
}

pub fn parse_position(token: &str) -> Result<Symbol, BuildError> {
    let invalid = || BuildError::InvalidPosition(token.to_string());
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Symbol::try_from(c).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Parse a reflector rewiring pair such as `"AR"`.
pub fn parse_pair(token: &str) -> Result<(Symbol, Symbol), BuildError> {
    let invalid = || BuildError::InvalidRewiring(token.to_string());
    let mut chars = token.chars();
    let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let first = Symbol::try_from(a).map_err(|_| invalid())?;
    let second = Symbol::try_from(b).map_err(|_| invalid())?;
    if first == second {
        return Err(invalid());
    }
    Ok((first, second))
}
