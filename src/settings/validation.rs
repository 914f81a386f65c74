//! Whole-settings validation that reports every problem at once.
//!
//! Building a machine stops at the first bad setting. When settings come
//! from a file or a form it is friendlier to list everything that is wrong,
//! so each check here produces its own `Validation` and the results are
//! accumulated with `Validation::all_vec`.

use super::MachineSettings;
use crate::builder::{
    parse_pair, parse_position, parse_ring, BuildError, ReflectorName, RotorName,
};
use crate::core::{CoreError, Lead, Plugboard};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a full set of machine settings.
pub type SettingsValidation = Validation<(), NonEmptyVec<BuildError>>;

fn check<T>(result: Result<T, BuildError>) -> SettingsValidation {
    match result {
        Ok(_) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}

fn check_count(setting: &'static str, expected: usize, found: usize) -> SettingsValidation {
    if expected == found {
        Validation::success(())
    } else {
        Validation::fail(BuildError::SettingsMismatch {
            setting,
            expected,
            found,
        })
    }
}

/// Validate every field of `settings`, accumulating ALL violations.
pub fn validate(settings: &MachineSettings) -> SettingsValidation {
    let mut checks: Vec<SettingsValidation> = Vec::new();

    let rotors: Vec<&str> = settings.rotors.split_whitespace().collect();
    if rotors.is_empty() {
        checks.push(Validation::fail(BuildError::NoRotors));
    }
    for name in &rotors {
        checks.push(check(name.parse::<RotorName>()));
    }

    checks.push(check(settings.reflector.parse::<ReflectorName>()));

    let rings: Vec<&str> = settings.ring_settings.split_whitespace().collect();
    for ring in &rings {
        checks.push(check(parse_ring(ring)));
    }
    checks.push(check_count("ring settings", rotors.len(), rings.len()));

    let positions: Vec<&str> = settings.initial_positions.split_whitespace().collect();
    for position in &positions {
        checks.push(check(parse_position(position)));
    }
    checks.push(check_count("initial positions", rotors.len(), positions.len()));

    // Fit leads one at a time so a clash is reported against the earlier lead
    // without hiding problems in the ones after it.
    let mut board = Plugboard::new();
    for pair in &settings.plugboard {
        let fitted = Lead::new(pair).and_then(|lead| board.add(lead));
        checks.push(check(fitted.map_err(BuildError::from)));
    }

    for pair in &settings.reflector_rewiring {
        checks.push(check(parse_pair(pair)));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a validation outcome into the list of violations it carries.
pub fn violations(validation: &SettingsValidation) -> Vec<BuildError> {
    match validation {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// True if the violation came from the plugboard rather than the rotor settings.
pub fn is_plugboard_violation(error: &BuildError) -> bool {
    matches!(
        error,
        BuildError::Core(
            CoreError::InvalidLead(_)
                | CoreError::PlugboardFull { .. }
                | CoreError::DuplicateLead { .. }
        )
    )
}
