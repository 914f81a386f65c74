//! Rotor stepping.
//!
//! Before every key press the rightmost rotor turns. A notched rotor leaving
//! its notch carries the rotor to its left along with it, and the middle
//! rotor sitting on its own notch turns again together with its left
//! neighbour. That second turn is the double-step anomaly: the middle rotor
//! advances on two consecutive key presses.
//!
//! Only the three rightmost rotors ever move. A fourth (leftmost) rotor
//! stays where it was set.

use super::rotor::Rotor;
use super::symbol::Symbol;
use tracing::trace;

/// Record of a single stepping cycle.
///
/// Positions are listed leftmost rotor first, matching the machine's
/// rotor order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Rotor positions before the cycle
    pub before: Vec<Symbol>,
    /// Rotor positions after the cycle
    pub after: Vec<Symbol>,
    /// True when the middle rotor turned twice in a row because of its own notch
    pub double_step: bool,
}

impl StepOutcome {
    /// Indexes (leftmost first) of the rotors that moved in this cycle.
    pub fn moved(&self) -> Vec<usize> {
        self.before
            .iter()
            .zip(&self.after)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Ordered history of stepping cycles.
///
/// # Example
///
/// ```rust
/// use enigma_rotor::builder::create_machine;
///
/// let mut machine = create_machine("I II III", "B", "01 01 01", "A D U", &[]).unwrap();
/// let history = machine.trace(3);
///
/// let path: Vec<String> = history
///     .get_path()
///     .iter()
///     .map(|positions| positions.iter().map(|s| s.as_char()).collect())
///     .collect();
///
/// assert_eq!(path, ["ADU", "ADV", "AEW", "BFX"]);
/// assert_eq!(history.double_steps(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepHistory {
    steps: Vec<StepOutcome>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cycle, returning the extended history.
    pub fn record(mut self, outcome: StepOutcome) -> Self {
        self.steps.push(outcome);
        self
    }

    /// Positions visited: the starting positions, then the result of each cycle.
    pub fn get_path(&self) -> Vec<&[Symbol]> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.before.as_slice());
        }
        for step in &self.steps {
            path.push(step.after.as_slice());
        }
        path
    }

    /// Number of cycles in which the middle rotor double-stepped.
    pub fn double_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.double_step).count()
    }

    pub fn steps(&self) -> &[StepOutcome] {
        &self.steps
    }
}

/// Run one stepping cycle over rotors ordered leftmost first.
///
/// Both notch checks read positions from before this cycle's movement.
pub(crate) fn advance(rotors: &mut [Rotor]) -> StepOutcome {
    let before: Vec<Symbol> = rotors.iter().map(Rotor::position).collect();

    let Some(right) = rotors.len().checked_sub(1) else {
        return StepOutcome {
            after: before.clone(),
            before,
            double_step: false,
        };
    };
    let middle = right.checked_sub(1);
    let left = middle.and_then(|m| m.checked_sub(1));

    let right_on_notch = rotors[right].is_on_notch();
    rotors[right].rotate();

    let middle_on_notch = middle.is_some_and(|m| rotors[m].is_on_notch());

    if let Some(m) = middle {
        if right_on_notch {
            rotors[m].rotate();
        }
        if middle_on_notch {
            rotors[m].rotate();
            if let Some(l) = left {
                rotors[l].rotate();
            }
            trace!(rotor = rotors[m].name(), "middle rotor double-stepped");
        }
    }

    StepOutcome {
        before,
        after: rotors.iter().map(Rotor::position).collect(),
        double_step: middle_on_notch,
    }
}
