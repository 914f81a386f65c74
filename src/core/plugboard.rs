//! Plugboard leads.
//!
//! The plugboard swaps letters in pairs before the signal enters the rotors
//! and again after it leaves them. Each lead joins two distinct letters and
//! no letter can carry more than one lead.

use super::error::CoreError;
use super::substitution::Substitution;
use super::symbol::Symbol;
use std::fmt;

/// Maximum number of leads a plugboard accepts.
pub const MAX_LEADS: usize = 10;

/// One plugboard wire joining two distinct letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lead {
    left: Symbol,
    right: Symbol,
}

impl Lead {
    /// Parse a lead from a two-letter string such as `"KI"`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::core::{CoreError, Lead};
    ///
    /// assert!(Lead::new("KI").is_ok());
    /// assert!(matches!(Lead::new("AA"), Err(CoreError::InvalidLead(_))));
    /// assert!(matches!(Lead::new("ki"), Err(CoreError::InvalidLead(_))));
    /// ```
    pub fn new(pair: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidLead(pair.to_string());

        let mut chars = pair.chars();
        let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let left = Symbol::try_from(a).map_err(|_| invalid())?;
        let right = Symbol::try_from(b).map_err(|_| invalid())?;

        Self::from_symbols(left, right).map_err(|_| invalid())
    }

    /// Join two already-validated symbols.
    pub fn from_symbols(left: Symbol, right: Symbol) -> Result<Self, CoreError> {
        if left == right {
            return Err(CoreError::InvalidLead(format!("{left}{right}")));
        }
        Ok(Self { left, right })
    }

    /// Both ends of the lead.
    pub fn ends(&self) -> (Symbol, Symbol) {
        (self.left, self.right)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.left == symbol || self.right == symbol
    }
}

impl Substitution for Lead {
    fn substitute(&self, symbol: Symbol) -> Symbol {
        if symbol == self.left {
            self.right
        } else if symbol == self.right {
            self.left
        } else {
            symbol
        }
    }
}

impl fmt::Display for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.left, self.right)
    }
}

impl fmt::Debug for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lead({self})")
    }
}

/// A set of disjoint leads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plugboard {
    leads: Vec<Lead>,
}

impl Plugboard {
    /// Create an empty plugboard (every letter passes through unchanged).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plugboard from two-letter strings, failing on the first bad lead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enigma_rotor::core::{CoreError, Plugboard};
    ///
    /// let board = Plugboard::from_pairs(["KI", "XN", "FL"]).unwrap();
    /// assert_eq!(board.leads().len(), 3);
    ///
    /// let clash = Plugboard::from_pairs(["KI", "IX"]);
    /// assert!(matches!(clash, Err(CoreError::DuplicateLead { .. })));
    /// ```
    pub fn from_pairs<I, P>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut board = Self::new();
        for pair in pairs {
            board.add(Lead::new(pair.as_ref())?)?;
        }
        Ok(board)
    }

    /// Fit a lead, rejecting it if the board is full or either letter is taken.
    pub fn add(&mut self, lead: Lead) -> Result<(), CoreError> {
        if self.leads.len() >= MAX_LEADS {
            return Err(CoreError::PlugboardFull { max: MAX_LEADS });
        }

        let (left, right) = lead.ends();
        if let Some(symbol) = [left, right]
            .into_iter()
            .find(|&s| self.leads.iter().any(|l| l.contains(s)))
        {
            return Err(CoreError::DuplicateLead {
                lead: lead.to_string(),
                symbol: symbol.as_char(),
            });
        }

        self.leads.push(lead);
        Ok(())
    }

    /// Leads in the order they were fitted.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }
}

impl Substitution for Plugboard {
    fn substitute(&self, symbol: Symbol) -> Symbol {
        self.leads
            .iter()
            .find(|lead| lead.contains(symbol))
            .map_or(symbol, |lead| lead.substitute(symbol))
    }
}
