//! Search errors.

use crate::core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Crib is empty")]
    EmptyCrib,

    /// Ciphertext or crib contained something other than A-Z
    #[error("Invalid search text: {0}")]
    Text(#[source] CoreError),
}
