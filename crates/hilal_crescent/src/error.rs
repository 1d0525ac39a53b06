//! Error types for crescent-visibility evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from criterion parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CrescentError {
    /// Criterion identifier not recognized.
    UnknownCriterion(String),
}

impl Display for CrescentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCriterion(id) => write!(f, "unknown criterion: {id}"),
        }
    }
}

impl Error for CrescentError {}
