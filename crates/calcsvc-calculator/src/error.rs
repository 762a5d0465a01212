//! Error handling for calcsvc calculators
//!
//! Every service operation reports a violated precondition as
//! [`CalculatorError::InvalidArgument`], whose `Display` output is exactly the
//! caller-facing message. The remaining variants only arise when calculators are
//! invoked by name through the [`crate::Calculator`] facade.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message for a zero divisor.
pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";
/// Message for an absent string.
pub const NULL_STRING: &str = "String cannot be null";
/// Message for a Kelvin value below absolute zero.
pub const NEGATIVE_KELVIN: &str = "Kelvin cannot be negative";
/// Message for a negative volume in either unit.
pub const NEGATIVE_VOLUME: &str = "Volume cannot be negative";

/// Errors produced by calculators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A caller-supplied value violates the operation's precondition
    #[error("{message}")]
    InvalidArgument { message: String },

    /// A named argument is missing or has the wrong type
    #[error("Invalid argument '{field}': expected {expected}")]
    InvalidInput { field: String, expected: &'static str },

    /// No calculator is registered under the requested name
    #[error("calculator '{name}' not found")]
    UnknownCalculator { name: String },
}

/// Stable, serializable classification of a [`CalculatorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidArgument,
    InvalidInput,
    UnknownCalculator,
}

impl CalculatorError {
    /// Create an `InvalidArgument` error carrying `message` verbatim
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Create an `InvalidInput` error for a named argument
    pub fn invalid_input(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidInput { field: field.into(), expected }
    }

    /// Create an `UnknownCalculator` error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        Self::UnknownCalculator { name: name.into() }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::UnknownCalculator { .. } => ErrorCode::UnknownCalculator,
        }
    }
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;
