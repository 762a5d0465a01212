//! String manipulation
//!
//! Lengths and reversal operate on Unicode scalar values (`char`), so
//! multi-byte characters count once and survive reversal intact.

use tracing::debug;

use crate::error::{CalculatorError, NULL_STRING, Result};

/// Stateless string utilities.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringService;

impl StringService {
    pub fn new() -> Self {
        Self
    }

    pub fn concatenate(&self, a: &str, b: &str) -> String {
        let mut joined = String::with_capacity(a.len() + b.len());
        joined.push_str(a);
        joined.push_str(b);
        joined
    }

    pub fn reverse(&self, s: &str) -> String {
        s.chars().rev().collect()
    }

    /// Uppercases letters with the locale-independent Unicode mapping; other
    /// characters pass through unchanged.
    pub fn to_upper_case(&self, s: &str) -> String {
        s.to_uppercase()
    }

    /// Number of characters in `s`.
    ///
    /// `None` is the null sentinel and fails with "String cannot be null"; an
    /// empty string is valid and has length 0.
    pub fn get_length(&self, s: Option<&str>) -> Result<usize> {
        match s {
            Some(s) => Ok(s.chars().count()),
            None => {
                debug!("rejected null string");
                Err(CalculatorError::invalid_argument(NULL_STRING))
            }
        }
    }
}
