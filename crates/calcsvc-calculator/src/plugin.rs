use calcsvc_types::Value;
use std::collections::HashMap;

use crate::error::{CalculatorError, Result};

pub type CalculationResult = Result<Value>;

/// A trait for calculator plugins.
/// Plugins are stateless and thread-safe.
pub trait CalculatorPlugin: Send + Sync {
    /// The name the calculator is registered under.
    fn name(&self) -> &str;

    /// Performs the calculation.
    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult;
}

/// Provides typed access to the named arguments of a calculation.
#[derive(Debug, Clone, Copy)]
pub struct CalculatorInputs<'a> {
    variables: &'a HashMap<String, Value>,
}

impl<'a> CalculatorInputs<'a> {
    /// Creates a new `CalculatorInputs`.
    pub fn new(variables: &'a HashMap<String, Value>) -> Self {
        Self { variables }
    }

    /// Gets an integer argument. Floats are not truncated.
    pub fn get_i64(&self, name: &str) -> Result<i64> {
        self.variables
            .get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| CalculatorError::invalid_input(name, "integer"))
    }

    /// Gets a numeric argument, widening integers.
    pub fn get_f64(&self, name: &str) -> Result<f64> {
        self.variables
            .get(name)
            .and_then(Value::as_f64)
            .ok_or_else(|| CalculatorError::invalid_input(name, "number"))
    }

    /// Gets a required string argument.
    pub fn get_str(&self, name: &str) -> Result<&'a str> {
        self.variables
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| CalculatorError::invalid_input(name, "string"))
    }

    /// Gets a string argument where absence and `Null` both mean "no string".
    pub fn get_optional_str(&self, name: &str) -> Result<Option<&'a str>> {
        match self.variables.get(name) {
            None => Ok(None),
            Some(value) if value.is_null() => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| CalculatorError::invalid_input(name, "string or null")),
        }
    }
}
