//! Temperature conversion between Celsius, Fahrenheit and Kelvin
//!
//! All arithmetic is plain `f64` with no rounding; compare results with a
//! tolerance.

use tracing::debug;

use crate::error::{CalculatorError, NEGATIVE_KELVIN, Result};

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Absolute zero in degrees Celsius, the lowest valid Celsius reading.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -KELVIN_OFFSET;

/// Stateless temperature converter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemperatureService;

impl TemperatureService {
    pub fn new() -> Self {
        Self
    }

    /// `F = C × 9/5 + 32`
    pub fn celsius_to_fahrenheit(&self, celsius: f64) -> f64 {
        (celsius * 9.0 / 5.0) + 32.0
    }

    /// `C = (F − 32) × 5/9`
    pub fn fahrenheit_to_celsius(&self, fahrenheit: f64) -> f64 {
        (fahrenheit - 32.0) * 5.0 / 9.0
    }

    /// True when `celsius` is at or above absolute zero. NaN is never valid.
    pub fn is_valid_celsius(&self, celsius: f64) -> bool {
        celsius >= ABSOLUTE_ZERO_CELSIUS
    }

    /// `C = K − 273.15`, rejecting negative Kelvin.
    pub fn kelvin_to_celsius(&self, kelvin: f64) -> Result<f64> {
        if kelvin < 0.0 {
            debug!(kelvin, "rejected negative kelvin");
            return Err(CalculatorError::invalid_argument(NEGATIVE_KELVIN));
        }
        Ok(kelvin - KELVIN_OFFSET)
    }
}
