//! Temperature calculators
//!
//! Arguments accept integers or floats; results are `Value::Float` except for
//! `is_valid_celsius`, which returns `Value::Boolean`.

use calcsvc_types::Value;

use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin};
use crate::temperature::TemperatureService;

#[derive(Debug, Default)]
pub struct CelsiusToFahrenheitCalculator;

impl CalculatorPlugin for CelsiusToFahrenheitCalculator {
    fn name(&self) -> &str {
        "celsius_to_fahrenheit"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let celsius = inputs.get_f64("celsius")?;
        Ok(Value::Float(TemperatureService.celsius_to_fahrenheit(celsius)))
    }
}

#[derive(Debug, Default)]
pub struct FahrenheitToCelsiusCalculator;

impl CalculatorPlugin for FahrenheitToCelsiusCalculator {
    fn name(&self) -> &str {
        "fahrenheit_to_celsius"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let fahrenheit = inputs.get_f64("fahrenheit")?;
        Ok(Value::Float(TemperatureService.fahrenheit_to_celsius(fahrenheit)))
    }
}

#[derive(Debug, Default)]
pub struct IsValidCelsiusCalculator;

impl CalculatorPlugin for IsValidCelsiusCalculator {
    fn name(&self) -> &str {
        "is_valid_celsius"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let celsius = inputs.get_f64("celsius")?;
        Ok(Value::Boolean(TemperatureService.is_valid_celsius(celsius)))
    }
}

#[derive(Debug, Default)]
pub struct KelvinToCelsiusCalculator;

impl CalculatorPlugin for KelvinToCelsiusCalculator {
    fn name(&self) -> &str {
        "kelvin_to_celsius"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let kelvin = inputs.get_f64("kelvin")?;
        TemperatureService.kelvin_to_celsius(kelvin).map(Value::Float)
    }
}
