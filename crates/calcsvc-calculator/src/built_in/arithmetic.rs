//! Integer arithmetic calculators
//!
//! Every calculator takes integer arguments `a` and `b` and returns
//! `Value::Integer`.

use calcsvc_types::Value;

use crate::arithmetic::ArithmeticService;
use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin};

fn operands(inputs: &CalculatorInputs<'_>) -> crate::Result<(i64, i64)> {
    Ok((inputs.get_i64("a")?, inputs.get_i64("b")?))
}

#[derive(Debug, Default)]
pub struct AddCalculator;

impl CalculatorPlugin for AddCalculator {
    fn name(&self) -> &str {
        "add"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let (a, b) = operands(inputs)?;
        Ok(Value::Integer(ArithmeticService.add(a, b)))
    }
}

#[derive(Debug, Default)]
pub struct SubtractCalculator;

impl CalculatorPlugin for SubtractCalculator {
    fn name(&self) -> &str {
        "subtract"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let (a, b) = operands(inputs)?;
        Ok(Value::Integer(ArithmeticService.subtract(a, b)))
    }
}

#[derive(Debug, Default)]
pub struct MultiplyCalculator;

impl CalculatorPlugin for MultiplyCalculator {
    fn name(&self) -> &str {
        "multiply"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let (a, b) = operands(inputs)?;
        Ok(Value::Integer(ArithmeticService.multiply(a, b)))
    }
}

/// Truncating integer division; a zero `b` is rejected.
#[derive(Debug, Default)]
pub struct DivideCalculator;

impl CalculatorPlugin for DivideCalculator {
    fn name(&self) -> &str {
        "divide"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let (a, b) = operands(inputs)?;
        ArithmeticService.divide(a, b).map(Value::Integer)
    }
}
