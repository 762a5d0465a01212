//! String calculators
//!
//! `concatenate` takes `a` and `b`; the others take a single `s`.

use calcsvc_types::Value;

use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin};
use crate::strings::StringService;

#[derive(Debug, Default)]
pub struct ConcatenateCalculator;

impl CalculatorPlugin for ConcatenateCalculator {
    fn name(&self) -> &str {
        "concatenate"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let a = inputs.get_str("a")?;
        let b = inputs.get_str("b")?;
        Ok(Value::String(StringService.concatenate(a, b)))
    }
}

#[derive(Debug, Default)]
pub struct ReverseCalculator;

impl CalculatorPlugin for ReverseCalculator {
    fn name(&self) -> &str {
        "reverse"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        Ok(Value::String(StringService.reverse(inputs.get_str("s")?)))
    }
}

#[derive(Debug, Default)]
pub struct ToUpperCaseCalculator;

impl CalculatorPlugin for ToUpperCaseCalculator {
    fn name(&self) -> &str {
        "to_upper_case"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        Ok(Value::String(StringService.to_upper_case(inputs.get_str("s")?)))
    }
}

/// Character count of `s`. A missing or `Null` `s` is the null sentinel and is
/// rejected with "String cannot be null". Counts saturate at `i64::MAX`, which no
/// in-memory string can reach.
#[derive(Debug, Default)]
pub struct LengthCalculator;

impl CalculatorPlugin for LengthCalculator {
    fn name(&self) -> &str {
        "length"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let length = StringService.get_length(inputs.get_optional_str("s")?)?;
        Ok(Value::Integer(i64::try_from(length).unwrap_or(i64::MAX)))
    }
}
