//! Volume calculators

use calcsvc_types::Value;

use crate::plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin};
use crate::volume::VolumeService;

#[derive(Debug, Default)]
pub struct MillilitresToCupsCalculator;

impl CalculatorPlugin for MillilitresToCupsCalculator {
    fn name(&self) -> &str {
        "millilitres_to_cups"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let millilitres = inputs.get_f64("millilitres")?;
        VolumeService.millilitres_to_cups(millilitres).map(Value::Float)
    }
}

#[derive(Debug, Default)]
pub struct CupsToMillilitresCalculator;

impl CalculatorPlugin for CupsToMillilitresCalculator {
    fn name(&self) -> &str {
        "cups_to_millilitres"
    }

    fn calculate(&self, inputs: &CalculatorInputs<'_>) -> CalculationResult {
        let cups = inputs.get_f64("cups")?;
        VolumeService.cups_to_millilitres(cups).map(Value::Float)
    }
}
