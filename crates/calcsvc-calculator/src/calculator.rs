use std::collections::HashMap;

use calcsvc_types::Value;
use tracing::debug;

use crate::built_in::{
    arithmetic::{AddCalculator, DivideCalculator, MultiplyCalculator, SubtractCalculator},
    strings::{ConcatenateCalculator, LengthCalculator, ReverseCalculator, ToUpperCaseCalculator},
    temperature::{
        CelsiusToFahrenheitCalculator, FahrenheitToCelsiusCalculator, IsValidCelsiusCalculator,
        KelvinToCelsiusCalculator,
    },
    volume::{CupsToMillilitresCalculator, MillilitresToCupsCalculator},
};
use crate::error::CalculatorError;
use crate::plugin::{CalculationResult, CalculatorInputs};
use crate::plugin_manager::PluginManager;

/// Name-based entry point over every built-in calculator.
pub struct Calculator {
    plugin_manager: PluginManager,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut plugin_manager = PluginManager::new();
        plugin_manager.register(Box::new(AddCalculator));
        plugin_manager.register(Box::new(SubtractCalculator));
        plugin_manager.register(Box::new(MultiplyCalculator));
        plugin_manager.register(Box::new(DivideCalculator));
        plugin_manager.register(Box::new(ConcatenateCalculator));
        plugin_manager.register(Box::new(ReverseCalculator));
        plugin_manager.register(Box::new(ToUpperCaseCalculator));
        plugin_manager.register(Box::new(LengthCalculator));
        plugin_manager.register(Box::new(CelsiusToFahrenheitCalculator));
        plugin_manager.register(Box::new(FahrenheitToCelsiusCalculator));
        plugin_manager.register(Box::new(IsValidCelsiusCalculator));
        plugin_manager.register(Box::new(KelvinToCelsiusCalculator));
        plugin_manager.register(Box::new(MillilitresToCupsCalculator));
        plugin_manager.register(Box::new(CupsToMillilitresCalculator));
        Self { plugin_manager }
    }

    /// Names of every registered calculator, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.plugin_manager.names()
    }

    pub fn calculate(&self, calculator_name: &str, args: &HashMap<String, Value>) -> CalculationResult {
        let Some(plugin) = self.plugin_manager.get(calculator_name) else {
            return Err(CalculatorError::unknown_calculator(calculator_name));
        };
        debug!(calculator = calculator_name, args = args.len(), "dispatching calculation");
        plugin.calculate(&CalculatorInputs::new(args))
    }
}
