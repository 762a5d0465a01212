#![deny(warnings)]
//! Stateless calculation utilities.
//!
//! Four independent services cover integer arithmetic, string manipulation,
//! temperature conversion and drink-volume conversion. Each is a zero-sized,
//! `Copy` type whose methods are pure functions; a violated precondition is
//! reported as [`CalculatorError::InvalidArgument`] carrying a fixed message.
//!
//! For hosting layers that only know operation names at runtime, every
//! operation is also registered as a [`CalculatorPlugin`] on [`Calculator`].
//!
//! ```
//! use calcsvc_calculator::{ArithmeticService, VolumeService};
//!
//! assert_eq!(ArithmeticService.divide(10, 3), Ok(3));
//! assert_eq!(VolumeService.cups_to_millilitres(0.25), Ok(62.5));
//! assert_eq!(
//!     ArithmeticService.divide(1, 0).unwrap_err().to_string(),
//!     "Cannot divide by zero"
//! );
//! ```

pub mod arithmetic;
pub mod built_in;
pub mod calculator;
pub mod error;
pub mod plugin;
pub mod plugin_manager;
pub mod strings;
pub mod temperature;
pub mod volume;

pub use arithmetic::ArithmeticService;
pub use calcsvc_types::Value;
pub use calculator::Calculator;
pub use error::{CalculatorError, ErrorCode, Result};
pub use plugin::{CalculationResult, CalculatorInputs, CalculatorPlugin};
pub use plugin_manager::PluginManager;
pub use strings::StringService;
pub use temperature::TemperatureService;
pub use volume::VolumeService;
