//! Drink volume conversion between millilitres and cups
//!
//! Uses the fixed rate of 1 cup = 250 mL.

use tracing::debug;

use crate::error::{CalculatorError, NEGATIVE_VOLUME, Result};

/// Millilitres in one cup.
pub const ML_PER_CUP: f64 = 250.0;

/// Stateless volume converter.
#[derive(Debug, Default, Clone, Copy)]
pub struct VolumeService;

impl VolumeService {
    pub fn new() -> Self {
        Self
    }

    /// `cups = mL / 250`, rejecting negative volumes.
    pub fn millilitres_to_cups(&self, millilitres: f64) -> Result<f64> {
        check_non_negative(millilitres)?;
        Ok(millilitres / ML_PER_CUP)
    }

    /// `mL = cups × 250`, rejecting negative volumes.
    pub fn cups_to_millilitres(&self, cups: f64) -> Result<f64> {
        check_non_negative(cups)?;
        Ok(cups * ML_PER_CUP)
    }
}

fn check_non_negative(volume: f64) -> Result<()> {
    if volume < 0.0 {
        debug!(volume, "rejected negative volume");
        return Err(CalculatorError::invalid_argument(NEGATIVE_VOLUME));
    }
    Ok(())
}
