//! Integer arithmetic
//!
//! Overflow wraps in two's complement rather than panicking, so every
//! operation is total apart from the zero divisor.

use tracing::debug;

use crate::error::{CalculatorError, DIVIDE_BY_ZERO, Result};

/// Stateless integer add/subtract/multiply/divide.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArithmeticService;

impl ArithmeticService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i64, b: i64) -> i64 {
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i64, b: i64) -> i64 {
        a.wrapping_mul(b)
    }

    /// Integer quotient truncated toward zero.
    ///
    /// Fails with "Cannot divide by zero" whenever `b == 0`, including `0 / 0`.
    /// `i64::MIN / -1` wraps to `i64::MIN`.
    pub fn divide(&self, a: i64, b: i64) -> Result<i64> {
        if b == 0 {
            debug!(a, "rejected division by zero");
            return Err(CalculatorError::invalid_argument(DIVIDE_BY_ZERO));
        }
        Ok(a.wrapping_div(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let service = ArithmeticService::new();
        assert_eq!(service.add(3, 5), 8);
        assert_eq!(service.add(-5, 3), -2);
        assert_eq!(service.add(100, -100), 0);
        assert_eq!(service.add(1_000_000, 2_000_000), 3_000_000);
    }

    #[test]
    fn test_subtract() {
        let service = ArithmeticService::new();
        assert_eq!(service.subtract(10, 4), 6);
        assert_eq!(service.subtract(5, 10), -5);
        assert_eq!(service.subtract(-5, -3), -2);
        assert_eq!(service.subtract(5, 0), 5);
    }

    #[test]
    fn test_multiply() {
        let service = ArithmeticService::new();
        assert_eq!(service.multiply(4, 5), 20);
        assert_eq!(service.multiply(-4, 5), -20);
        assert_eq!(service.multiply(-4, -5), 20);
        assert_eq!(service.multiply(12_345, 0), 0);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let service = ArithmeticService::new();
        assert_eq!(service.divide(10, 2), Ok(5));
        assert_eq!(service.divide(10, 3), Ok(3));
        assert_eq!(service.divide(-10, 3), Ok(-3));
        assert_eq!(service.divide(10, -3), Ok(-3));
        assert_eq!(service.divide(-10, -3), Ok(3));
        assert_eq!(service.divide(0, 7), Ok(0));
    }

    #[test]
    fn test_divide_by_zero() {
        let service = ArithmeticService::new();
        for a in [10, 0, -10] {
            let err = service.divide(a, 0).unwrap_err();
            assert_eq!(err.to_string(), "Cannot divide by zero");
        }
    }

    #[test]
    fn test_overflow_wraps() {
        let service = ArithmeticService::new();
        assert_eq!(service.add(i64::MAX, 1), i64::MIN);
        assert_eq!(service.subtract(i64::MIN, 1), i64::MAX);
        assert_eq!(service.divide(i64::MIN, -1), Ok(i64::MIN));
    }
}
