use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number {0}")]
    NegativeSquareRoot(f64),

    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },
}

/// Toy integer calculator. Overflow is reported instead of wrapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        a.checked_add(b).ok_or(CalculatorError::Overflow { operation: "add" })
    }

    pub fn subtract(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        a.checked_sub(b)
            .ok_or(CalculatorError::Overflow { operation: "subtract" })
    }

    pub fn multiply(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        a.checked_mul(b)
            .ok_or(CalculatorError::Overflow { operation: "multiply" })
    }

    pub fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(f64::from(a) / f64::from(b))
    }

    pub fn power(&self, base: i32, exponent: u32) -> Result<i32, CalculatorError> {
        base.checked_pow(exponent)
            .ok_or(CalculatorError::Overflow { operation: "power" })
    }

    pub fn square_root(&self, number: f64) -> Result<f64, CalculatorError> {
        if number < 0.0 {
            return Err(CalculatorError::NegativeSquareRoot(number));
        }
        Ok(number.sqrt())
    }
}
