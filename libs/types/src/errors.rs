//! Error types for the simulator core
//!
//! Numeric validation taxonomy using thiserror. Book operations themselves
//! are total and signal not-found conditions through return values, so the
//! only fallible boundary is constructing domain values from raw input.

use thiserror::Error;

/// Errors raised when constructing prices and quantities from raw input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_price_display() {
        let err = NumericError::InvalidPrice("-3".to_string());
        assert_eq!(err.to_string(), "Invalid price: -3");
    }

    #[test]
    fn test_invalid_quantity_display() {
        let err = NumericError::InvalidQuantity("abc".to_string());
        assert_eq!(err.to_string(), "Invalid quantity: abc");
    }
}
