//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced at the pricing boundary
//! - `OptionKindError`: Errors from parsing a call/put indicator

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// The analytical engine itself never fails: out-of-domain inputs propagate
/// as non-finite numbers. `PricingError` is what the boundary layer reports
/// when it rejects a request before it reaches the engine.
///
/// # Variants
/// - `InvalidInput`: Market data or contract parameters outside the model domain
/// - `NumericalInstability`: The engine produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Non-finite output from the engine
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Option kind parsing errors.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKindError;
///
/// let err = OptionKindError::Unknown("x".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Unknown option kind 'x': expected 'c' for call or 'p' for put"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionKindError {
    /// Input did not name a call or a put.
    #[error("Unknown option kind '{0}': expected 'c' for call or 'p' for put")]
    Unknown(String),
}

impl From<OptionKindError> for PricingError {
    fn from(err: OptionKindError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::InvalidInput("spot must be positive".to_string());
        assert_eq!(format!("{}", err), "Invalid input: spot must be positive");

        let err = PricingError::NumericalInstability("price is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: price is NaN");
    }

    #[test]
    fn test_option_kind_error_display() {
        let err = OptionKindError::Unknown("straddle".to_string());
        assert!(format!("{}", err).contains("straddle"));
    }

    #[test]
    fn test_option_kind_error_to_pricing_error() {
        let err: PricingError = OptionKindError::Unknown("z".to_string()).into();
        match err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("'z'")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;

        let err = OptionKindError::Unknown("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
