//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Reasons a request is rejected before pricing

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// The engine never returns these. They are produced by
/// [`OptionRequest::try_new`](super::OptionRequest::try_new) when a request
/// falls outside the Black-Scholes domain.
///
/// # Variants
/// - `NonFiniteInput`: A field is NaN or infinite
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Non-positive time to expiry
/// - `InvalidVolatility`: Non-positive volatility
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// A field is NaN or infinite.
    #[error("Non-finite input: {field} = {value}")]
    NonFiniteInput {
        /// Name of the offending field
        field: &'static str,
        /// The offending value
        value: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid time to expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
