//! Pricing result type.
//!
//! Provides [`OptionResult<T>`], the price and first/second-order Greeks of
//! one European option.

use num_traits::Float;
use pricer_core::types::PricingError;

/// Price and Greeks of a European option.
///
/// # Fields
///
/// - `price`: present value
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ, per unit of volatility (not per vol point)
/// - `theta`: ∂V/∂t, per year
///
/// # Examples
///
/// ```rust
/// use pricer_models::{price, OptionKind, OptionRequest};
///
/// let request = OptionRequest::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// let result = price(&request);
///
/// assert!(result.is_finite());
/// assert!((result.price - 10.45).abs() < 0.01);
/// assert!((result.theta_per_day(365.0) - result.theta / 365.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionResult<T: Float> {
    /// Present value of the option.
    pub price: T,
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: T,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: T,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: T,
    /// Theta: ∂V/∂t (time decay per year).
    pub theta: T,
}

impl<T: Float> OptionResult<T> {
    /// Returns `true` when every field is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    /// Returns the result unchanged if every field is finite.
    ///
    /// # Errors
    /// `PricingError::NumericalInstability` naming the first non-finite field.
    pub fn ensure_finite(self) -> Result<Self, PricingError> {
        match self.fields().iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(PricingError::NumericalInstability(format!(
                "{} is {}",
                name,
                value.to_f64().unwrap_or(f64::NAN)
            ))),
            None => Ok(self),
        }
    }

    /// Theta rescaled to a per-day figure.
    ///
    /// The engine reports theta per year; this divides by `days_per_year`
    /// (typically 365 or 252).
    #[inline]
    pub fn theta_per_day(&self, days_per_year: T) -> T {
        self.theta / days_per_year
    }

    /// Named fields in display order.
    #[inline]
    pub fn fields(&self) -> [(&'static str, T); 5] {
        [
            ("Price", self.price),
            ("Delta", self.delta),
            ("Gamma", self.gamma),
            ("Vega", self.vega),
            ("Theta", self.theta),
        ]
    }
}
