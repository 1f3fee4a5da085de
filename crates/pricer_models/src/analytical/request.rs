//! Pricing request for a single European option.

use num_traits::Float;
use pricer_core::types::OptionKind;

use super::error::AnalyticalError;

/// Inputs to the Black-Scholes engine.
///
/// Plain immutable data. [`OptionRequest::new`] accepts any values; the
/// engine is defined only for strictly positive spot, strike, time to expiry
/// and volatility, and produces non-finite output otherwise. Callers that
/// want to reject such input up front use [`OptionRequest::try_new`].
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f32`, `f64`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::OptionRequest;
/// use pricer_models::OptionKind;
///
/// let request = OptionRequest::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// assert_eq!(request.spot(), 100.0);
/// assert_eq!(request.kind(), OptionKind::Call);
///
/// assert!(OptionRequest::try_new(100.0_f64, 100.0, 0.0, 0.05, 0.2, OptionKind::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionRequest<T: Float> {
    /// Spot price of the underlying (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    time_to_expiry: T,
    /// Continuously-compounded annual risk-free rate (r), may be negative
    risk_free_rate: T,
    /// Annualised volatility (σ)
    volatility: T,
    /// Call or put
    kind: OptionKind,
}

impl<T: Float> OptionRequest<T> {
    /// Creates a request without validation.
    pub fn new(
        spot: T,
        strike: T,
        time_to_expiry: T,
        risk_free_rate: T,
        volatility: T,
        kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            kind,
        }
    }

    /// Creates a request, rejecting input outside the Black-Scholes domain.
    ///
    /// Checks run in this order: every field finite, then spot, strike,
    /// time to expiry and volatility strictly positive. The rate may take
    /// any finite value.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any field is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if time to expiry <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::{AnalyticalError, OptionRequest};
    /// use pricer_models::OptionKind;
    ///
    /// let ok = OptionRequest::try_new(100.0_f64, 95.0, 0.5, -0.01, 0.3, OptionKind::Call);
    /// assert!(ok.is_ok());
    ///
    /// let err = OptionRequest::try_new(-1.0_f64, 95.0, 0.5, 0.01, 0.3, OptionKind::Call);
    /// assert_eq!(err.unwrap_err(), AnalyticalError::InvalidSpot { spot: -1.0 });
    /// ```
    pub fn try_new(
        spot: T,
        strike: T,
        time_to_expiry: T,
        risk_free_rate: T,
        volatility: T,
        kind: OptionKind,
    ) -> Result<Self, AnalyticalError> {
        let fields = [
            ("spot", spot),
            ("strike", strike),
            ("time_to_expiry", time_to_expiry),
            ("risk_free_rate", risk_free_rate),
            ("volatility", volatility),
        ];
        if let Some((field, value)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(AnalyticalError::NonFiniteInput {
                field,
                value: to_f64(value),
            });
        }

        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot { spot: to_f64(spot) });
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: to_f64(strike),
            });
        }

        if time_to_expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: to_f64(time_to_expiry),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: to_f64(volatility),
            });
        }

        Ok(Self::new(
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            kind,
        ))
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> T {
        self.time_to_expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> T {
        self.risk_free_rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the same contract with the other kind.
    #[inline]
    pub fn with_kind(&self, kind: OptionKind) -> Self {
        Self { kind, ..*self }
    }
}

#[inline]
fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<OptionRequest<f64>, AnalyticalError> {
        OptionRequest::try_new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)
    }

    #[test]
    fn test_try_new_valid() {
        let request = valid().unwrap();
        assert_eq!(request.spot(), 100.0);
        assert_eq!(request.strike(), 100.0);
        assert_eq!(request.time_to_expiry(), 1.0);
        assert_eq!(request.risk_free_rate(), 0.05);
        assert_eq!(request.volatility(), 0.2);
        assert_eq!(request.kind(), OptionKind::Call);
    }

    #[test]
    fn test_new_does_not_validate() {
        let request = OptionRequest::new(-1.0_f64, 0.0, -2.0, 0.05, 0.0, OptionKind::Put);
        assert_eq!(request.spot(), -1.0);
        assert_eq!(request.time_to_expiry(), -2.0);
    }

    #[test]
    fn test_try_new_matches_new_for_valid_input() {
        let checked = valid().unwrap();
        let unchecked = OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn test_negative_rate_allowed() {
        let result = OptionRequest::try_new(100.0_f64, 100.0, 1.0, -0.02, 0.2, OptionKind::Put);
        assert!(result.is_ok());
    }

    #[test]
    fn test_invalid_spot() {
        for spot in [0.0, -100.0] {
            let result = OptionRequest::try_new(spot, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
            assert_eq!(result.unwrap_err(), AnalyticalError::InvalidSpot { spot });
        }
    }

    #[test]
    fn test_invalid_strike() {
        for strike in [0.0, -5.0] {
            let result = OptionRequest::try_new(100.0, strike, 1.0, 0.05, 0.2, OptionKind::Call);
            assert_eq!(
                result.unwrap_err(),
                AnalyticalError::InvalidStrike { strike }
            );
        }
    }

    #[test]
    fn test_invalid_expiry() {
        for expiry in [0.0, -0.25] {
            let result = OptionRequest::try_new(100.0, 100.0, expiry, 0.05, 0.2, OptionKind::Call);
            assert_eq!(
                result.unwrap_err(),
                AnalyticalError::InvalidExpiry { expiry }
            );
        }
    }

    #[test]
    fn test_invalid_volatility() {
        for volatility in [0.0, -0.2] {
            let result =
                OptionRequest::try_new(100.0, 100.0, 1.0, 0.05, volatility, OptionKind::Call);
            assert_eq!(
                result.unwrap_err(),
                AnalyticalError::InvalidVolatility { volatility }
            );
        }
    }

    #[test]
    fn test_non_finite_fields_rejected_first() {
        let result = OptionRequest::try_new(-1.0, 100.0, 1.0, f64::NAN, 0.2, OptionKind::Call);
        match result {
            Err(AnalyticalError::NonFiniteInput { field, value }) => {
                assert_eq!(field, "risk_free_rate");
                assert!(value.is_nan());
            }
            other => panic!("Expected NonFiniteInput, got {:?}", other),
        }

        let result =
            OptionRequest::try_new(100.0, f64::INFINITY, 1.0, 0.05, 0.2, OptionKind::Call);
        assert!(matches!(
            result,
            Err(AnalyticalError::NonFiniteInput { field: "strike", .. })
        ));
    }

    #[test]
    fn test_validation_order() {
        // Spot is reported before strike, expiry and volatility
        let result = OptionRequest::try_new(0.0_f64, 0.0, 0.0, 0.05, 0.0, OptionKind::Call);
        assert!(matches!(result, Err(AnalyticalError::InvalidSpot { .. })));

        let result = OptionRequest::try_new(1.0_f64, 1.0, 0.0, 0.05, 0.0, OptionKind::Call);
        assert!(matches!(result, Err(AnalyticalError::InvalidExpiry { .. })));
    }

    #[test]
    fn test_with_kind() {
        let call = valid().unwrap();
        let put = call.with_kind(OptionKind::Put);
        assert_eq!(put.kind(), OptionKind::Put);
        assert_eq!(put.spot(), call.spot());
        assert_eq!(put.volatility(), call.volatility());
    }

    #[test]
    fn test_f32_compatibility() {
        let request = OptionRequest::try_new(100.0_f32, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
        assert!(request.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(valid().unwrap()).unwrap();
        assert_eq!(json["spot"], 100.0);
        assert_eq!(json["time_to_expiry"], 1.0);
        assert_eq!(json["risk_free_rate"], 0.05);
        assert_eq!(json["kind"], "call");
    }
}
