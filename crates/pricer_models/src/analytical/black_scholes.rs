//! Black-Scholes pricing engine for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! With ω = +1 for a call and -1 for a put:
//! - Delta = ω·N(ω·d₁)
//! - Gamma = φ(d₁) / (S·σ·√T)
//! - Vega = S·√T·φ(d₁)
//! - Theta = -S·σ·φ(d₁) / (2√T) - ω·r·K·e^(-rT)·N(ω·d₂)
//!
//! The engine does not inspect its inputs. Spot, strike, time to expiry and
//! volatility outside (0, ∞) yield NaN or ±∞ in at least one output.

use num_traits::Float;
use pricer_core::math::distributions::{constant, norm_cdf, norm_pdf};

use super::request::OptionRequest;
use super::result::OptionResult;

/// Intermediate terms shared by every Black-Scholes output of one request.
///
/// Built once per request by [`NormalArguments::new`]; every formula reads
/// d₁ and d₂ from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalArguments<T: Float> {
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    pub d1: T,
    /// d₂ = d₁ - σ√T
    pub d2: T,
    /// √T
    pub sqrt_t: T,
    /// e^(-rT)
    pub discount: T,
}

impl<T: Float> NormalArguments<T> {
    /// Computes d₁, d₂ and the auxiliary terms for `request`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::black_scholes::NormalArguments;
    /// use pricer_models::{OptionKind, OptionRequest};
    ///
    /// // ATM with r = 0: d1 = σ√T / 2, d2 = -σ√T / 2
    /// let request = OptionRequest::new(100.0_f64, 100.0, 1.0, 0.0, 0.2, OptionKind::Call);
    /// let args = NormalArguments::new(&request);
    /// assert!((args.d1 - 0.1).abs() < 1e-12);
    /// assert!((args.d2 + 0.1).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn new(request: &OptionRequest<T>) -> Self {
        let sqrt_t = request.time_to_expiry().sqrt();
        let d1 = d1(
            request.spot(),
            request.strike(),
            request.time_to_expiry(),
            request.risk_free_rate(),
            request.volatility(),
        );

        Self {
            d1,
            d2: d2(d1, request.time_to_expiry(), request.volatility()),
            sqrt_t,
            discount: (-request.risk_free_rate() * request.time_to_expiry()).exp(),
        }
    }
}

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1<T: Float>(spot: T, strike: T, expiry: T, rate: T, volatility: T) -> T {
    let half = constant::<T>(0.5);
    let log_moneyness = (spot / strike).ln();
    let drift = (rate + half * volatility * volatility) * expiry;

    (log_moneyness + drift) / (volatility * expiry.sqrt())
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2<T: Float>(d1: T, expiry: T, volatility: T) -> T {
    d1 - volatility * expiry.sqrt()
}

/// Black-Scholes engine.
///
/// Stateless: every method is a pure function of its arguments and safe to
/// call concurrently.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::{OptionKind, OptionRequest};
///
/// let call = OptionRequest::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionKind::Call);
/// let put = call.with_kind(OptionKind::Put);
///
/// let c = BlackScholes::price(&call);
/// let p = BlackScholes::price(&put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c.price - p.price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Prices `request` and computes its Greeks from one d₁/d₂ evaluation.
    #[inline]
    pub fn price<T: Float>(request: &OptionRequest<T>) -> OptionResult<T> {
        let args = NormalArguments::new(request);

        OptionResult {
            price: Self::option_price(request, &args),
            delta: Self::delta(request, &args),
            gamma: Self::gamma(request, &args),
            vega: Self::vega(request, &args),
            theta: Self::theta(request, &args),
        }
    }

    /// Option premium.
    ///
    /// - Call: S·N(d₁) - K·e^(-rT)·N(d₂)
    /// - Put: K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn option_price<T: Float>(request: &OptionRequest<T>, args: &NormalArguments<T>) -> T {
        let spot = request.spot();
        let discounted_strike = request.strike() * args.discount;

        if request.kind().is_call() {
            spot * norm_cdf(args.d1) - discounted_strike * norm_cdf(args.d2)
        } else {
            discounted_strike * norm_cdf(-args.d2) - spot * norm_cdf(-args.d1)
        }
    }

    /// Delta (∂V/∂S) = ω·N(ω·d₁).
    ///
    /// Call delta lies in [0, 1], put delta in [-1, 0].
    #[inline]
    pub fn delta<T: Float>(request: &OptionRequest<T>, args: &NormalArguments<T>) -> T {
        let omega = request.kind().sign::<T>();
        omega * norm_cdf(omega * args.d1)
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T).
    ///
    /// Identical for calls and puts.
    #[inline]
    pub fn gamma<T: Float>(request: &OptionRequest<T>, args: &NormalArguments<T>) -> T {
        norm_pdf(args.d1) / (request.spot() * request.volatility() * args.sqrt_t)
    }

    /// Vega (∂V/∂σ) = S·√T·φ(d₁).
    ///
    /// Identical for calls and puts.
    #[inline]
    pub fn vega<T: Float>(request: &OptionRequest<T>, args: &NormalArguments<T>) -> T {
        request.spot() * args.sqrt_t * norm_pdf(args.d1)
    }

    /// Theta (∂V/∂t), per year.
    ///
    /// -S·σ·φ(d₁) / (2√T) - ω·r·K·e^(-rT)·N(ω·d₂)
    #[inline]
    pub fn theta<T: Float>(request: &OptionRequest<T>, args: &NormalArguments<T>) -> T {
        let omega = request.kind().sign::<T>();
        let two = constant::<T>(2.0);

        let decay =
            -(request.spot() * request.volatility() * norm_pdf(args.d1)) / (two * args.sqrt_t);
        let carry = omega
            * request.risk_free_rate()
            * request.strike()
            * args.discount
            * norm_cdf(omega * args.d2);

        decay - carry
    }
}

/// Prices `request`. Shorthand for [`BlackScholes::price`].
///
/// # Examples
/// ```
/// use pricer_models::{price, OptionKind, OptionRequest};
///
/// let result = price(&OptionRequest::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionKind::Put));
/// assert!((result.price - 5.57).abs() < 0.01);
/// assert!((result.delta + 0.36).abs() < 0.01);
/// ```
#[inline]
pub fn price<T: Float>(request: &OptionRequest<T>) -> OptionResult<T> {
    BlackScholes::price(request)
}
