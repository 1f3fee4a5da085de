//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function N(x)
//! - `norm_pdf`: Probability density function φ(x)
//!
//! All functions are generic over `T: Float`, so `f32` and `f64` share one
//! implementation.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Converts an `f64` literal into `T`.
///
/// Every `Float` type in use represents these constants; a type that cannot
/// yields NaN, which then propagates like any other out-of-domain value.
#[inline]
pub fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function for non-negative arguments.
///
/// Abramowitz and Stegun formula 7.1.26, evaluated with Horner's method.
/// Maximum absolute error 1.5e-7.
#[inline]
fn erfc_non_negative<T: Float>(z: T) -> T {
    let p = constant::<T>(0.327_591_1);
    let a1 = constant::<T>(0.254_829_592);
    let a2 = constant::<T>(-0.284_496_736);
    let a3 = constant::<T>(1.421_413_741);
    let a4 = constant::<T>(-1.453_152_027);
    let a5 = constant::<T>(1.061_405_429);

    let t = T::one() / (T::one() + p * z);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    t * poly * (-z * z).exp()
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as `0.5 * erfc(-x / sqrt(2))`.
///
/// The tail mass `0.5 * erfc(|x| / sqrt(2))` is computed once for `|x|` and
/// reflected for the other half-line, so `norm_cdf(x) + norm_cdf(-x) == 1`
/// holds to rounding for every `x != 0`, and to within 1e-9 at zero.
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite `x`. NaN input returns NaN.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.0_f64) - 0.841_344_746).abs() < 1e-7);
/// assert!((norm_cdf(-1.0_f64) + norm_cdf(1.0_f64) - 1.0).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = constant::<T>(0.5);
    let z = x.abs() / constant::<T>(std::f64::consts::SQRT_2);
    let tail = half * erfc_non_negative(z);

    if x < T::zero() {
        tail
    } else {
        T::one() - tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-9);
/// assert!((norm_pdf(1.0_f64) - 0.241_970_724_5).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-constant::<T>(0.5) * x * x).exp()
}
