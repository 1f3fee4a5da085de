//! Analytical pricing formulas for European options.
//!
//! This module provides the Black-Scholes closed form:
//! - `request`: the six pricing inputs and their boundary validation
//! - `result`: price plus Delta, Gamma, Vega, Theta
//! - `black_scholes`: the engine and the individual formulas
//! - `error`: `AnalyticalError` for rejected requests
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f32` and `f64`
//! - **Single evaluation of d1/d2** per request, shared by every output
//! - **Numerical Stability**: Uses an erfc-based CDF, symmetric about zero

pub mod black_scholes;
pub mod error;
pub mod request;
pub mod result;

// Re-export main types at module level
pub use black_scholes::{price, BlackScholes};
pub use error::AnalyticalError;
pub use request::OptionRequest;
pub use result::OptionResult;
