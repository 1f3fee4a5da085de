//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form Black-Scholes pricing of European options.
//!
//! This crate provides:
//! - Request/result value types (`OptionRequest`, `OptionResult`)
//! - The pricing engine: price, delta, gamma, vega and theta from a single
//!   d1/d2 evaluation
//! - Checked request construction for callers that want to reject
//!   out-of-domain input before pricing
//!
//! ## Design Principles
//!
//! - **Pure functions**: no state, no I/O, no allocation beyond the result
//! - **Generic over `T: Float`**: `f32` and `f64` share one implementation
//! - **Infallible engine**: out-of-domain input propagates NaN/∞; validation
//!   lives in `OptionRequest::try_new`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;

pub use analytical::{price, AnalyticalError, BlackScholes, OptionRequest, OptionResult};
pub use pricer_core::types::OptionKind;
