//! # pricer_core: Numerical Foundation for the Black-Scholes Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - The call/put discriminator: `OptionKind` (`types::option_kind`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Dependencies
//!
//! No other workspace crate. External crates:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::OptionKind;
//!
//! let kind: OptionKind = "c".parse().unwrap();
//! assert_eq!(kind, OptionKind::Call);
//! assert_eq!(kind.sign::<f64>(), 1.0);
//!
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
