//! Core financial and error types.
//!
//! This module provides:
//! - `option_kind`: The call/put discriminator shared by every layer
//! - `error`: Structured error types for pricing and input parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionKind`] from `option_kind`
//! - [`PricingError`], [`OptionKindError`] from `error`

pub mod error;
pub mod option_kind;

pub use error::{OptionKindError, PricingError};
pub use option_kind::OptionKind;
