//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod interactive;
pub mod price;
