//! bsgreeks - command-line Black-Scholes pricer
//!
//! Library half of the `bsgreeks` binary: configuration, input parsing,
//! result rendering and the command implementations. The binary in
//! `main.rs` only parses arguments, initialises tracing and dispatches.
//!
//! # Modules
//!
//! - [`config`]: `CliConfig` loaded from TOML, environment and flags
//! - [`input`]: number and option-kind parsing shared by every command
//! - [`display`]: table and JSON rendering
//! - [`commands`]: `price` and `interactive`

pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod input;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
