//! Price command implementation
//!
//! Prices a single European option given on the command line.

use std::io::Write;

use clap::Args;
use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::{price, OptionKind, OptionRequest};
use tracing::{debug, info, warn};

use crate::config::OutputFormat;
use crate::display::{self, DisplayOptions};
use crate::input::number_arg;
use crate::Result;

/// Contract and market inputs for `bsgreeks price`.
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Spot price of the underlying (S)
    #[arg(long, value_parser = number_arg, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, value_parser = number_arg, allow_negative_numbers = true)]
    pub strike: f64,

    /// Time to expiry in years (T)
    #[arg(long, value_parser = number_arg, allow_negative_numbers = true)]
    pub expiry: f64,

    /// Continuously-compounded risk-free rate (r)
    #[arg(long, value_parser = number_arg, allow_negative_numbers = true)]
    pub rate: f64,

    /// Annualised volatility (sigma)
    #[arg(long, value_parser = number_arg, allow_negative_numbers = true)]
    pub volatility: f64,

    /// Option type: c/call or p/put
    #[arg(long)]
    pub kind: OptionKind,

    /// Output format (table, json)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report theta per day instead of per year
    #[arg(long)]
    pub theta_per_day: bool,
}

impl PriceArgs {
    /// Validated pricing request.
    pub fn to_request(&self) -> std::result::Result<OptionRequest<f64>, AnalyticalError> {
        OptionRequest::try_new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            self.volatility,
            self.kind,
        )
    }
}

/// Run the price command
pub fn run<W: Write>(out: &mut W, args: &PriceArgs, options: &DisplayOptions) -> Result<()> {
    info!(
        spot = args.spot,
        strike = args.strike,
        expiry = args.expiry,
        rate = args.rate,
        volatility = args.volatility,
        kind = %args.kind,
        "Pricing option"
    );

    let request = args.to_request().map_err(|err| {
        warn!(error = %err, "Request rejected");
        PricingError::from(err)
    })?;

    let result = price(&request).ensure_finite()?;
    debug!(
        price = result.price,
        delta = result.delta,
        gamma = result.gamma,
        vega = result.vega,
        theta = result.theta,
        "Pricing complete"
    );

    display::write_result(out, &request, &result, options)
}
