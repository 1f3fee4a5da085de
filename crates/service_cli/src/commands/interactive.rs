//! Interactive command implementation
//!
//! Prompts for the six pricing inputs, prices, prints and starts over.
//! A field that does not parse is asked for again; a request outside the
//! model domain is reported and the whole form restarts. End of input or
//! `q` at any prompt ends the session.

use std::io::{self, BufRead, Write};

use pricer_core::types::{OptionKind, PricingError};
use pricer_models::{price, OptionRequest};
use tracing::{debug, info, warn};

use crate::display::{self, DisplayOptions};
use crate::input::{is_quit, parse_kind, parse_number, INVALID_KIND, INVALID_NUMBER};
use crate::Result;

/// Prompts in the order they are asked.
pub const PROMPT_SPOT: &str = "Enter Stock price (S): ";
pub const PROMPT_STRIKE: &str = "Enter Strike price (K): ";
pub const PROMPT_EXPIRY: &str = "Enter Time to expiration (T): ";
pub const PROMPT_RATE: &str = "Enter Risk-free interest rate (r): ";
pub const PROMPT_VOLATILITY: &str = "Enter Volatility (sigma): ";
pub const PROMPT_KIND: &str = "Enter Option type (c for call, p for put): ";

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Requests priced and displayed
    pub priced: usize,
    /// Complete forms rejected by validation or producing non-finite output
    pub rejected: usize,
}

/// Run the interactive command on stdin/stdout
pub fn run(options: &DisplayOptions) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_session(stdin.lock(), &mut stdout.lock(), options)?;

    info!(
        priced = summary.priced,
        rejected = summary.rejected,
        "Interactive session ended"
    );
    Ok(summary)
}

/// Runs the prompt loop until `input` is exhausted or the user quits.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    options: &DisplayOptions,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    while let Some(request) = read_request(&mut input, out)? {
        let result = request
            .map_err(PricingError::from)
            .and_then(|request| {
                price(&request)
                    .ensure_finite()
                    .map(|result| (request, result))
            });

        match result {
            Ok((request, result)) => {
                debug!(price = result.price, kind = %request.kind(), "Priced request");
                display::write_result(out, &request, &result, options)?;
                summary.priced += 1;
            }
            Err(err) => {
                warn!(error = %err, "Request rejected");
                writeln!(out, "{}", err)?;
                summary.rejected += 1;
            }
        }
    }

    Ok(summary)
}

type FormResult = std::result::Result<OptionRequest<f64>, pricer_models::AnalyticalError>;

/// Collects one complete form. `None` once the session should end.
fn read_request<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<FormResult>> {
    let mut numbers = [0.0; 5];
    let prompts = [
        PROMPT_SPOT,
        PROMPT_STRIKE,
        PROMPT_EXPIRY,
        PROMPT_RATE,
        PROMPT_VOLATILITY,
    ];

    for (slot, prompt) in numbers.iter_mut().zip(prompts) {
        match ask(input, out, prompt, INVALID_NUMBER, parse_number)? {
            Some(value) => *slot = value,
            None => return Ok(None),
        }
    }

    let kind: OptionKind = match ask(input, out, PROMPT_KIND, INVALID_KIND, parse_kind)? {
        Some(kind) => kind,
        None => return Ok(None),
    };

    let [spot, strike, expiry, rate, volatility] = numbers;
    Ok(Some(OptionRequest::try_new(spot, strike, expiry, rate, volatility, kind)))
}

/// Asks `prompt` until `parse` accepts a line. `None` on end of input or quit.
///
/// Lines that are not UTF-8 are decoded lossily and rejected by `parse`.
fn ask<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    invalid: &str,
    parse: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("End of input");
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        if is_quit(&line) {
            return Ok(None);
        }

        match parse(&line) {
            Some(value) => return Ok(Some(value)),
            None => writeln!(out, "{}", invalid)?,
        }
    }
}
