//! Rendering of pricing results.

use std::fmt::Write as _;
use std::io::Write;

use pricer_models::{OptionRequest, OptionResult};
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat, ThetaConvention};
use crate::Result;

/// Output settings derived from [`CliConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    /// Table or JSON
    pub format: OutputFormat,
    /// Decimal places in table output
    pub decimal_places: usize,
    /// Unit in which theta is reported
    pub theta_convention: ThetaConvention,
    /// Day count for the per-day convention
    pub days_per_year: f64,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&CliConfig::default())
    }
}

impl From<&CliConfig> for DisplayOptions {
    fn from(config: &CliConfig) -> Self {
        Self {
            format: config.output_format,
            decimal_places: config.decimal_places,
            theta_convention: config.theta_convention,
            days_per_year: config.days_per_year,
        }
    }
}

impl DisplayOptions {
    /// Result with theta expressed in the configured unit.
    pub fn apply(&self, result: &OptionResult<f64>) -> OptionResult<f64> {
        match self.theta_convention {
            ThetaConvention::PerYear => *result,
            ThetaConvention::PerDay => OptionResult {
                theta: result.theta_per_day(self.days_per_year),
                ..*result
            },
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    request: &'a OptionRequest<f64>,
    result: OptionResult<f64>,
    theta_convention: ThetaConvention,
}

/// Renders the `Option Parameters:` block.
///
/// # Examples
/// ```
/// use pricer_models::OptionResult;
/// use service_cli::display::{render_table, DisplayOptions};
///
/// let result = OptionResult {
///     price: 10.4506,
///     delta: 0.6368,
///     gamma: 0.0188,
///     vega: 37.524,
///     theta: -6.414,
/// };
/// let table = render_table(&result, &DisplayOptions::default());
/// assert!(table.contains("Price: 10.45\n"));
/// assert!(table.contains("Theta: -6.41\n"));
/// ```
pub fn render_table(result: &OptionResult<f64>, options: &DisplayOptions) -> String {
    let shown = options.apply(result);
    let places = options.decimal_places;

    let mut table = String::from("\nOption Parameters:\n");
    for (name, value) in shown.fields() {
        let label = match (name, options.theta_convention) {
            ("Theta", ThetaConvention::PerDay) => "Theta (per day)",
            _ => name,
        };
        // Writing into a String cannot fail
        let _ = writeln!(table, "{}: {:.*}", label, places, value);
    }
    table.push('\n');
    table
}

/// Renders `{ "request": ..., "result": ..., "theta_convention": ... }`.
///
/// Non-finite figures serialise as `null`.
pub fn render_json(
    request: &OptionRequest<f64>,
    result: &OptionResult<f64>,
    options: &DisplayOptions,
) -> Result<String> {
    let report = Report {
        request,
        result: options.apply(result),
        theta_convention: options.theta_convention,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes `result` to `out` in the configured format.
pub fn write_result<W: Write>(
    out: &mut W,
    request: &OptionRequest<f64>,
    result: &OptionResult<f64>,
    options: &DisplayOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Table => out.write_all(render_table(result, options).as_bytes())?,
        OutputFormat::Json => writeln!(out, "{}", render_json(request, result, options)?)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::OptionKind;

    fn request() -> OptionRequest<f64> {
        OptionRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call)
    }

    fn result() -> OptionResult<f64> {
        OptionResult {
            price: 10.450575,
            delta: 0.636831,
            gamma: 0.018762,
            vega: 37.52403,
            theta: -6.414028,
        }
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&result(), &DisplayOptions::default());
        assert_eq!(
            table,
            "\nOption Parameters:\n\
             Price: 10.45\n\
             Delta: 0.64\n\
             Gamma: 0.02\n\
             Vega: 37.52\n\
             Theta: -6.41\n\n"
        );
    }

    #[test]
    fn test_table_decimal_places() {
        let options = DisplayOptions {
            decimal_places: 4,
            ..Default::default()
        };
        let table = render_table(&result(), &options);
        assert!(table.contains("Gamma: 0.0188\n"));
        assert!(table.contains("Price: 10.4506\n"));

        let options = DisplayOptions {
            decimal_places: 0,
            ..Default::default()
        };
        assert!(render_table(&result(), &options).contains("Vega: 38\n"));
    }

    #[test]
    fn test_table_theta_per_day() {
        let options = DisplayOptions {
            theta_convention: ThetaConvention::PerDay,
            decimal_places: 4,
            ..Default::default()
        };
        let table = render_table(&result(), &options);
        assert!(table.contains("Theta (per day): -0.0176\n"));
        assert!(table.contains("Price: 10.4506\n"));
    }

    #[test]
    fn test_table_shows_nan() {
        let bad = OptionResult {
            gamma: f64::NAN,
            ..result()
        };
        let table = render_table(&bad, &DisplayOptions::default());
        assert!(table.contains("Gamma: NaN\n"));
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&request(), &result(), &DisplayOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["request"]["spot"], 100.0);
        assert_eq!(value["request"]["kind"], "call");
        assert_relative_eq!(
            value["result"]["price"].as_f64().unwrap(),
            10.450575,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            value["result"]["theta"].as_f64().unwrap(),
            -6.414028,
            epsilon = 1e-12
        );
        assert_eq!(value["theta_convention"], "per_year");
    }

    #[test]
    fn test_json_theta_per_day() {
        let options = DisplayOptions {
            theta_convention: ThetaConvention::PerDay,
            days_per_year: 252.0,
            ..Default::default()
        };
        let json = render_json(&request(), &result(), &options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_relative_eq!(
            value["result"]["theta"].as_f64().unwrap(),
            -6.414028 / 252.0,
            epsilon = 1e-12
        );
        assert_eq!(value["theta_convention"], "per_day");
    }

    #[test]
    fn test_json_non_finite_is_null() {
        let bad = OptionResult {
            vega: f64::INFINITY,
            ..result()
        };
        let json = render_json(&request(), &bad, &DisplayOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["result"]["vega"].is_null());
    }

    #[test]
    fn test_write_result_dispatches_on_format() {
        let mut out = Vec::new();
        write_result(&mut out, &request(), &result(), &DisplayOptions::default()).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\nOption Parameters:"));

        let options = DisplayOptions {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let mut out = Vec::new();
        write_result(&mut out, &request(), &result(), &options).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.trim_start().starts_with('{'));
        assert!(text.ends_with("}\n"));
    }
}
