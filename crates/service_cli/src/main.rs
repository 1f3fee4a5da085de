//! bsgreeks - Black-Scholes pricing and Greeks from the command line
//!
//! # Commands
//!
//! - `bsgreeks price --spot S --strike K --expiry T --rate r --volatility sigma --kind c|p`
//! - `bsgreeks interactive` - prompt for inputs repeatedly (the default)
//!
//! Results go to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use service_cli::commands::{self, price::PriceArgs};
use service_cli::config::{build_config, CliArgs};
use service_cli::display::DisplayOptions;
use service_cli::{CliError, Result};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Black-Scholes European option pricer
#[derive(Parser)]
#[command(name = "bsgreeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Decimal places in table output
    #[arg(long, global = true, value_name = "N")]
    decimal_places: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single option and print its Greeks
    Price(PriceArgs),

    /// Prompt for inputs, price, and repeat until end of input
    Interactive,
}

impl Cli {
    fn config_args(&self) -> Result<CliArgs> {
        if let Some(path) = self.config.as_deref().filter(|path| !path.exists()) {
            return Err(CliError::InvalidArgument(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let (output_format, theta_per_day) = match &self.command {
            Some(Commands::Price(args)) => (args.format, args.theta_per_day),
            _ => (None, false),
        };

        let log_level = match (&self.log_level, self.verbose) {
            (None, true) => Some("debug".to_string()),
            (level, _) => level.clone(),
        };

        Ok(CliArgs {
            config_file: self.config.clone(),
            log_level,
            output_format,
            decimal_places: self.decimal_places,
            theta_per_day,
        })
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn failure_message(err: &CliError) -> String {
    format!("Error: {}", err)
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.config_args()?)?;

    init_tracing(config.log_level.as_filter_str());

    info!("bsgreeks v{}", service_cli::VERSION);
    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        decimal_places = config.decimal_places,
        theta_convention = %config.theta_convention,
        days_per_year = config.days_per_year,
        "Configuration loaded"
    );

    let options = DisplayOptions::from(&config);

    match cli.command {
        Some(Commands::Price(args)) => {
            let stdout = std::io::stdout();
            commands::price::run(&mut stdout.lock(), &args, &options)
        }
        Some(Commands::Interactive) | None => commands::interactive::run(&options).map(|_| ()),
    }
}
