use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pay_engine::calculation::calculate_pay;
use pay_engine::config::{ConfigLoader, RateFormat};
use pay_engine::sources::{RateSource, load_rate_source, read_source};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for pay results
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One sentence per employee (default)
    Text,
    /// One JSON object per employee
    Json,
}

/// Encoding of the rate table
#[derive(Debug, Clone, Copy, ValueEnum)]
enum RatesFormat {
    /// DAY|HH:MM|HH:MM|RATE lines
    Text,
    /// YAML document with a `rates` list
    Yaml,
}

impl From<RatesFormat> for RateFormat {
    fn from(format: RatesFormat) -> Self {
        match format {
            RatesFormat::Text => RateFormat::Text,
            RatesFormat::Yaml => RateFormat::Yaml,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pay-engine")]
#[command(version)]
#[command(about = "Calculate employee pay from worked hours and an hourly rate table", long_about = None)]
struct Cli {
    /// YAML configuration file (command-line options override it)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Rate table file [default: payment_rates.txt]
    #[arg(short, long, value_name = "PATH")]
    rates: Option<PathBuf>,

    /// Encoding of the rate table [default: text]
    #[arg(long, value_enum)]
    rates_format: Option<RatesFormat>,

    /// Worked-hours file, one NAME=UNIT,... record per line [default: worked_hours.txt]
    #[arg(short, long, value_name = "PATH")]
    worked_hours: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize tracing subscriber, honouring RUST_LOG when set
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::default(),
    };

    let rates_path = cli.rates.clone().unwrap_or_else(|| loader.rates_path());
    let rates_format = cli
        .rates_format
        .map(RateFormat::from)
        .unwrap_or(loader.config().rates.format);
    let worked_hours_path = cli
        .worked_hours
        .clone()
        .unwrap_or_else(|| loader.worked_hours_path());

    let rate_source = load_rate_source(&rates_path, rates_format)
        .with_context(|| format!("loading pay rates from {}", rates_path.display()))?;
    let records = read_source(&worked_hours_path)?;

    let mut stdout = io::stdout().lock();
    for (index, record) in records.lines().enumerate() {
        let record = record.trim();
        if record.is_empty() {
            continue;
        }

        let result = calculate_pay(record, rate_source.get_rates()).with_context(|| {
            format!(
                "calculating pay for line {} of {}",
                index + 1,
                worked_hours_path.display()
            )
        })?;
        info!(name = %result.name, total_pay = result.total_pay, "Employee paid");

        match cli.format {
            OutputFormat::Text => writeln!(
                stdout,
                "The amount to pay {} is: {} {}",
                result.name,
                result.total_pay,
                loader.currency()
            )?,
            OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string(&result)?)?,
        }
    }

    Ok(())
}
