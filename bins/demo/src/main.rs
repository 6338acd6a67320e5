//! Cambio demo
//!
//! Runs a fixed set of conversions and prints one line per result.
//!
//! Usage: cargo run --bin cambio

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cambio_core::CurrencyConverter;
use cambio_shared::{AppConfig, LogConfig, LogFormat};

/// Conversions shown by the demo: (amount, from, to).
const CONVERSIONS: [(i64, &str, &str); 3] = [
    (100, "USD", "EUR"),
    (50, "GBP", "JPY"),
    (1000, "JPY", "CAD"),
];

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.log);

    let converter = CurrencyConverter::new();
    for rate in converter.rates() {
        debug!(currency = %rate.currency, rate = %rate.rate, "Loaded exchange rate");
    }

    println!("=== Currency Converter Demo ===\n");

    for (units, from, to) in CONVERSIONS {
        let amount = Decimal::from(units);
        let result = converter
            .convert(amount, from, to)
            .with_context(|| format!("Failed to convert {amount} {from} to {to}"))?;
        println!("{amount} {from} = {result} {to}");
    }

    println!("\nConversions complete.");
    info!(count = CONVERSIONS.len(), "Demo finished");

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only results.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    match log.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}
