//! Prices a scenario of vanilla options and prints their Greeks.
//!
//! Usage: `vanilla-demo [scenario.toml]`; without a path the built-in at-the-money
//! call/put pair is valued.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vanilla_pricing::{OptionType, ScenarioConfig, VanillaOption};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::default(),
    };
    let options = config.build()?;

    for option in &options {
        println!(
            "{} K={} S={} days={}: price {:.6}, delta {:.6}, gamma {:.6}, vega {:.6}",
            option.option_type(),
            option.strike(),
            option.spot(),
            option.days_to_expiry(),
            option.price(),
            option.delta(),
            option.gamma_with(config.gamma_kernel),
            option.vega(),
        );
    }

    for (call, put) in parity_pairs(&options) {
        println!(
            "call delta - put delta (K={}): {:.12}",
            call.strike(),
            call.delta() - put.delta()
        );
    }

    Ok(())
}

/// Calls matched with a put on identical terms.
fn parity_pairs(options: &[VanillaOption]) -> Vec<(&VanillaOption, &VanillaOption)> {
    options
        .iter()
        .filter(|o| o.option_type() == OptionType::Call)
        .filter_map(|call| {
            options
                .iter()
                .find(|o| **o == call.with_option_type(OptionType::Put))
                .map(|put| (call, put))
        })
        .collect()
}
