//! Closed-form Black-Scholes valuation of vanilla European options.
//!
//! ```
//! use vanilla_pricing::{ContractParameters, OptionType, VanillaOption};
//!
//! let params = ContractParameters::new(OptionType::Call, 100.0, 100.0, 0.1065, 0.0010, 0.30, 21);
//! let call = VanillaOption::new(params).unwrap();
//! let put = call.with_option_type(OptionType::Put);
//! assert!((call.delta() - put.delta() - 1.0).abs() < 1e-12);
//! ```

pub mod analytic;
pub mod common;
pub mod config;
pub mod error;

pub use analytic::black_scholes::{forward_rate, norm_cdf, norm_pdf, Valuation, VanillaOption};
pub use common::models::{
    ContractParameters, GammaKernel, Greek, OptionType, TRADING_DAYS_PER_YEAR,
};
pub use config::ScenarioConfig;
pub use error::PricingError;
