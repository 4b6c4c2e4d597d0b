use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analytic::black_scholes::VanillaOption;
use crate::common::models::{ContractParameters, GammaKernel, OptionType};

/// A set of contracts to value together, read from TOML:
///
/// ```toml
/// gamma_kernel = "density"
///
/// [[contracts]]
/// option_type = "call"
/// strike = 100.0
/// spot = 100.0
/// riskfree_rate = 0.1065
/// borrow_rate = 0.0010
/// volatility = 0.30
/// days_to_expiry = 21
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub gamma_kernel: GammaKernel,
    pub contracts: Vec<ContractParameters>,
}

impl Default for ScenarioConfig {
    /// One call and one put at the money, 21 trading days out.
    fn default() -> Self {
        let call = ContractParameters::new(OptionType::Call, 100.0, 100.0, 0.1065, 0.0010, 0.30, 21);
        let put = ContractParameters {
            option_type: OptionType::Put,
            ..call
        };
        Self {
            gamma_kernel: GammaKernel::default(),
            contracts: vec![call, put],
        }
    }
}

impl ScenarioConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ScenarioConfig = toml::from_str(s).context("invalid scenario TOML")?;
        if config.contracts.is_empty() {
            anyhow::bail!("scenario contains no contracts");
        }
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            contracts = config.contracts.len(),
            "loaded scenario"
        );
        Ok(config)
    }

    /// Builds every contract, failing on the first invalid one.
    pub fn build(&self) -> Result<Vec<VanillaOption>> {
        self.contracts
            .iter()
            .enumerate()
            .map(|(i, params)| {
                VanillaOption::new(*params).with_context(|| format!("contract #{}", i + 1))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"
gamma_kernel = "cumulative"

[[contracts]]
option_type = "call"
strike = 110.0
spot = 100.0
riskfree_rate = 0.05
borrow_rate = 0.02
volatility = 0.25
days_to_expiry = 63
"#;

    #[test]
    fn parses_toml() {
        let config = ScenarioConfig::from_toml_str(SCENARIO).unwrap();
        assert_eq!(config.gamma_kernel, GammaKernel::Cumulative);
        assert_eq!(config.contracts.len(), 1);
        let contract = config.contracts[0];
        assert_eq!(contract.option_type, OptionType::Call);
        assert_eq!(contract.strike, 110.0);
        assert_eq!(contract.days_to_expiry, 63);
    }

    #[test]
    fn gamma_kernel_defaults_to_density() {
        let without_kernel = SCENARIO.replace("gamma_kernel = \"cumulative\"", "");
        let config = ScenarioConfig::from_toml_str(&without_kernel).unwrap();
        assert_eq!(config.gamma_kernel, GammaKernel::Density);
    }

    #[test]
    fn rejects_unknown_option_type() {
        let bad = SCENARIO.replace("\"call\"", "\"straddle\"");
        let err = ScenarioConfig::from_toml_str(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("unrecognized option type"));
    }

    #[test]
    fn rejects_empty_scenario() {
        assert!(ScenarioConfig::from_toml_str("contracts = []").is_err());
    }

    #[test]
    fn build_reports_invalid_contract() {
        let bad = SCENARIO.replace("days_to_expiry = 63", "days_to_expiry = 0");
        let config = ScenarioConfig::from_toml_str(&bad).unwrap();
        let err = config.build().unwrap_err();
        assert!(format!("{err:#}").contains("contract #1"));
        assert!(format!("{err:#}").contains("days to expiry must be positive"));
    }

    #[test]
    fn default_is_a_call_put_pair() {
        let options = ScenarioConfig::default().build().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].option_type(), OptionType::Call);
        assert_eq!(options[1].option_type(), OptionType::Put);
        assert_eq!(options[0].d1(), options[1].d1());
    }
}
