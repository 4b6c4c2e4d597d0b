use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PricingError;

/// Trading days per year; `days_to_expiry / TRADING_DAYS_PER_YEAR` is the year fraction.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn opposite(self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownOptionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// The sensitivities a [`VanillaOption`](crate::VanillaOption) can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    Delta,
    Gamma,
    Vega,
}

impl FromStr for Greek {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta" => Ok(Greek::Delta),
            "gamma" => Ok(Greek::Gamma),
            "vega" => Ok(Greek::Vega),
            _ => Err(PricingError::UnsupportedGreek(s.to_string())),
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greek::Delta => write!(f, "delta"),
            Greek::Gamma => write!(f, "gamma"),
            Greek::Vega => write!(f, "vega"),
        }
    }
}

/// Which normal function sits in the numerator of gamma.
///
/// `Density` is the textbook Black-Scholes gamma, `phi(d1) / (S * sigma * sqrt(t))`.
/// `Cumulative` uses `N(d1)` instead; it is not a second derivative of the price and only
/// exists to reproduce figures produced with that formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GammaKernel {
    #[default]
    Density,
    Cumulative,
}

/// Static terms of a vanilla European contract.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ContractParameters {
    pub option_type: OptionType,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// the asset's current price
    pub spot: f64,
    /// annualized risk-free rate, simple compounding
    pub riskfree_rate: f64,
    /// annualized borrow (or dividend yield) rate, simple compounding
    pub borrow_rate: f64,
    /// the annualized standard deviation of the asset's returns
    pub volatility: f64,
    /// trading days until expiration
    pub days_to_expiry: u32,
}

impl ContractParameters {
    pub fn new(
        option_type: OptionType,
        strike: f64,
        spot: f64,
        riskfree_rate: f64,
        borrow_rate: f64,
        volatility: f64,
        days_to_expiry: u32,
    ) -> Self {
        Self {
            option_type,
            strike,
            spot,
            riskfree_rate,
            borrow_rate,
            volatility,
            days_to_expiry,
        }
    }

    /// Checks every precondition of the valuation formulas.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::InvalidStrike(self.strike));
        }
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::InvalidSpot(self.spot));
        }
        if !(self.volatility.is_finite() && self.volatility > 0.0) {
            return Err(PricingError::InvalidVolatility(self.volatility));
        }
        if self.days_to_expiry == 0 {
            return Err(PricingError::ZeroDaysToExpiry);
        }
        if !self.riskfree_rate.is_finite() {
            return Err(PricingError::NonFiniteRate {
                name: "riskfree rate",
                value: self.riskfree_rate,
            });
        }
        if !self.borrow_rate.is_finite() {
            return Err(PricingError::NonFiniteRate {
                name: "borrow rate",
                value: self.borrow_rate,
            });
        }
        // (1 + borrow) is a divisor of the forward rate
        if self.borrow_rate <= -1.0 {
            return Err(PricingError::InvalidBorrowRate(self.borrow_rate));
        }
        Ok(())
    }

    /// Year fraction on the trading-day convention.
    pub fn time_to_expiry(&self) -> f64 {
        self.days_to_expiry as f64 / TRADING_DAYS_PER_YEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ContractParameters {
        ContractParameters::new(OptionType::Call, 100.0, 100.0, 0.1065, 0.0010, 0.30, 21)
    }

    #[test]
    fn option_type_from_str() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" PUT ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::UnknownOptionType("straddle".to_string()))
        );
        assert_eq!(OptionType::Call.opposite(), OptionType::Put);
    }

    #[test]
    fn greek_from_str() {
        assert_eq!("Gamma".parse::<Greek>().unwrap(), Greek::Gamma);
        assert_eq!(
            "theta".parse::<Greek>(),
            Err(PricingError::UnsupportedGreek("theta".to_string()))
        );
    }

    #[test]
    fn time_to_expiry_uses_trading_days() {
        assert_eq!(reference().time_to_expiry(), 21.0 / 252.0);
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        assert!(reference().validate().is_ok());

        let mut p = reference();
        p.strike = 0.0;
        assert_eq!(p.validate(), Err(PricingError::InvalidStrike(0.0)));

        let mut p = reference();
        p.spot = -5.0;
        assert_eq!(p.validate(), Err(PricingError::InvalidSpot(-5.0)));

        let mut p = reference();
        p.volatility = 0.0;
        assert_eq!(p.validate(), Err(PricingError::InvalidVolatility(0.0)));

        let mut p = reference();
        p.days_to_expiry = 0;
        assert_eq!(p.validate(), Err(PricingError::ZeroDaysToExpiry));

        let mut p = reference();
        p.riskfree_rate = f64::INFINITY;
        assert!(matches!(
            p.validate(),
            Err(PricingError::NonFiniteRate { name: "riskfree rate", .. })
        ));

        let mut p = reference();
        p.borrow_rate = -1.0;
        assert_eq!(p.validate(), Err(PricingError::InvalidBorrowRate(-1.0)));
    }

    #[test]
    fn validate_rejects_nan_strike() {
        let mut p = reference();
        p.strike = f64::NAN;
        assert!(matches!(p.validate(), Err(PricingError::InvalidStrike(_))));
    }
}
