use probability::distribution::{Continuous, Distribution, Gaussian};

use crate::common::models::{ContractParameters, GammaKernel, Greek, OptionType};
use crate::error::PricingError;

/// Standard normal cumulative distribution function.
pub fn norm_cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

/// Standard normal probability density.
pub fn norm_pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

/// Rate implied by covered interest-rate parity between the risk-free and the borrow rate.
pub fn forward_rate(riskfree_rate: f64, borrow_rate: f64) -> f64 {
    (1.0 + riskfree_rate) / (1.0 + borrow_rate) - 1.0
}

/// Point-in-time snapshot of a contract's value and sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
}

/// European vanilla option under Black-Scholes, discounting at the forward rate.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// All derived terms are computed once in [`VanillaOption::new`]; the value is immutable
/// afterwards, so every query on the same instance returns bit-identical results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    params: ContractParameters,
    /// year fraction, `days_to_expiry / 252`
    t: f64,
    fwd_rate: f64,
    /// sigma * sqrt(t)
    sigma_exp: f64,
    d1: f64,
    d2: f64,
}

impl VanillaOption {
    pub fn new(params: ContractParameters) -> Result<Self, PricingError> {
        params.validate()?;

        let t = params.time_to_expiry();
        let fwd_rate = forward_rate(params.riskfree_rate, params.borrow_rate);
        let sigma_exp = params.volatility * t.sqrt();
        let d1 = ((params.spot / params.strike).ln()
            + (fwd_rate + params.volatility.powi(2) / 2.0) * t)
            / sigma_exp;
        let d2 = d1 - sigma_exp;

        tracing::debug!(
            option_type = %params.option_type,
            strike = params.strike,
            spot = params.spot,
            fwd_rate,
            t,
            d1,
            d2,
            "constructed vanilla option"
        );

        Ok(Self {
            params,
            t,
            fwd_rate,
            sigma_exp,
            d1,
            d2,
        })
    }

    /// The same contract with a different direction.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            params: ContractParameters {
                option_type,
                ..self.params
            },
            ..*self
        }
    }

    pub fn parameters(&self) -> &ContractParameters {
        &self.params
    }

    pub fn option_type(&self) -> OptionType {
        self.params.option_type
    }

    pub fn strike(&self) -> f64 {
        self.params.strike
    }

    pub fn spot(&self) -> f64 {
        self.params.spot
    }

    pub fn riskfree_rate(&self) -> f64 {
        self.params.riskfree_rate
    }

    pub fn borrow_rate(&self) -> f64 {
        self.params.borrow_rate
    }

    pub fn volatility(&self) -> f64 {
        self.params.volatility
    }

    pub fn days_to_expiry(&self) -> u32 {
        self.params.days_to_expiry
    }

    pub fn time_to_expiry(&self) -> f64 {
        self.t
    }

    pub fn forward_rate(&self) -> f64 {
        self.fwd_rate
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// `exp(-fwd_rate * t)`
    pub fn discount_factor(&self) -> f64 {
        (-self.fwd_rate * self.t).exp()
    }

    /// The price (theoretical value) of the option. Not floored at zero.
    pub fn price(&self) -> f64 {
        let spot = self.params.spot;
        let pv_strike = self.params.strike * self.discount_factor();
        match self.params.option_type {
            OptionType::Call => spot * norm_cdf(self.d1) - pv_strike * norm_cdf(self.d2),
            OptionType::Put => pv_strike * norm_cdf(-self.d2) - spot * norm_cdf(-self.d1),
        }
    }

    pub fn delta(&self) -> f64 {
        match self.params.option_type {
            OptionType::Call => norm_cdf(self.d1),
            OptionType::Put => -norm_cdf(-self.d1),
        }
    }

    /// Textbook gamma, identical for calls and puts.
    pub fn gamma(&self) -> f64 {
        self.gamma_with(GammaKernel::Density)
    }

    pub fn gamma_with(&self, kernel: GammaKernel) -> f64 {
        let numerator = match kernel {
            GammaKernel::Density => norm_pdf(self.d1),
            GammaKernel::Cumulative => norm_cdf(self.d1),
        };
        numerator / (self.params.spot * self.sigma_exp)
    }

    /// Price change per unit (not per percentage point) of volatility.
    pub fn vega(&self) -> f64 {
        self.params.spot * norm_pdf(self.d1) * self.t.sqrt()
    }

    pub fn greek(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta(),
            Greek::Gamma => self.gamma(),
            Greek::Vega => self.vega(),
        }
    }

    pub fn valuation(&self) -> Valuation {
        Valuation {
            price: self.price(),
            delta: self.delta(),
            gamma: self.gamma(),
            vega: self.vega(),
        }
    }
}
