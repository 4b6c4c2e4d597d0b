use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("strike must be positive and finite, got {0}")]
    InvalidStrike(f64),
    #[error("spot must be positive and finite, got {0}")]
    InvalidSpot(f64),
    #[error("volatility must be positive and finite, got {0}")]
    InvalidVolatility(f64),
    #[error("days to expiry must be positive")]
    ZeroDaysToExpiry,
    #[error("{name} must be finite, got {value}")]
    NonFiniteRate { name: &'static str, value: f64 },
    #[error("borrow rate must be greater than -1, got {0}")]
    InvalidBorrowRate(f64),
    #[error("unrecognized option type `{0}`")]
    UnknownOptionType(String),
    #[error("unsupported greek `{0}`")]
    UnsupportedGreek(String),
}
