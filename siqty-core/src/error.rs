//! Error types for quantity operations.

/// Error type for checked quantity operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// `equals_within` was given a tolerance that is zero, negative or NaN (SI value attached).
    #[error("tolerance must be greater than zero, got {0}")]
    NonPositiveTolerance(f64),
}

/// Error type for parsing `"<number> <symbol>"` text into a quantity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseQuantityError {
    /// The input was empty or whitespace only.
    #[error("cannot parse a quantity from an empty string")]
    Empty,

    /// The leading token is not a number.
    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    /// A number was found but no unit symbol follows it.
    #[error("missing unit symbol after `{0}`")]
    MissingUnit(String),

    /// The symbol is not registered for the target dimension.
    #[error("unknown {dimension} unit `{symbol}`")]
    UnknownUnit {
        /// Name of the dimension that was searched.
        dimension: &'static str,
        /// The symbol as written in the input.
        symbol: String,
    },
}
