use thiserror::Error;

/// Unified error type for the payin configuration library.
///
/// The resolvers themselves are total; errors only arise when ingesting
/// backend payloads or converting user-entered amounts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("amount error: {0}")]
    Amount(#[from] AmountError),
}

/// Errors while converting a human-readable amount into smallest units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid character {found:?} in amount")]
    InvalidCharacter { found: char },

    #[error("amount has {actual} fractional digits, token allows {allowed}")]
    TooPrecise { allowed: u8, actual: usize },
}
