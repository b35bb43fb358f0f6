use std::io;

use thiserror::Error;

/// Errors raised at the boundary of the solver: malformed amounts, bad
/// denomination sets and I/O failures in the interactive session.
///
/// An amount that no combination of coins can reach is not an error; see
/// [`crate::Solution::Unreachable`].
#[derive(Debug, Error)]
pub enum ChangeError {
    #[error("not a valid integer amount: {0:?}")]
    InvalidAmount(String),

    #[error("amount must not be negative: {0}")]
    NegativeAmount(i128),

    #[error("amount {amount} exceeds the limit of {limit}")]
    AmountTooLarge { amount: i128, limit: usize },

    #[error("not a valid denomination: {0:?}")]
    InvalidDenomination(String),

    #[error("denominations must be positive")]
    ZeroDenomination,

    #[error("denomination {0} listed more than once")]
    DuplicateDenomination(usize),

    #[error("at least one denomination is required")]
    EmptyDenominations,

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ChangeError {
    pub fn invalid_amount<S: Into<String>>(text: S) -> Self {
        ChangeError::InvalidAmount(text.into())
    }

    pub fn invalid_denomination<S: Into<String>>(text: S) -> Self {
        ChangeError::InvalidDenomination(text.into())
    }
}

pub type Result<T> = std::result::Result<T, ChangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ChangeError::invalid_amount("abc").to_string(),
            "not a valid integer amount: \"abc\""
        );
        assert_eq!(
            ChangeError::NegativeAmount(-5).to_string(),
            "amount must not be negative: -5"
        );
        assert_eq!(
            ChangeError::DuplicateDenomination(20).to_string(),
            "denomination 20 listed more than once"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ChangeError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, ChangeError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "i/o error: closed");
    }
}
