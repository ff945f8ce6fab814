use thiserror::Error;

/// Errors raised by the chunking and fixed-point helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("scale mismatch: {left} decimals vs {right} decimals")]
    ScaleMismatch { left: u32, right: u32 },
}

impl UtilError {
    pub fn invalid(message: impl Into<String>) -> Self {
        UtilError::InvalidArgument(message.into())
    }
}

pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(UtilError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            UtilError::invalid("chunk size must be positive").to_string(),
            "invalid argument: chunk size must be positive"
        );
        assert_eq!(
            UtilError::ScaleMismatch { left: 18, right: 6 }.to_string(),
            "scale mismatch: 18 decimals vs 6 decimals"
        );
    }
}
