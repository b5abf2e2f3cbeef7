//! Error types for term construction and configuration.
//!
//! Matching itself never produces an error: a mismatch is reported as `None`
//! from [`unify`](crate::backend::eval::unify). Only building terms and loading
//! configuration can fail.

/// Construction and configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    /// A constructor received an unusable argument (e.g. an empty variable name)
    InvalidArgument(String),
    /// A configuration document could not be parsed
    InvalidConfig(String),
}

impl std::fmt::Display for UnifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for UnifyError {}

/// Result type for construction and configuration
pub type UnifyResult<T> = Result<T, UnifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = UnifyError::InvalidArgument("variable name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid argument: variable name must not be empty"
        );
    }

    #[test]
    fn test_display_invalid_config() {
        let err = UnifyError::InvalidConfig("expected a table".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: expected a table");
    }
}
