//! Erros do núcleo fuzzy

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

/// Erros das primitivas de pertinência
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("Degenerate shape: {0}")]
    DegenerateShape(String),

    #[error("Invalid level index: {0}")]
    InvalidLevelIndex(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::DegenerateShape("a == b".into());
        assert!(err.to_string().contains("Degenerate shape"));
    }

    #[test]
    fn test_invalid_index_display() {
        let err = CoreError::InvalidLevelIndex(7);
        assert_eq!(err.to_string(), "Invalid level index: 7");
    }
}
