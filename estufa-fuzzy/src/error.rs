//! Erros da camada de fuzzificação

use thiserror::Error;
use estufa_core::CoreError;

pub type FuzzyResult<T> = Result<T, FuzzyError>;

/// Erros do módulo de fuzzificação
///
/// A fuzzificação em si é total sobre os reais; a única superfície falível
/// é a validação de perfis com pontos de quebra degenerados.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FuzzyError {
    #[error("Invalid profile for {variable}: {message}")]
    InvalidProfile {
        variable: &'static str,
        message: String,
    },
}

impl FuzzyError {
    /// Erro de perfil a partir de um erro de forma do núcleo
    pub fn profile(variable: &'static str, err: CoreError) -> Self {
        FuzzyError::InvalidProfile {
            variable,
            message: err.to_string(),
        }
    }
}
