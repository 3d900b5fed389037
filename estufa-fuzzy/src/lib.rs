//! # 🌡️ estufa-fuzzy — Fuzzificação Sensorial
//!
//! Converte leituras cruas dos quatro sensores da estufa (temperatura,
//! umidade do ar, luminosidade, umidade do solo) em vetores de pertinência
//! sobre os cinco níveis linguísticos.
//!
//! ## Arquitetura
//!
//! ```text
//! leitura crua (f64)
//!        ↓
//! ┌─────────────────────────────────────┐
//! │  VariableProfile (5 formas fixas)   │
//! │  very_low low medium high very_high │
//! └─────────────────────────────────────┘
//!        ↓ fuzzify()
//! MembershipVector (5 graus + dominante)
//! ```
//!
//! Cada variável tem um perfil estático com uma forma de pertinência por
//! nível. A fuzzificação avalia as cinco formas em ordem de enumeração e
//! deriva o rótulo dominante por varredura esquerda→direita com comparação
//! estritamente maior: em empate, vence o nível declarado primeiro.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use estufa_core::Level;
//! use estufa_fuzzy::SensorVariable;
//!
//! let vector = SensorVariable::Temperature.fuzzify(20.0);
//! assert_eq!(vector.dominant(), Level::Medium);
//! assert_eq!(vector.degree(Level::Medium), 1.0);
//! ```
//!
//! ## Módulos
//!
//! - [`types`] - Variáveis sensoriais e vetor de pertinência
//! - [`profile`] - Perfis estáticos das quatro variáveis
//! - [`error`] - Tratamento de erros

pub mod error;
pub mod types;
pub mod profile;

pub use error::{FuzzyError, FuzzyResult};
pub use types::{MembershipVector, SensorVariable};
pub use profile::VariableProfile;

// Re-exportar o núcleo
pub use estufa_core::prelude::*;
