//! # 🚿 estufa-decision — Tabelas de Decisão e Motor de Regras
//!
//! Converte os rótulos dominantes das quatro variáveis sensoriais em níveis
//! de atuação para os cinco atuadores da estufa.
//!
//! ## Arquitetura
//!
//! ```text
//! rótulos dominantes (temp, umid, luz, solo)
//!        ↓
//! ┌──────────────────────────────────────────────┐
//! │  heating(temp, umid)    cooling(temp, umid)  │
//! │  shading(temp, luz)     irrigation(umid, solo)│
//! │  lighting(luz)                               │
//! └──────────────────────────────────────────────┘
//!        ↓ evaluate()
//! Decision (um nível por atuador)
//! ```
//!
//! As cinco tabelas são independentes, puras e totais: todo par de rótulos
//! tem saída definida, garantida pelo `match` exaustivo sobre a enumeração —
//! não existe resultado "regra indefinida".
//!
//! O módulo [`engine`] também oferece o ciclo completo ([`infer`]):
//! fuzzificação das quatro leituras cruas seguida da avaliação das regras,
//! sem estado entre chamadas. Quem decide *quando* recomputar (laço de
//! eventos, polling) é o chamador.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use estufa_core::Level;
//! use estufa_decision::{infer, SensorReadings};
//!
//! let readings = SensorReadings::new(20.0, 60.0, 10000.0, 70.0);
//! let result = infer(&readings);
//!
//! assert_eq!(result.decision.heating, Level::Medium);
//! assert_eq!(result.decision.lighting, Level::Medium);
//! ```
//!
//! ## Módulos
//!
//! - [`types`] - Atuadores e registro de decisão
//! - [`tables`] - As cinco tabelas de decisão
//! - [`engine`] - Motor de regras e ciclo completo de inferência

pub mod types;
pub mod tables;
pub mod engine;

pub use types::{Actuator, Decision};
pub use engine::{evaluate, infer, Inference, SensorReadings};

// Re-exportar as camadas inferiores
pub use estufa_core::prelude::*;
pub use estufa_fuzzy::{MembershipVector, SensorVariable};
