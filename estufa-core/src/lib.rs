//! # 🌱 estufa-core — Núcleo de Inferência Fuzzy
//!
//! Primitivas do controlador fuzzy da estufa: níveis linguísticos ordenados
//! e funções de pertinência. Este crate não conhece sensores nem atuadores —
//! apenas a matemática de fuzzificação.
//!
//! ## O Modelo
//!
//! 1. Toda leitura contínua é discretizada em **cinco níveis ordenados**
//!    (`very_low` … `very_high`)
//! 2. Cada nível recebe um **grau de pertinência** em [0, 1], calculado por
//!    uma forma geométrica (trapézio ascendente, trapézio descendente ou
//!    triângulo)
//! 3. Toda avaliação é **pura** — mesma entrada, mesma saída, sem estado
//!
//! ## Módulos
//!
//! - [`level`]: [`Level`] — os cinco níveis linguísticos
//! - [`shape`]: [`Shape`] — formas de pertinência e seus pontos de quebra
//! - [`error`]: tratamento de erros
//! - [`prelude`]: importação única
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use estufa_core::prelude::*;
//!
//! let shape = Shape::Triangle { a: 14.0, b: 20.0, c: 26.0 };
//! assert_eq!(shape.membership(20.0), 1.0);
//! assert_eq!(shape.membership(26.0), 0.0);
//! assert!(shape.validate().is_ok());
//! ```
//!
//! ## Princípios
//!
//! 1. **Avaliação é total** — qualquer real produz um grau em [0, 1]
//! 2. **Saturação é preservada** — os trapézios reproduzem exatamente a
//!    formulação de referência, incluindo a saturação fora do platô
//! 3. **Desempate é estável** — em empate de graus, vence o nível declarado
//!    primeiro

pub mod error;
pub mod level;
pub mod shape;
pub mod prelude;

pub use error::{CoreError, CoreResult};
pub use level::{Level, NUM_LEVELS};
pub use shape::Shape;
