//! Formas de pertinência e seus pontos de quebra
//!
//! Três formas geométricas convertem um valor real em grau de pertinência:
//!
//! ```text
//! 1 ┤      ____           ____          /\
//!   │     /                   \        /  \
//! 0 ┤ ___/             ____    \___   /    \___
//!   └──a──b──c──d──   ──a──c──d────  ─a───b───c─
//!     ascendente       descendente    triângulo
//! ```
//!
//! Os trapézios não cortam o lado oposto ao da rampa: o ascendente permanece
//! em 1 para qualquer `x > c` e o descendente permanece em 1 para qualquer
//! `x < a`. O ponto de quebra restante (`d` no ascendente, `b` no
//! descendente) é carregado no descritor mas não participa da fórmula.

use serde::{Deserialize, Serialize};
use crate::error::{CoreError, CoreResult};

/// Descritor de forma de pertinência: tipo + pontos de quebra
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Rampa linear de `a` a `b`, platô em 1 de `b` a `c`; satura em 1
    /// para `x > c` (a rampa continua e é grampeada, `d` é ignorado)
    RisingTrapezoid { a: f64, b: f64, c: f64, d: f64 },
    /// Platô em 1 de `a` a `c`, rampa linear de `c` a `d`; satura em 1
    /// para `x < a` (`b` é ignorado)
    FallingTrapezoid { a: f64, b: f64, c: f64, d: f64 },
    /// Zero fora de (`a`, `c`), rampa até o ápice em `b`, queda até `c`.
    /// Exige `a < b < c`
    Triangle { a: f64, b: f64, c: f64 },
}

impl Shape {
    /// Grau de pertinência de `x` nesta forma, sempre em [0, 1]
    #[inline]
    pub fn membership(&self, x: f64) -> f64 {
        let mu = match *self {
            Shape::RisingTrapezoid { a, b, c, .. } => {
                if b <= x && x <= c {
                    1.0
                } else {
                    (x - a) / (b - a)
                }
            }
            Shape::FallingTrapezoid { a, c, d, .. } => {
                if a <= x && x <= c {
                    1.0
                } else {
                    (d - x) / (d - c)
                }
            }
            Shape::Triangle { a, b, c } => {
                if x <= a || x >= c {
                    0.0
                } else if x <= b {
                    (x - a) / (b - a)
                } else {
                    (c - x) / (c - b)
                }
            }
        };
        mu.clamp(0.0, 1.0)
    }

    /// Valida os pontos de quebra da forma
    ///
    /// As rampas dividem pela largura do trecho inclinado; pontos de quebra
    /// coincidentes nesse trecho causariam divisão por zero. Triângulos
    /// exigem `a < b < c`; o trapézio ascendente exige `a < b` e o
    /// descendente exige `c < d`.
    pub fn validate(&self) -> CoreResult<()> {
        match *self {
            Shape::RisingTrapezoid { a, b, .. } => {
                if a < b {
                    Ok(())
                } else {
                    Err(CoreError::DegenerateShape(format!(
                        "Rising trapezoid requires a < b, got a = {}, b = {}",
                        a, b
                    )))
                }
            }
            Shape::FallingTrapezoid { c, d, .. } => {
                if c < d {
                    Ok(())
                } else {
                    Err(CoreError::DegenerateShape(format!(
                        "Falling trapezoid requires c < d, got c = {}, d = {}",
                        c, d
                    )))
                }
            }
            Shape::Triangle { a, b, c } => {
                if a < b && b < c {
                    Ok(())
                } else {
                    Err(CoreError::DegenerateShape(format!(
                        "Triangle requires a < b < c, got ({}, {}, {})",
                        a, b, c
                    )))
                }
            }
        }
    }

    /// Nome do tipo da forma no formato de serialização
    pub const fn kind(&self) -> &'static str {
        match self {
            Shape::RisingTrapezoid { .. } => "rising_trapezoid",
            Shape::FallingTrapezoid { .. } => "falling_trapezoid",
            Shape::Triangle { .. } => "triangle",
        }
    }

    /// Pontos de quebra na ordem declarada
    pub fn breakpoints(&self) -> Vec<f64> {
        match *self {
            Shape::RisingTrapezoid { a, b, c, d } => vec![a, b, c, d],
            Shape::FallingTrapezoid { a, b, c, d } => vec![a, b, c, d],
            Shape::Triangle { a, b, c } => vec![a, b, c],
        }
    }
}
