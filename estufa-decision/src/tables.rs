//! As cinco tabelas de decisão
//!
//! Cada tabela é uma função pura e total de um ou dois rótulos dominantes
//! para o nível de atuação. Os `match` internos enumeram todos os níveis
//! sem braço coringa: um nível novo na enumeração quebraria a compilação
//! aqui, nunca cairia num "else" silencioso.

use estufa_core::Level;
use estufa_core::Level::{VeryLow, Low, Medium, High, VeryHigh};

/// Aquecimento, indexado por (temperatura, umidade do ar)
///
/// Dirigido principalmente pela temperatura; a umidade modula os degraus
/// intermediários. Ar seco e frio pede mais aquecimento que ar úmido e frio.
pub fn heating(temp: Level, hum: Level) -> Level {
    match temp {
        VeryLow => match hum {
            VeryLow | Low => VeryHigh,
            Medium | High | VeryHigh => High,
        },
        Low => match hum {
            VeryLow | Low | Medium => High,
            High | VeryHigh => Medium,
        },
        Medium => match hum {
            VeryHigh => Low,
            VeryLow | Low | Medium | High => Medium,
        },
        High => Low,
        VeryHigh => VeryLow,
    }
}

/// Resfriamento, indexado por (temperatura, umidade do ar)
pub fn cooling(temp: Level, hum: Level) -> Level {
    match temp {
        VeryLow => VeryLow,
        Low => Low,
        Medium => match hum {
            VeryLow => Low,
            Low | Medium | High | VeryHigh => Medium,
        },
        High => match hum {
            VeryLow | Low => Medium,
            Medium | High | VeryHigh => High,
        },
        VeryHigh => match hum {
            High | VeryHigh => VeryHigh,
            VeryLow | Low | Medium => High,
        },
    }
}

/// Sombreamento, indexado por (temperatura, luminosidade)
///
/// Matriz 5×5 completa: mais luz e/ou mais calor pedem mais sombra.
pub fn shading(temp: Level, light: Level) -> Level {
    match temp {
        VeryLow => match light {
            VeryLow | Low => VeryLow,
            Medium => Low,
            High | VeryHigh => Medium,
        },
        Low => match light {
            VeryLow => VeryLow,
            Low | Medium => Low,
            High => Medium,
            VeryHigh => High,
        },
        Medium => match light {
            VeryLow => VeryLow,
            Low => Low,
            Medium | High => Medium,
            VeryHigh => High,
        },
        High => match light {
            VeryLow | Low => Low,
            Medium => Medium,
            High | VeryHigh => High,
        },
        VeryHigh => match light {
            VeryLow => Low,
            Low | Medium => Medium,
            High => High,
            VeryHigh => VeryHigh,
        },
    }
}

/// Irrigação, indexada por (umidade do ar, umidade do solo)
///
/// Solo seco com ar seco pede irrigação máxima; ar saturado com solo
/// encharcado desliga o sistema.
pub fn irrigation(hum: Level, soil: Level) -> Level {
    match hum {
        VeryLow => match soil {
            VeryLow | Low => VeryHigh,
            Medium | High => High,
            VeryHigh => Medium,
        },
        Low => match soil {
            VeryLow | Low | Medium => High,
            High | VeryHigh => Medium,
        },
        Medium => match soil {
            VeryLow => High,
            VeryHigh => Low,
            Low | Medium | High => Medium,
        },
        High => match soil {
            VeryLow | Low => Medium,
            Medium | High | VeryHigh => Low,
        },
        VeryHigh => match soil {
            VeryLow | Low | Medium => Low,
            High | VeryHigh => VeryLow,
        },
    }
}

/// Iluminação artificial, indexada apenas pela luminosidade
///
/// Mapa inverso monótono: quanto menos luz natural, mais luz artificial.
pub fn lighting(light: Level) -> Level {
    match light {
        VeryLow => VeryHigh,
        Low => High,
        Medium => Medium,
        High => Low,
        VeryHigh => VeryLow,
    }
}
