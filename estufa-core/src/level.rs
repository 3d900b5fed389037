//! Níveis linguísticos ordenados

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{CoreError, CoreResult};

/// Quantidade de níveis linguísticos
pub const NUM_LEVELS: usize = 5;

/// Nível linguístico de uma variável fuzzy
///
/// Cinco rótulos ordenados que discretizam uma leitura contínua:
/// `very_low < low < medium < high < very_high`.
///
/// A ordem de declaração importa: o desempate do rótulo dominante
/// favorece sempre o nível declarado primeiro (ver `estufa-fuzzy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Level {
    /// Muito baixo
    VeryLow = 0,
    /// Baixo
    Low = 1,
    /// Médio
    Medium = 2,
    /// Alto
    High = 3,
    /// Muito alto
    VeryHigh = 4,
}

impl Level {
    /// Todos os níveis, em ordem de enumeração
    pub const ALL: [Level; NUM_LEVELS] = [
        Level::VeryLow,
        Level::Low,
        Level::Medium,
        Level::High,
        Level::VeryHigh,
    ];

    /// Posição do nível na enumeração (0 a 4)
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Nível a partir da posição na enumeração
    pub fn from_index(index: usize) -> CoreResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidLevelIndex(index))
    }

    /// Nome do nível no formato de serialização
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::VeryLow => "very_low",
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::VeryHigh => "very_high",
        }
    }

    /// Descrição legível do nível como intensidade de atuação
    pub const fn description(&self) -> &'static str {
        match self {
            Level::VeryLow => "System off / minimum level",
            Level::Low => "Low-level operation",
            Level::Medium => "Medium-level operation",
            Level::High => "High performance",
            Level::VeryHigh => "Full capacity / critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_total_order() {
        assert!(Level::VeryLow < Level::Low);
        assert!(Level::Low < Level::Medium);
        assert!(Level::Medium < Level::High);
        assert!(Level::High < Level::VeryHigh);
    }

    #[test]
    fn test_all_in_enumeration_order() {
        for (i, level) in Level::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_from_index_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::from_index(level.index()).unwrap(), level);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        let err = Level::from_index(5).unwrap_err();
        assert_eq!(err, CoreError::InvalidLevelIndex(5));
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Level::VeryLow.as_str(), "very_low");
        assert_eq!(Level::Medium.as_str(), "medium");
        assert_eq!(Level::VeryHigh.as_str(), "very_high");
    }

    #[test]
    fn test_display_matches_as_str() {
        for level in Level::ALL {
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn test_descriptions_are_distinct() {
        for a in Level::ALL {
            for b in Level::ALL {
                if a != b {
                    assert_ne!(a.description(), b.description());
                }
            }
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Level::VeryLow).unwrap();
        assert_eq!(json, "\"very_low\"");

        let level: Level = serde_json::from_str("\"very_high\"").unwrap();
        assert_eq!(level, Level::VeryHigh);
    }
}
