//! Atuadores e registro de decisão

use std::fmt;
use serde::{Deserialize, Serialize};
use estufa_core::Level;

/// Atuador da estufa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actuator {
    /// Aquecimento
    Heating,
    /// Resfriamento
    Cooling,
    /// Sombreamento
    Shading,
    /// Irrigação
    Irrigation,
    /// Iluminação artificial
    Lighting,
}

impl Actuator {
    /// Todos os atuadores, na ordem de apresentação
    pub const ALL: [Actuator; 5] = [
        Actuator::Heating,
        Actuator::Cooling,
        Actuator::Shading,
        Actuator::Irrigation,
        Actuator::Lighting,
    ];

    /// Nome do atuador no formato de serialização
    pub const fn as_str(&self) -> &'static str {
        match self {
            Actuator::Heating => "heating",
            Actuator::Cooling => "cooling",
            Actuator::Shading => "shading",
            Actuator::Irrigation => "irrigation",
            Actuator::Lighting => "lighting",
        }
    }
}

impl fmt::Display for Actuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decisão de um ciclo de inferência: um nível de atuação por atuador
///
/// Registro de campos fixos, indexável pela enumeração — sem chaves
/// dinâmicas nem verificação de existência em tempo de execução.
/// Produzido uma vez por ciclo e nunca mutado depois.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Nível de aquecimento
    pub heating: Level,
    /// Nível de resfriamento
    pub cooling: Level,
    /// Nível de sombreamento
    pub shading: Level,
    /// Nível de irrigação
    pub irrigation: Level,
    /// Nível de iluminação artificial
    pub lighting: Level,
}

impl Decision {
    /// Decisão com o mesmo nível em todos os atuadores
    pub const fn uniform(level: Level) -> Self {
        Self {
            heating: level,
            cooling: level,
            shading: level,
            irrigation: level,
            lighting: level,
        }
    }

    /// Nível de atuação do atuador dado
    pub const fn get(&self, actuator: Actuator) -> Level {
        match actuator {
            Actuator::Heating => self.heating,
            Actuator::Cooling => self.cooling,
            Actuator::Shading => self.shading,
            Actuator::Irrigation => self.irrigation,
            Actuator::Lighting => self.lighting,
        }
    }

    /// Pares (atuador, nível) em ordem de apresentação
    pub fn iter(&self) -> impl Iterator<Item = (Actuator, Level)> + '_ {
        Actuator::ALL
            .into_iter()
            .map(|actuator| (actuator, self.get(actuator)))
    }
}
