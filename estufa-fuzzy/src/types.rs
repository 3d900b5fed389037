//! Variáveis sensoriais e vetor de pertinência

use std::fmt;
use serde::{Deserialize, Serialize};
use estufa_core::{Level, NUM_LEVELS};

/// Variável sensorial da estufa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorVariable {
    /// Temperatura do ar
    Temperature,
    /// Umidade relativa do ar
    Humidity,
    /// Luminosidade
    Light,
    /// Umidade do solo
    SoilMoisture,
}

impl SensorVariable {
    /// Todas as variáveis, na ordem do ciclo de inferência
    pub const ALL: [SensorVariable; 4] = [
        SensorVariable::Temperature,
        SensorVariable::Humidity,
        SensorVariable::Light,
        SensorVariable::SoilMoisture,
    ];

    /// Nome da variável no formato de serialização
    pub const fn as_str(&self) -> &'static str {
        match self {
            SensorVariable::Temperature => "temperature",
            SensorVariable::Humidity => "humidity",
            SensorVariable::Light => "light",
            SensorVariable::SoilMoisture => "soil_moisture",
        }
    }

    /// Unidade de medida da leitura crua
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorVariable::Temperature => "°C",
            SensorVariable::Humidity => "%",
            SensorVariable::Light => "lux",
            SensorVariable::SoilMoisture => "%",
        }
    }
}

impl fmt::Display for SensorVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vetor de pertinência de uma variável em um instante
///
/// Guarda o grau de pertinência em cada um dos cinco níveis, em ordem de
/// enumeração, mais o rótulo dominante derivado na construção. Imutável
/// após construído; os graus se sobrepõem e não precisam somar 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipVector {
    degrees: [f64; NUM_LEVELS],
    dominant: Level,
}

impl MembershipVector {
    /// Constrói o vetor a partir dos graus em ordem de enumeração
    ///
    /// O dominante é derivado por varredura esquerda→direita com comparação
    /// estritamente maior: um grau igual mais à direita NÃO substitui o
    /// máximo corrente, então empates favorecem o nível declarado primeiro.
    pub fn from_degrees(degrees: [f64; NUM_LEVELS]) -> Self {
        let mut dominant = Level::VeryLow;
        let mut best = degrees[0];

        for level in Level::ALL.into_iter().skip(1) {
            let degree = degrees[level.index()];
            if degree > best {
                best = degree;
                dominant = level;
            }
        }

        Self { degrees, dominant }
    }

    /// Grau de pertinência no nível dado
    pub fn degree(&self, level: Level) -> f64 {
        self.degrees[level.index()]
    }

    /// Os cinco graus em ordem de enumeração
    pub fn degrees(&self) -> &[f64; NUM_LEVELS] {
        &self.degrees
    }

    /// Rótulo dominante (argmax com desempate pelo nível mais baixo)
    pub fn dominant(&self) -> Level {
        self.dominant
    }

    /// Grau do rótulo dominante
    pub fn max_degree(&self) -> f64 {
        self.degrees[self.dominant.index()]
    }

    /// Pares (nível, grau) em ordem de enumeração
    pub fn iter(&self) -> impl Iterator<Item = (Level, f64)> + '_ {
        Level::ALL.into_iter().map(|level| (level, self.degree(level)))
    }
}
