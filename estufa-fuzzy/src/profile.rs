//! Perfis estáticos das quatro variáveis sensoriais
//!
//! Cada perfil associa uma forma de pertinência a cada nível linguístico.
//! Os pontos de quebra são constantes de domínio calibradas para uma estufa
//! de cultivo e nunca mudam em tempo de execução.

use serde::{Deserialize, Serialize};
use estufa_core::{Level, NUM_LEVELS, Shape};
use crate::error::{FuzzyError, FuzzyResult};
use crate::types::{MembershipVector, SensorVariable};

/// Perfil de uma variável: uma forma de pertinência por nível
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariableProfile {
    /// Variável descrita pelo perfil
    pub variable: SensorVariable,
    /// Formas em ordem de enumeração dos níveis
    pub shapes: [Shape; NUM_LEVELS],
}

/// Perfil de temperatura do ar (°C)
pub const TEMPERATURE: VariableProfile = VariableProfile {
    variable: SensorVariable::Temperature,
    shapes: [
        Shape::FallingTrapezoid { a: -10.0, b: -10.0, c: 0.0, d: 10.0 },
        Shape::Triangle { a: 0.0, b: 7.5, c: 15.0 },
        Shape::Triangle { a: 14.0, b: 20.0, c: 26.0 },
        Shape::Triangle { a: 20.0, b: 30.0, c: 40.0 },
        Shape::RisingTrapezoid { a: 30.0, b: 40.0, c: 50.0, d: 50.0 },
    ],
};

/// Perfil de umidade relativa do ar (%)
pub const HUMIDITY: VariableProfile = VariableProfile {
    variable: SensorVariable::Humidity,
    shapes: [
        Shape::FallingTrapezoid { a: 0.0, b: 0.0, c: 20.0, d: 40.0 },
        Shape::Triangle { a: 20.0, b: 39.5, c: 59.0 },
        Shape::Triangle { a: 50.0, b: 60.0, c: 70.0 },
        Shape::Triangle { a: 60.0, b: 75.0, c: 90.0 },
        Shape::RisingTrapezoid { a: 80.0, b: 90.0, c: 100.0, d: 100.0 },
    ],
};

/// Perfil de luminosidade (lux)
pub const LIGHT: VariableProfile = VariableProfile {
    variable: SensorVariable::Light,
    shapes: [
        Shape::FallingTrapezoid { a: 0.0, b: 0.0, c: 2500.0, d: 5000.0 },
        Shape::Triangle { a: 4000.0, b: 6500.0, c: 9000.0 },
        Shape::Triangle { a: 8000.0, b: 10000.0, c: 12000.0 },
        Shape::Triangle { a: 11000.0, b: 13500.0, c: 16000.0 },
        Shape::RisingTrapezoid { a: 15000.0, b: 17500.0, c: 20000.0, d: 20000.0 },
    ],
};

/// Perfil de umidade do solo (%)
pub const SOIL_MOISTURE: VariableProfile = VariableProfile {
    variable: SensorVariable::SoilMoisture,
    shapes: [
        Shape::FallingTrapezoid { a: 0.0, b: 0.0, c: 20.0, d: 40.0 },
        Shape::Triangle { a: 30.0, b: 49.5, c: 69.0 },
        Shape::Triangle { a: 60.0, b: 69.5, c: 79.0 },
        Shape::Triangle { a: 70.0, b: 80.0, c: 90.0 },
        Shape::RisingTrapezoid { a: 80.0, b: 90.0, c: 100.0, d: 100.0 },
    ],
};

impl VariableProfile {
    /// Fuzzifica uma leitura crua
    ///
    /// Avalia as cinco formas em ordem de enumeração e deriva o rótulo
    /// dominante. Total sobre os reais: leituras fora da faixa física
    /// saturam nos níveis extremos, sem caminho de erro.
    pub fn fuzzify(&self, raw: f64) -> MembershipVector {
        let mut degrees = [0.0; NUM_LEVELS];
        for level in Level::ALL {
            degrees[level.index()] = self.shapes[level.index()].membership(raw);
        }
        MembershipVector::from_degrees(degrees)
    }

    /// Forma de pertinência do nível dado
    pub fn shape(&self, level: Level) -> &Shape {
        &self.shapes[level.index()]
    }

    /// Valida os pontos de quebra das cinco formas
    pub fn validate(&self) -> FuzzyResult<()> {
        for shape in &self.shapes {
            shape
                .validate()
                .map_err(|err| FuzzyError::profile(self.variable.as_str(), err))?;
        }
        Ok(())
    }
}

impl SensorVariable {
    /// Perfil estático da variável
    pub const fn profile(&self) -> &'static VariableProfile {
        match self {
            SensorVariable::Temperature => &TEMPERATURE,
            SensorVariable::Humidity => &HUMIDITY,
            SensorVariable::Light => &LIGHT,
            SensorVariable::SoilMoisture => &SOIL_MOISTURE,
        }
    }

    /// Fuzzifica uma leitura crua desta variável
    pub fn fuzzify(&self, raw: f64) -> MembershipVector {
        self.profile().fuzzify(raw)
    }
}
