//! Motor de regras e ciclo completo de inferência

use serde::{Deserialize, Serialize};
use estufa_core::Level;
use estufa_fuzzy::{MembershipVector, SensorVariable};
use crate::tables;
use crate::types::Decision;

/// Leituras cruas dos quatro sensores em um instante
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReadings {
    /// Temperatura do ar em graus Celsius
    pub temperature: f64,
    /// Umidade relativa do ar (0-100)
    pub humidity: f64,
    /// Luminosidade em lux
    pub light: f64,
    /// Umidade do solo (0-100)
    pub soil_moisture: f64,
}

impl SensorReadings {
    /// Cria leituras a partir dos quatro valores crus
    ///
    /// Valores fora da faixa física são aceitos: a fuzzificação satura nos
    /// níveis extremos. Validar entradas malformadas é tarefa do chamador.
    pub const fn new(temperature: f64, humidity: f64, light: f64, soil_moisture: f64) -> Self {
        Self {
            temperature,
            humidity,
            light,
            soil_moisture,
        }
    }

    /// Condições ideais de operação da estufa
    pub const fn default_ideal() -> Self {
        Self {
            temperature: 22.0,     // 22 °C
            humidity: 60.0,        // 60%
            light: 10000.0,        // meio-dia nublado
            soil_moisture: 70.0,   // solo irrigado
        }
    }

    /// Leitura crua da variável dada
    pub const fn get(&self, variable: SensorVariable) -> f64 {
        match variable {
            SensorVariable::Temperature => self.temperature,
            SensorVariable::Humidity => self.humidity,
            SensorVariable::Light => self.light,
            SensorVariable::SoilMoisture => self.soil_moisture,
        }
    }
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self::default_ideal()
    }
}

/// Resultado completo de um ciclo de inferência
///
/// Os quatro vetores de pertinência acompanham a decisão para fins de
/// exibição e diagnóstico; a decisão depende apenas dos rótulos dominantes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inference {
    /// Leituras que originaram o ciclo
    pub readings: SensorReadings,
    /// Pertinências da temperatura
    pub temperature: MembershipVector,
    /// Pertinências da umidade do ar
    pub humidity: MembershipVector,
    /// Pertinências da luminosidade
    pub light: MembershipVector,
    /// Pertinências da umidade do solo
    pub soil_moisture: MembershipVector,
    /// Níveis de atuação resultantes
    pub decision: Decision,
}

impl Inference {
    /// Vetor de pertinência da variável dada
    pub const fn membership(&self, variable: SensorVariable) -> &MembershipVector {
        match variable {
            SensorVariable::Temperature => &self.temperature,
            SensorVariable::Humidity => &self.humidity,
            SensorVariable::Light => &self.light,
            SensorVariable::SoilMoisture => &self.soil_moisture,
        }
    }
}

/// Avalia as cinco tabelas de decisão a partir dos rótulos dominantes
///
/// Puro e total: as tabelas são independentes entre si e cobrem todas as
/// combinações de rótulos.
pub fn evaluate(temp: Level, hum: Level, light: Level, soil: Level) -> Decision {
    Decision {
        heating: tables::heating(temp, hum),
        cooling: tables::cooling(temp, hum),
        shading: tables::shading(temp, light),
        irrigation: tables::irrigation(hum, soil),
        lighting: tables::lighting(light),
    }
}

/// Executa um ciclo completo de inferência
///
/// Fuzzifica as quatro leituras e avalia as regras sobre os rótulos
/// dominantes. Sem estado entre chamadas: recomputa tudo do zero, e pode
/// ser invocado concorrentemente por múltiplos chamadores.
pub fn infer(readings: &SensorReadings) -> Inference {
    let temperature = SensorVariable::Temperature.fuzzify(readings.temperature);
    let humidity = SensorVariable::Humidity.fuzzify(readings.humidity);
    let light = SensorVariable::Light.fuzzify(readings.light);
    let soil_moisture = SensorVariable::SoilMoisture.fuzzify(readings.soil_moisture);

    let decision = evaluate(
        temperature.dominant(),
        humidity.dominant(),
        light.dominant(),
        soil_moisture.dominant(),
    );

    Inference {
        readings: *readings,
        temperature,
        humidity,
        light,
        soil_moisture,
        decision,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_all_medium() {
        let decision = evaluate(Level::Medium, Level::Medium, Level::Medium, Level::Medium);
        assert_eq!(decision, Decision::uniform(Level::Medium));
    }

    #[test]
    fn test_default_ideal_readings_are_all_medium() {
        let result = infer(&SensorReadings::default());
        assert_eq!(result.temperature.dominant(), Level::Medium);
        assert_eq!(result.humidity.dominant(), Level::Medium);
        assert_eq!(result.light.dominant(), Level::Medium);
        assert_eq!(result.soil_moisture.dominant(), Level::Medium);
        assert_eq!(result.decision, Decision::uniform(Level::Medium));
    }

    #[test]
    fn test_infer_freezing_morning() {
        // Temperatura no platô inferior: aquecimento máximo com ar seco
        let readings = SensorReadings::new(-10.0, 10.0, 3000.0, 50.0);
        let result = infer(&readings);

        assert_eq!(result.temperature.dominant(), Level::VeryLow);
        assert_eq!(result.humidity.dominant(), Level::VeryLow);
        assert_eq!(result.decision.heating, Level::VeryHigh);
        assert_eq!(result.decision.cooling, Level::VeryLow);
    }

    #[test]
    fn test_infer_dark_greenhouse() {
        let readings = SensorReadings::new(20.0, 60.0, 0.0, 70.0);
        let result = infer(&readings);

        assert_eq!(result.light.dominant(), Level::VeryLow);
        assert_eq!(result.decision.lighting, Level::VeryHigh);
        assert_eq!(result.decision.shading, Level::VeryLow);
    }

    #[test]
    fn test_infer_scorching_afternoon() {
        let readings = SensorReadings::new(50.0, 60.0, 10000.0, 70.0);
        let result = infer(&readings);

        assert_eq!(result.temperature.dominant(), Level::VeryHigh);
        assert_eq!(result.decision.heating, Level::VeryLow);
        assert_eq!(result.decision.cooling, Level::High);
    }

    #[test]
    fn test_infer_is_idempotent() {
        let readings = SensorReadings::new(17.3, 48.2, 7200.0, 81.5);
        let first = infer(&readings);
        let second = infer(&readings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_membership_accessor() {
        let result = infer(&SensorReadings::default());
        for variable in SensorVariable::ALL {
            let vector = result.membership(variable);
            assert_eq!(vector.dominant(), Level::Medium);
        }
    }

    #[test]
    fn test_readings_get_matches_fields() {
        let readings = SensorReadings::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(readings.get(SensorVariable::Temperature), 1.0);
        assert_eq!(readings.get(SensorVariable::Humidity), 2.0);
        assert_eq!(readings.get(SensorVariable::Light), 3.0);
        assert_eq!(readings.get(SensorVariable::SoilMoisture), 4.0);
    }

    #[test]
    fn test_readings_serde_roundtrip() {
        let readings = SensorReadings::new(20.0, 60.0, 10000.0, 70.0);
        let json = serde_json::to_string(&readings).unwrap();
        let back: SensorReadings = serde_json::from_str(&json).unwrap();
        assert_eq!(readings, back);
    }

    #[test]
    fn test_inference_serde_roundtrip() {
        let result = infer(&SensorReadings::default());
        let json = serde_json::to_string(&result).unwrap();
        let back: Inference = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
