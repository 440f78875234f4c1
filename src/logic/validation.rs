use crate::error::{AdvisorError, Result};
use crate::models::{Measurement, SoilReading};
use serde::{Deserialize, Serialize};

/// Raw numeric inputs as collected by a form, prompt or request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingInput {
    pub nitrogen: Option<f64>,
    pub phosphorous: Option<f64>,
    pub potassium: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub moisture: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    Missing,
    NotFinite,
    Negative,
}

impl InputProblem {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputProblem::Missing => "missing",
            InputProblem::NotFinite => "not a number",
            InputProblem::Negative => "negative",
        }
    }
}

/// Parse one form value; blank or non-numeric text yields None.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn check(value: Option<f64>) -> Option<InputProblem> {
    match value {
        None => Some(InputProblem::Missing),
        Some(v) if !v.is_finite() => Some(InputProblem::NotFinite),
        Some(v) if v < 0.0 => Some(InputProblem::Negative),
        Some(_) => None,
    }
}

impl ReadingInput {
    pub fn from_reading(reading: &SoilReading) -> Self {
        Self {
            nitrogen: Some(reading.nitrogen),
            phosphorous: Some(reading.phosphorous),
            potassium: Some(reading.potassium),
            temperature: reading.temperature,
            humidity: reading.humidity,
            moisture: Some(reading.moisture),
        }
    }

    pub fn get(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Nitrogen => self.nitrogen,
            Measurement::Phosphorous => self.phosphorous,
            Measurement::Potassium => self.potassium,
            Measurement::Temperature => self.temperature,
            Measurement::Humidity => self.humidity,
            Measurement::Moisture => self.moisture,
        }
    }

    pub fn set(&mut self, measurement: Measurement, value: Option<f64>) {
        let slot = match measurement {
            Measurement::Nitrogen => &mut self.nitrogen,
            Measurement::Phosphorous => &mut self.phosphorous,
            Measurement::Potassium => &mut self.potassium,
            Measurement::Temperature => &mut self.temperature,
            Measurement::Humidity => &mut self.humidity,
            Measurement::Moisture => &mut self.moisture,
        };
        *slot = value;
    }

    /// Every measurement that fails the pre-check, in form order.
    pub fn problems(&self) -> Vec<(Measurement, InputProblem)> {
        Measurement::all()
            .iter()
            .filter_map(|m| check(self.get(*m)).map(|problem| (*m, problem)))
            .collect()
    }

    pub fn validate(&self) -> Result<SoilReading> {
        let problems = self.problems();
        if !problems.is_empty() {
            let detail = problems
                .iter()
                .map(|(m, problem)| format!("{} ({})", m, problem.as_str()))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(AdvisorError::InvalidInput(format!(
                "all numerical inputs must be valid and non-negative: {}",
                detail
            )));
        }

        // Every field was checked above
        let value = |m: Measurement| self.get(m).unwrap_or_default();
        Ok(SoilReading::new(
            value(Measurement::Nitrogen),
            value(Measurement::Phosphorous),
            value(Measurement::Potassium),
            value(Measurement::Moisture),
        )
        .with_climate(value(Measurement::Temperature), value(Measurement::Humidity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ReadingInput {
        ReadingInput {
            nitrogen: Some(40.0),
            phosphorous: Some(50.0),
            potassium: Some(60.0),
            temperature: Some(25.0),
            humidity: Some(65.0),
            moisture: Some(40.0),
        }
    }

    #[test]
    fn parse_measurement_values() {
        assert_eq!(parse_measurement("40"), Some(40.0));
        assert_eq!(parse_measurement(" 12.5 "), Some(12.5));
        assert_eq!(parse_measurement("-3"), Some(-3.0));
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("   "), None);
        assert_eq!(parse_measurement("abc"), None);
    }

    #[test]
    fn valid_input_becomes_reading() {
        let reading = complete().validate().unwrap();
        assert_eq!(reading.nitrogen, 40.0);
        assert_eq!(reading.moisture, 40.0);
        assert_eq!(reading.temperature, Some(25.0));
        assert_eq!(reading.humidity, Some(65.0));
    }

    #[test]
    fn zero_is_accepted() {
        let mut input = complete();
        input.nitrogen = Some(0.0);
        input.temperature = Some(0.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn missing_value_rejected() {
        let mut input = complete();
        input.humidity = None;
        let err = input.validate().unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInput(_)));
        assert!(err.to_string().contains("humidity (missing)"));
    }

    #[test]
    fn negative_value_rejected() {
        let mut input = complete();
        input.set(Measurement::Potassium, Some(-1.0));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("potassium (negative)"));
    }

    #[test]
    fn nan_rejected() {
        let mut input = complete();
        input.moisture = Some(f64::NAN);
        assert_eq!(
            input.problems(),
            vec![(Measurement::Moisture, InputProblem::NotFinite)]
        );
    }

    #[test]
    fn all_problems_reported_in_form_order() {
        let input = ReadingInput {
            nitrogen: Some(-2.0),
            temperature: Some(f64::INFINITY),
            ..Default::default()
        };
        let fields: Vec<Measurement> = input.problems().iter().map(|(m, _)| *m).collect();
        assert_eq!(fields, Measurement::all().to_vec());
    }

    #[test]
    fn round_trip_from_reading() {
        let reading = complete().validate().unwrap();
        assert_eq!(ReadingInput::from_reading(&reading), complete());
    }
}
