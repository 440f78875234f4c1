use serde::{Deserialize, Serialize};

/// One of the six numeric inputs collected for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    Nitrogen,
    Phosphorous,
    Potassium,
    Temperature,
    Humidity,
    Moisture,
}

impl Measurement {
    pub fn all() -> &'static [Measurement] {
        &[
            Measurement::Nitrogen,
            Measurement::Phosphorous,
            Measurement::Potassium,
            Measurement::Temperature,
            Measurement::Humidity,
            Measurement::Moisture,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Measurement::Nitrogen => "nitrogen",
            Measurement::Phosphorous => "phosphorous",
            Measurement::Potassium => "potassium",
            Measurement::Temperature => "temperature",
            Measurement::Humidity => "humidity",
            Measurement::Moisture => "moisture",
        }
    }

    /// Short symbol used by the request schema.
    pub fn symbol(&self) -> &'static str {
        match self {
            Measurement::Nitrogen => "N",
            Measurement::Phosphorous => "P",
            Measurement::Potassium => "K",
            Measurement::Temperature => "T",
            Measurement::Humidity => "H",
            Measurement::Moisture => "M",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Measurement::Nitrogen | Measurement::Phosphorous | Measurement::Potassium => "ppm",
            Measurement::Temperature => "°C",
            Measurement::Humidity | Measurement::Moisture => "%",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Measurement::Nitrogen => 0,
            Measurement::Phosphorous => 1,
            Measurement::Potassium => 2,
            Measurement::Temperature => 3,
            Measurement::Humidity => 4,
            Measurement::Moisture => 5,
        }
    }
}

impl std::fmt::Display for Measurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Soil nutrient and environmental reading.
///
/// Temperature and humidity are carried for callers that collect them but
/// do not influence rule selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    pub nitrogen: f64,
    pub phosphorous: f64,
    pub potassium: f64,
    pub moisture: f64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl SoilReading {
    pub fn new(nitrogen: f64, phosphorous: f64, potassium: f64, moisture: f64) -> Self {
        Self {
            nitrogen,
            phosphorous,
            potassium,
            moisture,
            temperature: None,
            humidity: None,
        }
    }

    pub fn with_climate(mut self, temperature: f64, humidity: f64) -> Self {
        self.temperature = Some(temperature);
        self.humidity = Some(humidity);
        self
    }

    pub fn value(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Nitrogen => Some(self.nitrogen),
            Measurement::Phosphorous => Some(self.phosphorous),
            Measurement::Potassium => Some(self.potassium),
            Measurement::Temperature => self.temperature,
            Measurement::Humidity => self.humidity,
            Measurement::Moisture => Some(self.moisture),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_indices_follow_order() {
        for (i, m) in Measurement::all().iter().enumerate() {
            assert_eq!(m.index(), i);
        }
    }

    #[test]
    fn measurement_units() {
        assert_eq!(Measurement::Potassium.unit(), "ppm");
        assert_eq!(Measurement::Temperature.unit(), "°C");
        assert_eq!(Measurement::Moisture.unit(), "%");
    }

    #[test]
    fn measurement_symbols() {
        let symbols: Vec<&str> = Measurement::all().iter().map(|m| m.symbol()).collect();
        assert_eq!(symbols, vec!["N", "P", "K", "T", "H", "M"]);
    }

    #[test]
    fn reading_without_climate() {
        let reading = SoilReading::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(reading.value(Measurement::Nitrogen), Some(10.0));
        assert_eq!(reading.value(Measurement::Moisture), Some(40.0));
        assert!(reading.value(Measurement::Temperature).is_none());
        assert!(reading.value(Measurement::Humidity).is_none());
    }

    #[test]
    fn reading_with_climate() {
        let reading = SoilReading::new(10.0, 20.0, 30.0, 40.0).with_climate(25.0, 65.0);
        assert_eq!(reading.value(Measurement::Temperature), Some(25.0));
        assert_eq!(reading.value(Measurement::Humidity), Some(65.0));
    }
}
