use crate::error::Result;
use crate::logic::{ReadingInput, RecommendationEngine};
use crate::models::{CropType, FieldProfile, Recommendation, SoilType};
use serde::{Deserialize, Serialize};

/// Request body shared by the HTTP API and batch files.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendRequest {
    #[serde(rename = "N")]
    pub nitrogen: Option<f64>,
    #[serde(rename = "P")]
    pub phosphorous: Option<f64>,
    #[serde(rename = "K")]
    pub potassium: Option<f64>,
    #[serde(rename = "T")]
    pub temperature: Option<f64>,
    #[serde(rename = "H")]
    pub humidity: Option<f64>,
    #[serde(rename = "M")]
    pub moisture: Option<f64>,
    #[serde(rename = "soilType")]
    pub soil_type: SoilType,
    #[serde(rename = "cropType")]
    pub crop_type: CropType,
}

impl RecommendRequest {
    pub fn reading_input(&self) -> ReadingInput {
        ReadingInput {
            nitrogen: self.nitrogen,
            phosphorous: self.phosphorous,
            potassium: self.potassium,
            temperature: self.temperature,
            humidity: self.humidity,
            moisture: self.moisture,
        }
    }

    pub fn profile(&self) -> FieldProfile {
        FieldProfile::new(self.soil_type, self.crop_type)
    }

    /// Validate the numeric fields, then run the engine.
    pub fn evaluate(&self, engine: &RecommendationEngine) -> Result<Recommendation> {
        let reading = self.reading_input().validate()?;
        Ok(engine.evaluate(&reading, &self.profile()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RecommendResponse {
    pub fertilizer: String,
    pub reason: String,
}

impl From<Recommendation> for RecommendResponse {
    fn from(rec: Recommendation) -> Self {
        let (fertilizer, reason) = rec.into_pair();
        Self { fertilizer, reason }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionLabel {
    pub id: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub language: String,
    pub soil_types: Vec<OptionLabel>,
    pub crop_types: Vec<OptionLabel>,
}
