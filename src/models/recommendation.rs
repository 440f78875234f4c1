use serde::{Deserialize, Serialize};

/// Outcome class chosen by rule selection; indexes the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKey {
    #[serde(rename = "N_Low")]
    NitrogenLow,
    #[serde(rename = "P_Low")]
    PhosphorousLow,
    #[serde(rename = "K_Low")]
    PotassiumLow,
    #[serde(rename = "NPK_Balanced")]
    NpkBalanced,
    #[serde(rename = "High_NPK")]
    HighNpk,
    #[serde(rename = "Moisture_Low")]
    MoistureLow,
    #[serde(rename = "Moisture_High")]
    MoistureHigh,
}

impl RecommendationKey {
    pub fn all() -> &'static [RecommendationKey] {
        &[
            RecommendationKey::NitrogenLow,
            RecommendationKey::PhosphorousLow,
            RecommendationKey::PotassiumLow,
            RecommendationKey::NpkBalanced,
            RecommendationKey::HighNpk,
            RecommendationKey::MoistureLow,
            RecommendationKey::MoistureHigh,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationKey::NitrogenLow => "N_Low",
            RecommendationKey::PhosphorousLow => "P_Low",
            RecommendationKey::PotassiumLow => "K_Low",
            RecommendationKey::NpkBalanced => "NPK_Balanced",
            RecommendationKey::HighNpk => "High_NPK",
            RecommendationKey::MoistureLow => "Moisture_Low",
            RecommendationKey::MoistureHigh => "Moisture_High",
        }
    }
}

impl std::fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub key: RecommendationKey,
    pub fertilizer: String,
    pub reason: String,
}

impl Recommendation {
    pub fn new(
        key: RecommendationKey,
        fertilizer: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            fertilizer: fertilizer.into(),
            reason: reason.into(),
        }
    }

    pub fn replace_fertilizer(&mut self, fertilizer: impl Into<String>) {
        self.fertilizer = fertilizer.into();
    }

    /// Append a sentence to the reason, separated by a single space.
    pub fn append_reason(&mut self, sentence: &str) {
        self.reason.push(' ');
        self.reason.push_str(sentence);
    }

    pub fn into_pair(self) -> (String, String) {
        (self.fertilizer, self.reason)
    }
}
