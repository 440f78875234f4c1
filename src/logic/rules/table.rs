use crate::models::{Recommendation, RecommendationKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub fertilizer: &'static str,
    pub reason: &'static str,
}

impl Template {
    pub fn instantiate(&self, key: RecommendationKey) -> Recommendation {
        Recommendation::new(key, self.fertilizer, self.reason)
    }
}

/// Base fertilizer and reason for every recommendation key.
pub struct RuleTable;

impl RuleTable {
    pub fn lookup(key: RecommendationKey) -> Template {
        match key {
            RecommendationKey::NitrogenLow => Template {
                fertilizer: "Urea & N-Heavy Blend (46-0-0)",
                reason: "Nitrogen (N) is severely low. Use a high-N fertilizer, especially for \
                         foliage-heavy crops.",
            },
            RecommendationKey::PhosphorousLow => Template {
                fertilizer: "Diammonium Phosphate (DAP) or SSP",
                reason: "Phosphorous (P) is the limiting nutrient. Apply DAP (18-46-0) or \
                         Single Super Phosphate for root development.",
            },
            RecommendationKey::PotassiumLow => Template {
                fertilizer: "Muriate of Potash (MOP) or Potash Sulfate",
                reason: "Potassium (K) is low. Potash is essential for plant health, water, \
                         and disease resistance.",
            },
            RecommendationKey::NpkBalanced => Template {
                fertilizer: "10-10-10 Universal Mix or Complex Fertilizer",
                reason: "NPK levels are generally balanced. A complex fertilizer provides \
                         maintenance nutrients for overall growth.",
            },
            RecommendationKey::HighNpk => Template {
                fertilizer: "Balanced Micronutrient Formula & Manure",
                reason: "Primary nutrients (NPK) are high. Focus on organic manure or \
                         micronutrient supplements (e.g., Boron, Zinc).",
            },
            RecommendationKey::MoistureLow => Template {
                fertilizer: "Organic Compost & Increased Irrigation",
                reason: "Moisture is critically low. Focus on organic matter to improve soil \
                         water retention before applying chemical fertilizer.",
            },
            RecommendationKey::MoistureHigh => Template {
                fertilizer: "Avoid Soluble Fertilizers & Improve Drainage",
                reason: "Moisture is high, risking nutrient runoff. Apply granular, \
                         slow-release fertilizers sparingly and improve drainage.",
            },
        }
    }

    pub fn instantiate(key: RecommendationKey) -> Recommendation {
        Self::lookup(key).instantiate(key)
    }

    pub fn entries() -> impl Iterator<Item = (RecommendationKey, Template)> {
        RecommendationKey::all()
            .iter()
            .map(|key| (*key, Self::lookup(*key)))
    }
}
