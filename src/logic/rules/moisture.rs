use super::Rule;
use crate::models::{RecommendationKey, SoilReading};

/// Moisture below this percentage overrides nutrient logic.
pub const DRY_MOISTURE_PCT: f64 = 20.0;
/// Moisture above this percentage overrides nutrient logic.
pub const WET_MOISTURE_PCT: f64 = 80.0;

/// Moisture override rule
///
/// Fertilizer choice is secondary when the soil cannot hold or is shedding
/// water. Dry soil needs organic matter and irrigation first; saturated soil
/// washes soluble nutrients away.
///
/// - Moisture < 20% → Moisture_Low
/// - Moisture > 80% → Moisture_High
pub struct MoistureRule;

impl Rule for MoistureRule {
    fn id(&self) -> &'static str {
        "moisture_override"
    }

    fn name(&self) -> &'static str {
        "Moisture Override"
    }

    fn select(&self, reading: &SoilReading) -> Option<RecommendationKey> {
        if reading.moisture < DRY_MOISTURE_PCT {
            Some(RecommendationKey::MoistureLow)
        } else if reading.moisture > WET_MOISTURE_PCT {
            Some(RecommendationKey::MoistureHigh)
        } else {
            None
        }
    }
}
