use super::Adjustment;
use crate::models::{FieldProfile, Recommendation, RecommendationKey, SoilType};

pub const SLOW_RELEASE_N: &str = "Slow-Release N Fertilizer";

const CLAY_PHOSPHATE_CAUTION: &str =
    "Caution: Phosphates may be less mobile in heavy clay soils; consider band application.";
const SANDY_LEACHING_WARNING: &str =
    "Warning: Sandy soils leach nitrogen quickly. Use slow-release N fertilizer or split applications.";

/// Soil-specific caveats
///
/// Runs after the crop substitution. On sandy soil the slow-release product
/// replaces whatever nitrogen source was chosen before, including urea picked
/// for a grain crop.
pub struct SoilAdjustment;

impl Adjustment for SoilAdjustment {
    fn id(&self) -> &'static str {
        "soil_caveat"
    }

    fn name(&self) -> &'static str {
        "Soil-Specific Caveat"
    }

    fn apply(&self, profile: &FieldProfile, rec: &mut Recommendation) -> bool {
        match (rec.key, profile.soil_type) {
            (RecommendationKey::PhosphorousLow, SoilType::Clayey) => {
                rec.append_reason(CLAY_PHOSPHATE_CAUTION);
                true
            }
            (RecommendationKey::NitrogenLow, SoilType::Sandy) => {
                rec.append_reason(SANDY_LEACHING_WARNING);
                rec.replace_fertilizer(SLOW_RELEASE_N);
                true
            }
            _ => false,
        }
    }
}
