use super::Adjustment;
use crate::models::{FieldProfile, Recommendation, RecommendationKey};

pub const HIGH_GRADE_UREA: &str = "High-Grade Urea (46-0-0)";
pub const SULPHATE_OF_POTASH: &str = "Sulphate of Potash (SOP) (0-0-50)";

/// Crop-specific product substitution
///
/// Grain crops short on nitrogen get straight urea. Fruit and fibre crops
/// short on potassium get SOP, whose sulfur improves quality. At most one
/// substitution applies.
pub struct CropAdjustment;

impl Adjustment for CropAdjustment {
    fn id(&self) -> &'static str {
        "crop_substitution"
    }

    fn name(&self) -> &'static str {
        "Crop-Specific Product"
    }

    fn apply(&self, profile: &FieldProfile, rec: &mut Recommendation) -> bool {
        let crop = profile.crop_type;

        if rec.key == RecommendationKey::NitrogenLow && crop.is_grain() {
            rec.replace_fertilizer(HIGH_GRADE_UREA);
            rec.append_reason(&format!(
                "Urea is highly effective for high-demand, grain-producing crops like {}.",
                crop
            ));
            true
        } else if rec.key == RecommendationKey::PotassiumLow && crop.is_quality_sensitive() {
            rec.replace_fertilizer(SULPHATE_OF_POTASH);
            rec.append_reason(&format!(
                "SOP provides sulfur, which is beneficial for the quality of fruits and fibers in {}.",
                crop
            ));
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::RuleTable;
    use crate::models::{CropType, SoilType};

    fn adjust(key: RecommendationKey, crop: CropType) -> (bool, Recommendation) {
        let mut rec = RuleTable::instantiate(key);
        let applied = CropAdjustment.apply(&FieldProfile::new(SoilType::Loamy, crop), &mut rec);
        (applied, rec)
    }

    #[test]
    fn urea_for_grain_crops() {
        for crop in [CropType::Rice, CropType::Maize] {
            let (applied, rec) = adjust(RecommendationKey::NitrogenLow, crop);
            assert!(applied);
            assert_eq!(rec.fertilizer, HIGH_GRADE_UREA);
            assert!(rec.reason.ends_with(&format!("crops like {}.", crop)));
            assert!(rec.reason.starts_with("Nitrogen (N) is severely low."));
        }
    }

    #[test]
    fn sop_for_quality_crops() {
        for crop in [CropType::Vegetables, CropType::Cotton] {
            let (applied, rec) = adjust(RecommendationKey::PotassiumLow, crop);
            assert!(applied);
            assert_eq!(rec.fertilizer, SULPHATE_OF_POTASH);
            assert!(rec.reason.contains(crop.as_str()));
        }
    }

    #[test]
    fn other_crops_unchanged() {
        let base = RuleTable::instantiate(RecommendationKey::NitrogenLow);
        let (applied, rec) = adjust(RecommendationKey::NitrogenLow, CropType::Wheat);
        assert!(!applied);
        assert_eq!(rec, base);
    }

    #[test]
    fn other_keys_unchanged() {
        for key in RecommendationKey::all() {
            if matches!(key, RecommendationKey::NitrogenLow | RecommendationKey::PotassiumLow) {
                continue;
            }
            for crop in CropType::all() {
                let (applied, rec) = adjust(*key, *crop);
                assert!(!applied, "{} / {}", key, crop);
                assert_eq!(rec, RuleTable::instantiate(*key));
            }
        }
    }
}
