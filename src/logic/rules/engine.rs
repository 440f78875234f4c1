use super::{
    crop::CropAdjustment,
    moisture::MoistureRule,
    nutrient::{NutrientDeficiencyRule, NutrientSurplusRule},
    soil::SoilAdjustment,
    Adjustment, Rule, RuleTable,
};
use crate::models::{
    CropType, FieldProfile, Recommendation, RecommendationKey, SoilReading, SoilType,
};

/// Key used when no rule claims the reading.
pub const FALLBACK_KEY: RecommendationKey = RecommendationKey::NpkBalanced;

pub struct RecommendationEngine {
    rules: Vec<Box<dyn Rule>>,
    adjustments: Vec<Box<dyn Adjustment>>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        // Priority order: first rule to claim the reading wins
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(MoistureRule),
            Box::new(NutrientDeficiencyRule),
            Box::new(NutrientSurplusRule),
        ];

        // Soil runs last so its product choice overrides the crop's
        let adjustments: Vec<Box<dyn Adjustment>> =
            vec![Box::new(CropAdjustment), Box::new(SoilAdjustment)];

        Self { rules, adjustments }
    }

    pub fn select_key(&self, reading: &SoilReading) -> RecommendationKey {
        self.rules
            .iter()
            .find_map(|rule| {
                rule.select(reading).inspect(|key| {
                    tracing::debug!(rule = rule.id(), key = key.as_str(), "rule matched");
                })
            })
            .unwrap_or(FALLBACK_KEY)
    }

    pub fn evaluate(&self, reading: &SoilReading, profile: &FieldProfile) -> Recommendation {
        let key = self.select_key(reading);
        let mut rec = RuleTable::instantiate(key);

        for adjustment in &self.adjustments {
            if adjustment.apply(profile, &mut rec) {
                tracing::debug!(
                    adjustment = adjustment.id(),
                    soil = profile.soil_type.as_str(),
                    crop = profile.crop_type.as_str(),
                    "adjustment applied"
                );
            }
        }

        rec
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }

    pub fn list_adjustments(&self) -> Vec<(&'static str, &'static str)> {
        self.adjustments.iter().map(|a| (a.id(), a.name())).collect()
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend a fertilizer for the given nutrient levels, moisture and field.
///
/// Pure and total: no bounds checking happens here, callers validate first.
pub fn recommend(
    nitrogen: f64,
    phosphorous: f64,
    potassium: f64,
    moisture: f64,
    soil_type: SoilType,
    crop_type: CropType,
) -> (String, String) {
    RecommendationEngine::new()
        .evaluate(
            &SoilReading::new(nitrogen, phosphorous, potassium, moisture),
            &FieldProfile::new(soil_type, crop_type),
        )
        .into_pair()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_for(n: f64, p: f64, k: f64, m: f64) -> RecommendationKey {
        RecommendationEngine::new().select_key(&SoilReading::new(n, p, k, m))
    }

    fn evaluate(
        n: f64,
        p: f64,
        k: f64,
        m: f64,
        soil: SoilType,
        crop: CropType,
    ) -> Recommendation {
        RecommendationEngine::new().evaluate(
            &SoilReading::new(n, p, k, m),
            &FieldProfile::new(soil, crop),
        )
    }

    #[test]
    fn moisture_takes_precedence_over_nutrients() {
        assert_eq!(key_for(0.0, 0.0, 0.0, 10.0), RecommendationKey::MoistureLow);
        assert_eq!(key_for(70.0, 70.0, 70.0, 10.0), RecommendationKey::MoistureLow);
        assert_eq!(key_for(0.0, 0.0, 0.0, 90.0), RecommendationKey::MoistureHigh);
        assert_eq!(key_for(10.0, 50.0, 50.0, 90.0), RecommendationKey::MoistureHigh);
    }

    #[test]
    fn three_way_tie_goes_to_nitrogen() {
        assert_eq!(key_for(20.0, 20.0, 20.0, 50.0), RecommendationKey::NitrogenLow);
    }

    #[test]
    fn balanced_default() {
        assert_eq!(key_for(50.0, 50.0, 50.0, 50.0), RecommendationKey::NpkBalanced);
        // High in two nutrients only is still balanced
        assert_eq!(key_for(70.0, 70.0, 45.0, 50.0), RecommendationKey::NpkBalanced);
    }

    #[test]
    fn high_npk() {
        assert_eq!(key_for(70.0, 70.0, 70.0, 50.0), RecommendationKey::HighNpk);
    }

    #[test]
    fn deficiency_beats_surplus() {
        // K is low even though N and P are high
        assert_eq!(key_for(90.0, 90.0, 15.0, 50.0), RecommendationKey::PotassiumLow);
    }

    #[test]
    fn rice_gets_high_grade_urea() {
        let rec = evaluate(10.0, 50.0, 50.0, 50.0, SoilType::Loamy, CropType::Rice);
        assert_eq!(rec.key, RecommendationKey::NitrogenLow);
        assert_eq!(rec.fertilizer, "High-Grade Urea (46-0-0)");
        assert!(rec.reason.contains("Rice"));
    }

    #[test]
    fn sandy_soil_overrides_maize_substitution() {
        let rec = evaluate(10.0, 50.0, 50.0, 50.0, SoilType::Sandy, CropType::Maize);
        assert_eq!(rec.fertilizer, "Slow-Release N Fertilizer");
        // Both sentences are appended, crop first
        let crop_at = rec.reason.find("like Maize.").unwrap();
        let soil_at = rec.reason.find("Warning: Sandy soils").unwrap();
        assert!(crop_at < soil_at);
    }

    #[test]
    fn clayey_phosphorous_caveat() {
        let rec = evaluate(50.0, 10.0, 50.0, 50.0, SoilType::Clayey, CropType::Wheat);
        assert_eq!(rec.key, RecommendationKey::PhosphorousLow);
        assert_eq!(rec.fertilizer, "Diammonium Phosphate (DAP) or SSP");
        assert!(rec.reason.contains("less mobile in heavy clay soils"));
    }

    #[test]
    fn cotton_potassium_gets_sop() {
        let rec = evaluate(50.0, 50.0, 10.0, 50.0, SoilType::Silt, CropType::Cotton);
        assert_eq!(rec.fertilizer, "Sulphate of Potash (SOP) (0-0-50)");
        assert!(rec.reason.ends_with("fruits and fibers in Cotton."));
    }

    #[test]
    fn full_reason_text_for_sandy_rice() {
        let (fertilizer, reason) =
            recommend(5.0, 40.0, 40.0, 45.0, SoilType::Sandy, CropType::Rice);
        assert_eq!(fertilizer, "Slow-Release N Fertilizer");
        assert_eq!(
            reason,
            "Nitrogen (N) is severely low. Use a high-N fertilizer, especially for foliage-heavy crops. \
             Urea is highly effective for high-demand, grain-producing crops like Rice. \
             Warning: Sandy soils leach nitrogen quickly. Use slow-release N fertilizer or split applications."
        );
    }

    #[test]
    fn total_and_deterministic_over_grid() {
        let engine = RecommendationEngine::new();
        let levels = [0.0, 15.0, 30.0, 45.0, 60.0, 90.0, 200.0];
        let moistures = [0.0, 19.0, 20.0, 50.0, 80.0, 81.0, 100.0];

        for &n in &levels {
            for &p in &levels {
                for &k in &levels {
                    for &m in &moistures {
                        let reading = SoilReading::new(n, p, k, m);
                        for soil in SoilType::all() {
                            for crop in CropType::all() {
                                let profile = FieldProfile::new(*soil, *crop);
                                let first = engine.evaluate(&reading, &profile);
                                let second = engine.evaluate(&reading, &profile);
                                assert!(!first.fertilizer.is_empty());
                                assert!(!first.reason.is_empty());
                                assert_eq!(first, second);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn climate_does_not_affect_result() {
        let engine = RecommendationEngine::new();
        let profile = FieldProfile::new(SoilType::Peat, CropType::Millet);
        let base = SoilReading::new(25.0, 40.0, 40.0, 50.0);
        let expected = engine.evaluate(&base, &profile);

        for (t, h) in [(0.0, 0.0), (25.0, 65.0), (50.0, 100.0)] {
            let reading = base.with_climate(t, h);
            assert_eq!(engine.evaluate(&reading, &profile), expected);
        }
    }

    #[test]
    fn out_of_range_inputs_still_produce_a_result() {
        let (fertilizer, _) = recommend(-5.0, 50.0, 50.0, 50.0, SoilType::Loamy, CropType::Wheat);
        assert_eq!(fertilizer, "Urea & N-Heavy Blend (46-0-0)");
        let (fertilizer, _) = recommend(50.0, 50.0, 50.0, 150.0, SoilType::Loamy, CropType::Wheat);
        assert_eq!(fertilizer, "Avoid Soluble Fertilizers & Improve Drainage");
    }

    #[test]
    fn rule_listing_in_priority_order() {
        let engine = RecommendationEngine::new();
        let ids: Vec<&str> = engine.list_rules().iter().map(|(id, _)| *id).collect();
        assert_eq!(
            ids,
            vec!["moisture_override", "nutrient_deficiency", "nutrient_surplus"]
        );
        let adjustments: Vec<&str> = engine
            .list_adjustments()
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(adjustments, vec!["crop_substitution", "soil_caveat"]);
    }
}
