use super::Rule;
use crate::models::{RecommendationKey, SoilReading};

/// A nutrient at or below this concentration counts as low.
pub const LOW_NUTRIENT_PPM: f64 = 30.0;
/// All three nutrients at or above this concentration count as high.
pub const HIGH_NUTRIENT_PPM: f64 = 60.0;

fn is_low(ppm: f64) -> bool {
    ppm <= LOW_NUTRIENT_PPM
}

/// Nutrient deficiency rule
///
/// Picks the limiting nutrient: the one that is both low and the minimum of
/// N, P and K. Ties go N, then P, then K.
pub struct NutrientDeficiencyRule;

impl Rule for NutrientDeficiencyRule {
    fn id(&self) -> &'static str {
        "nutrient_deficiency"
    }

    fn name(&self) -> &'static str {
        "Limiting Nutrient"
    }

    fn select(&self, reading: &SoilReading) -> Option<RecommendationKey> {
        let (n, p, k) = (reading.nitrogen, reading.phosphorous, reading.potassium);

        if is_low(n) && n <= p && n <= k {
            Some(RecommendationKey::NitrogenLow)
        } else if is_low(p) && p <= n && p <= k {
            Some(RecommendationKey::PhosphorousLow)
        } else if is_low(k) && k <= n && k <= p {
            Some(RecommendationKey::PotassiumLow)
        } else {
            None
        }
    }
}

/// Nutrient surplus rule
///
/// When N, P and K are all high, additional NPK is wasted; steer toward
/// manure and micronutrients instead.
pub struct NutrientSurplusRule;

impl Rule for NutrientSurplusRule {
    fn id(&self) -> &'static str {
        "nutrient_surplus"
    }

    fn name(&self) -> &'static str {
        "High NPK"
    }

    fn select(&self, reading: &SoilReading) -> Option<RecommendationKey> {
        let high = [reading.nitrogen, reading.phosphorous, reading.potassium]
            .iter()
            .all(|v| *v >= HIGH_NUTRIENT_PPM);

        high.then_some(RecommendationKey::HighNpk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deficiency(n: f64, p: f64, k: f64) -> Option<RecommendationKey> {
        NutrientDeficiencyRule.select(&SoilReading::new(n, p, k, 50.0))
    }

    #[test]
    fn single_low_nutrient() {
        assert_eq!(deficiency(10.0, 50.0, 50.0), Some(RecommendationKey::NitrogenLow));
        assert_eq!(deficiency(50.0, 10.0, 50.0), Some(RecommendationKey::PhosphorousLow));
        assert_eq!(deficiency(50.0, 50.0, 10.0), Some(RecommendationKey::PotassiumLow));
    }

    #[test]
    fn low_threshold_is_inclusive() {
        assert_eq!(deficiency(30.0, 50.0, 50.0), Some(RecommendationKey::NitrogenLow));
        assert_eq!(deficiency(30.5, 50.0, 50.0), None);
    }

    #[test]
    fn ties_prefer_n_then_p() {
        assert_eq!(deficiency(20.0, 20.0, 20.0), Some(RecommendationKey::NitrogenLow));
        assert_eq!(deficiency(40.0, 20.0, 20.0), Some(RecommendationKey::PhosphorousLow));
        assert_eq!(deficiency(0.0, 0.0, 0.0), Some(RecommendationKey::NitrogenLow));
    }

    #[test]
    fn minimum_low_nutrient_wins() {
        // Both N and K are low; K is lower
        assert_eq!(deficiency(25.0, 50.0, 5.0), Some(RecommendationKey::PotassiumLow));
        // Both P and K are low; P is lower
        assert_eq!(deficiency(50.0, 12.0, 28.0), Some(RecommendationKey::PhosphorousLow));
    }

    #[test]
    fn nothing_low() {
        assert_eq!(deficiency(50.0, 50.0, 50.0), None);
        assert_eq!(deficiency(31.0, 45.0, 100.0), None);
    }

    #[test]
    fn surplus_requires_all_three() {
        let surplus = |n, p, k| NutrientSurplusRule.select(&SoilReading::new(n, p, k, 50.0));
        assert_eq!(surplus(70.0, 70.0, 70.0), Some(RecommendationKey::HighNpk));
        assert_eq!(surplus(60.0, 60.0, 60.0), Some(RecommendationKey::HighNpk));
        assert_eq!(surplus(59.9, 70.0, 70.0), None);
        assert_eq!(surplus(70.0, 70.0, 40.0), None);
    }
}
