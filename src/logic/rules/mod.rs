pub mod crop;
pub mod engine;
pub mod moisture;
pub mod nutrient;
pub mod soil;
pub mod table;

pub use engine::{recommend, RecommendationEngine, FALLBACK_KEY};
pub use table::{RuleTable, Template};

use crate::models::{FieldProfile, Recommendation, RecommendationKey, SoilReading};

/// Trait for key-selection rules, evaluated in priority order
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Claim the reading with a key, or pass it to the next rule
    fn select(&self, reading: &SoilReading) -> Option<RecommendationKey>;
}

/// Trait for post-lookup adjustments to a recommendation
pub trait Adjustment: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    /// Rewrite the recommendation for the field; returns true if anything changed
    fn apply(&self, profile: &FieldProfile, rec: &mut Recommendation) -> bool;
}
