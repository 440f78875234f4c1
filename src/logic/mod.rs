pub mod rules;
pub mod validation;

pub use rules::{recommend, RecommendationEngine, RuleTable};
pub use validation::{parse_measurement, ReadingInput};
