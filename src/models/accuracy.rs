use serde::Serialize;

/// Illustrative accuracy figure shown next to the recommendation.
///
/// These are fixed display constants. Nothing in the crate trains or
/// evaluates a model, and the rule engine does not consult them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelAccuracy {
    pub name: &'static str,
    pub accuracy: f64,
}

impl ModelAccuracy {
    pub fn percent(&self) -> f64 {
        self.accuracy * 100.0
    }
}

pub const REFERENCE_MODEL_ACCURACIES: [ModelAccuracy; 4] = [
    ModelAccuracy {
        name: "Decision Tree (Basis for Rules)",
        accuracy: 0.985,
    },
    ModelAccuracy {
        name: "Random Forest Classifier",
        accuracy: 0.963,
    },
    ModelAccuracy {
        name: "Support Vector Machine (SVM)",
        accuracy: 0.941,
    },
    ModelAccuracy {
        name: "K-Nearest Neighbors (KNN)",
        accuracy: 0.892,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_scales_fraction() {
        let first = REFERENCE_MODEL_ACCURACIES[0];
        assert!((first.percent() - 98.5).abs() < 1e-9);
    }

    #[test]
    fn entries_sorted_by_accuracy() {
        let accuracies: Vec<f64> = REFERENCE_MODEL_ACCURACIES
            .iter()
            .map(|m| m.accuracy)
            .collect();
        assert!(accuracies.windows(2).all(|w| w[0] >= w[1]));
        assert!(accuracies.iter().all(|a| (0.0..=1.0).contains(a)));
    }
}
