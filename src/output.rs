//! Plain-text rendering for the non-interactive commands.

use crate::i18n::{LabelTable, LocalizedRecommendation};
use crate::logic::rules::FALLBACK_KEY;
use crate::logic::{RecommendationEngine, RuleTable};
use crate::models::{FieldProfile, Measurement, SoilReading, REFERENCE_MODEL_ACCURACIES};

/// Join lines with a trailing newline, ready for `print!`.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_recommendation(
    labels: &LabelTable,
    reading: &SoilReading,
    profile: &FieldProfile,
    shown: &LocalizedRecommendation,
) -> String {
    let inputs: Vec<String> = Measurement::all()
        .iter()
        .filter_map(|m| reading.value(*m).map(|v| format!("{}={}", m.symbol(), v)))
        .collect();

    let mut lines = vec![
        format!(
            "{}: {}   {}: {}",
            labels.soil_type,
            labels.soil(profile.soil_type),
            labels.crop_type,
            labels.crop(profile.crop_type)
        ),
        inputs.join(" "),
        String::new(),
        format!("{} {}", shown.heading, shown.fertilizer),
    ];
    if let Some(summary) = &shown.summary {
        lines.push(summary.clone());
    }
    lines.push(shown.reason.clone());

    finish(lines)
}

pub fn render_rules(engine: &RecommendationEngine) -> String {
    let mut lines = vec!["Selection rules (first match wins):".to_string()];
    for (idx, (id, name)) in engine.list_rules().into_iter().enumerate() {
        lines.push(format!("  {}. {:<22} {}", idx + 1, id, name));
    }
    lines.push(format!("     otherwise            {}", FALLBACK_KEY.as_str()));

    lines.push(String::new());
    lines.push("Adjustments (applied in order):".to_string());
    for (idx, (id, name)) in engine.list_adjustments().into_iter().enumerate() {
        lines.push(format!("  {}. {:<22} {}", idx + 1, id, name));
    }

    lines.push(String::new());
    lines.push("Templates:".to_string());
    for (key, template) in RuleTable::entries() {
        lines.push(format!("  {:<14} {}", key.as_str(), template.fertilizer));
    }

    finish(lines)
}

pub fn render_models(labels: &LabelTable) -> String {
    let mut lines = vec![labels.model_perf.clone()];
    for model in REFERENCE_MODEL_ACCURACIES.iter() {
        lines.push(format!(
            "  {:<40} {:>6.1}%",
            labels.model_name(model.name),
            model.percent()
        ));
    }

    finish(lines)
}
