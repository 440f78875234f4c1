//! Display labels per locale.
//!
//! Tables are plain YAML keyed by engine identifiers (`Loamy`, `N_Low`, ...)
//! so nothing here feeds back into rule selection. The English and Kannada
//! tables are embedded; a directory of `<code>.yaml` files can replace them.

use crate::error::{AdvisorError, Result};
use crate::models::{CropType, Measurement, Recommendation, RecommendationKey, SoilType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const EMBEDDED_EN: &str = include_str!("../../locales/en.yaml");
const EMBEDDED_KN: &str = include_str!("../../locales/kn.yaml");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Kannada,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Kannada]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Kannada => "Kannada",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Kannada => "kn",
        }
    }

    /// The locale the engine writes its strings in.
    pub fn is_canonical(&self) -> bool {
        *self == Locale::English
    }

    pub fn next(&self) -> Self {
        match self {
            Locale::English => Locale::Kannada,
            Locale::Kannada => Locale::English,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Locale::English),
            "kannada" | "kn" => Some(Locale::Kannada),
            _ => None,
        }
    }

    fn embedded_source(&self) -> &'static str {
        match self {
            Locale::English => EMBEDDED_EN,
            Locale::Kannada => EMBEDDED_KN,
        }
    }
}

/// Accepts the same names as `--lang` and `?lang=`.
impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let value = String::deserialize(deserializer)?;
        Locale::from_str(&value)
            .ok_or_else(|| D::Error::custom(format!("unknown language '{}'", value)))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LabelTable {
    pub language: String,
    pub title: String,
    pub subtitle: String,
    pub soil_crop: String,
    pub nutrient_title: String,
    pub nitrogen: String,
    pub phosphorous: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub moisture: String,
    pub soil_type: String,
    pub crop_type: String,
    pub get_button: String,
    pub recommended: String,
    pub recommendation_label: String,
    pub helper: String,
    pub model_perf: String,
    pub invalid_input: String,
    #[serde(default)]
    pub soils: HashMap<SoilType, String>,
    #[serde(default)]
    pub crops: HashMap<CropType, String>,
    #[serde(default)]
    pub reasons: HashMap<RecommendationKey, String>,
    #[serde(default)]
    pub model_names: HashMap<String, String>,
}

impl LabelTable {
    pub fn parse(source: &str) -> Result<Self> {
        serde_yaml::from_str(source)
            .map_err(|e| AdvisorError::Locale(format!("Failed to parse label table: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            AdvisorError::Locale(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&source)
    }

    pub fn embedded(locale: Locale) -> Result<Self> {
        Self::parse(locale.embedded_source())
    }

    pub fn measurement(&self, measurement: Measurement) -> &str {
        match measurement {
            Measurement::Nitrogen => &self.nitrogen,
            Measurement::Phosphorous => &self.phosphorous,
            Measurement::Potassium => &self.potassium,
            Measurement::Temperature => &self.temperature,
            Measurement::Humidity => &self.humidity,
            Measurement::Moisture => &self.moisture,
        }
    }

    pub fn soil(&self, soil: SoilType) -> &str {
        self.soils
            .get(&soil)
            .map(String::as_str)
            .unwrap_or(soil.as_str())
    }

    pub fn crop(&self, crop: CropType) -> &str {
        self.crops
            .get(&crop)
            .map(String::as_str)
            .unwrap_or(crop.as_str())
    }

    pub fn model_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.model_names
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Soil and crop identifiers with no label in this table.
    pub fn missing_labels(&self) -> Vec<String> {
        let soils = SoilType::all()
            .iter()
            .filter(|s| !self.soils.contains_key(s))
            .map(|s| format!("soils.{}", s.as_str()));
        let crops = CropType::all()
            .iter()
            .filter(|c| !self.crops.contains_key(c))
            .map(|c| format!("crops.{}", c.as_str()));
        soils.chain(crops).collect()
    }
}

/// A recommendation prepared for display in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedRecommendation {
    pub heading: String,
    /// Always the canonical product name.
    pub fertilizer: String,
    /// Translated gist of the reason, when the table has one for the key.
    pub summary: Option<String>,
    pub reason: String,
}

pub struct Translations {
    tables: HashMap<Locale, LabelTable>,
    fallback: LabelTable,
}

impl Translations {
    /// Load every locale, preferring `<dir>/<code>.yaml` over the embedded table.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let mut tables = HashMap::new();

        for locale in Locale::all() {
            let override_path = dir.map(|d| d.join(format!("{}.yaml", locale.code())));
            let table = match override_path {
                Some(path) if path.exists() => {
                    tracing::info!("Loading {} labels from {}", locale, path.display());
                    LabelTable::from_file(&path)?
                }
                _ => LabelTable::embedded(*locale)?,
            };
            tables.insert(*locale, table);
        }

        let fallback = LabelTable::embedded(Locale::English)?;
        Ok(Self { tables, fallback })
    }

    pub fn embedded() -> Result<Self> {
        Self::load(None)
    }

    pub fn get(&self, locale: Locale) -> &LabelTable {
        self.tables.get(&locale).unwrap_or(&self.fallback)
    }

    pub fn localize(&self, locale: Locale, rec: &Recommendation) -> LocalizedRecommendation {
        let labels = self.get(locale);

        if locale.is_canonical() {
            return LocalizedRecommendation {
                heading: labels.recommendation_label.clone(),
                fertilizer: rec.fertilizer.clone(),
                summary: None,
                reason: rec.reason.clone(),
            };
        }

        LocalizedRecommendation {
            heading: labels.recommendation_label.clone(),
            fertilizer: rec.fertilizer.clone(),
            summary: labels.reasons.get(&rec.key).cloned(),
            reason: format!("({})", rec.reason),
        }
    }
}
