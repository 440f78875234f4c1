use crate::config::{Config, FormDefaults};
use crate::i18n::{LabelTable, Locale, LocalizedRecommendation, Translations};
use crate::logic::{parse_measurement, ReadingInput, RecommendationEngine};
use crate::models::{CropType, FieldProfile, Measurement, Recommendation, SoilReading, SoilType};
use crate::ui::screens::AdvisorField;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Advisor,
    Models,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Advisor),
            '2' => Some(Screen::Models),
            _ => None,
        }
    }
}

pub struct AdvisorState {
    pub focused_field: AdvisorField,
    pub editing: bool,
    pub edit_buffer: String,
    /// Raw text per measurement, indexed by `Measurement::index`
    values: [String; 6],
    pub soil_index: usize,
    pub crop_index: usize,
}

fn index_of<T: PartialEq>(all: &[T], item: &T) -> usize {
    all.iter().position(|x| x == item).unwrap_or(0)
}

impl AdvisorState {
    pub fn new(defaults: &FormDefaults) -> Self {
        let input = defaults.reading_input();
        let mut values: [String; 6] = Default::default();
        for measurement in Measurement::all() {
            values[measurement.index()] = input
                .get(*measurement)
                .map(|v| v.to_string())
                .unwrap_or_default();
        }

        Self {
            focused_field: AdvisorField::Soil,
            editing: false,
            edit_buffer: String::new(),
            values,
            soil_index: index_of(SoilType::all(), &defaults.soil_type),
            crop_index: index_of(CropType::all(), &defaults.crop_type),
        }
    }

    pub fn value(&self, measurement: Measurement) -> &str {
        &self.values[measurement.index()]
    }

    pub fn set_value(&mut self, measurement: Measurement, raw: &str) {
        self.values[measurement.index()] = raw.trim().to_string();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Begin editing the focused measurement. Returns false on other fields.
    pub fn start_editing(&mut self) -> bool {
        let Some(measurement) = self.focused_field.measurement() else {
            return false;
        };
        self.editing = true;
        self.edit_buffer = self.value(measurement).to_string();
        true
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    pub fn finish_editing(&mut self) {
        self.editing = false;
        let buffer = std::mem::take(&mut self.edit_buffer);
        if let Some(measurement) = self.focused_field.measurement() {
            self.set_value(measurement, &buffer);
        }
    }

    /// Step the focused soil or crop choice forward or back.
    pub fn cycle_option(&mut self, forward: bool) {
        let (index, len) = match self.focused_field {
            AdvisorField::Soil => (&mut self.soil_index, SoilType::all().len()),
            AdvisorField::Crop => (&mut self.crop_index, CropType::all().len()),
            _ => return,
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }

    pub fn reading_input(&self) -> ReadingInput {
        let mut input = ReadingInput::default();
        for measurement in Measurement::all() {
            input.set(*measurement, parse_measurement(self.value(*measurement)));
        }
        input
    }

    pub fn profile(&self) -> FieldProfile {
        let soils = SoilType::all();
        let crops = CropType::all();
        FieldProfile::new(
            soils[self.soil_index % soils.len()],
            crops[self.crop_index % crops.len()],
        )
    }
}

/// The most recent accepted submission.
#[derive(Debug, Clone)]
pub struct LastResult {
    pub reading: SoilReading,
    pub profile: FieldProfile,
    pub recommendation: Recommendation,
    pub computed_at: DateTime<Local>,
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub locale: Locale,
    pub translations: Translations,
    pub engine: RecommendationEngine,

    pub advisor_state: AdvisorState,
    pub last_result: Option<LastResult>,

    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config, translations: Translations, locale: Locale) -> Self {
        let advisor_state = AdvisorState::new(&config.defaults);

        Self {
            screen: Screen::Advisor,
            should_quit: false,
            config,
            locale,
            translations,
            engine: RecommendationEngine::new(),
            advisor_state,
            last_result: None,
            status_message: None,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn labels(&self) -> &LabelTable {
        self.translations.get(self.locale)
    }

    pub fn cycle_language(&mut self) {
        self.locale = self.locale.next();
        tracing::debug!("Display language now {}", self.locale);
        // A pending validation message was in the old language
        self.clear_status();
    }

    /// Put the form back to the configured defaults. The last result stays.
    pub fn reset_form(&mut self) {
        self.advisor_state = AdvisorState::new(&self.config.defaults);
        self.clear_status();
    }

    /// Validate the form and run the engine.
    ///
    /// On failure the previous result is kept and the localized
    /// invalid-input message is shown instead.
    pub fn submit(&mut self) -> bool {
        let input = self.advisor_state.reading_input();
        let reading = match input.validate() {
            Ok(reading) => reading,
            Err(e) => {
                tracing::debug!("Submission rejected: {}", e);
                let message = self.labels().invalid_input.clone();
                self.set_status(&message);
                return false;
            }
        };

        let profile = self.advisor_state.profile();
        let recommendation = self.engine.evaluate(&reading, &profile);
        tracing::info!(
            key = recommendation.key.as_str(),
            soil = profile.soil_type.as_str(),
            crop = profile.crop_type.as_str(),
            "recommendation computed"
        );

        self.last_result = Some(LastResult {
            reading,
            profile,
            recommendation,
            computed_at: Local::now(),
        });
        self.clear_status();
        true
    }

    pub fn localized_result(&self) -> Option<LocalizedRecommendation> {
        self.last_result
            .as_ref()
            .map(|r| self.translations.localize(self.locale, &r.recommendation))
    }
}
