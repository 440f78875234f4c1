use crate::logic::rules::{
    moisture::{DRY_MOISTURE_PCT, WET_MOISTURE_PCT},
    nutrient::{HIGH_NUTRIENT_PPM, LOW_NUTRIENT_PPM},
};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    // Status colors
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Reading colors
    pub const NUTRIENT_LOW: Color = Color::Yellow;
    pub const NUTRIENT_OK: Color = Color::Green;
    pub const NUTRIENT_HIGH: Color = Color::LightMagenta;
    pub const MOISTURE_DRY: Color = Color::Yellow;
    pub const MOISTURE_OK: Color = Color::Green;
    pub const MOISTURE_WET: Color = Color::LightBlue;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR).add_modifier(Modifier::BOLD)
    }

    /// Matches the engine's thresholds: low at or below 30, high from 60.
    pub fn nutrient_color(ppm: f64) -> Color {
        if ppm <= LOW_NUTRIENT_PPM {
            Self::NUTRIENT_LOW
        } else if ppm < HIGH_NUTRIENT_PPM {
            Self::NUTRIENT_OK
        } else {
            Self::NUTRIENT_HIGH
        }
    }

    pub fn moisture_color(pct: f64) -> Color {
        if pct < DRY_MOISTURE_PCT {
            Self::MOISTURE_DRY
        } else if pct <= WET_MOISTURE_PCT {
            Self::MOISTURE_OK
        } else {
            Self::MOISTURE_WET
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}
