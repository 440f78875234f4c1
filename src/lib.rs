//! Rule-based fertilizer recommendations.
//!
//! - `logic/`: selection rules, the template table and product adjustments
//! - `i18n/`: display labels per locale
//! - `api/`: axum HTTP front end
//! - `app` and `ui/`: terminal interface state and widgets

pub mod api;
pub mod app;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logic;
pub mod models;
pub mod output;
pub mod ui;

pub use error::{AdvisorError, Result};
pub use logic::{recommend, RecommendationEngine};
pub use models::{CropType, FieldProfile, Recommendation, RecommendationKey, SoilReading, SoilType};
