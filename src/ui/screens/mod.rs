pub mod advisor;
pub mod models;

pub use advisor::{AdvisorField, AdvisorScreen};
pub use models::ModelsScreen;
