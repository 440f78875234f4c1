pub mod gauge;
pub mod input;

pub use gauge::{accuracy_gauge, reading_gauge};
pub use input::{InputWidget, SelectWidget};
