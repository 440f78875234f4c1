pub mod accuracy;
pub mod field;
pub mod reading;
pub mod recommendation;

pub use accuracy::*;
pub use field::*;
pub use reading::*;
pub use recommendation::*;
