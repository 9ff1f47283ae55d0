pub mod calculator;
pub mod types;

pub use calculator::{major_aspects, AspectCalculator, MAJOR_ASPECTS};
pub use types::{AspectKind, AspectRecord};
