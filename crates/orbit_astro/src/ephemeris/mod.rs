pub mod synthetic;
pub mod types;

pub use synthetic::{approximate_ascendant, deterministic_planetary_positions};
pub use types::PlanetaryPlacement;
