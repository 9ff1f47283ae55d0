use crate::western::{Planet, Sign};
use serde::{Deserialize, Serialize};

/// A body's synthetic position in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPlacement {
    pub planet: Planet,
    pub sign: Sign,
    /// Degree within the sign, in [0, 30), two decimals.
    pub degree: f64,
    /// House 1..=12, only computed at full precision.
    pub house: Option<u8>,
}
