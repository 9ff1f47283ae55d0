use crate::western::Planet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Opposition => "opposition",
        }
    }

    /// Exact angle in degrees.
    pub const fn angle(self) -> u16 {
        match self {
            Self::Conjunction => 0,
            Self::Sextile => 60,
            Self::Square => 90,
            Self::Trine => 120,
            Self::Opposition => 180,
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A synthetic aspect between two chart bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub a: Planet,
    pub b: Planet,
    pub aspect: AspectKind,
    pub angle: u16,
    /// Degrees in [0, 8), two decimals.
    pub orb: f64,
}
