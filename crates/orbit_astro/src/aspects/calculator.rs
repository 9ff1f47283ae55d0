use crate::aspects::types::{AspectKind, AspectRecord};
use crate::calendar::round2;
use crate::ephemeris::PlanetaryPlacement;

/// Major aspects in table order; the pick index walks this list.
pub const MAJOR_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Opposition,
];

/// Only the leading placements take part.
pub const ASPECT_SOURCE_COUNT: usize = 6;
/// Each source body is paired with the body this many places later.
pub const PARTNER_OFFSET: usize = 2;
/// Orbs wrap at this many degrees.
pub const ORB_MODULUS: f64 = 8.0;

/// Builds the short synthetic aspect list for a chart.
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Up to six records, one per leading placement.
    pub fn compute_major_aspects(&self, positions: &[PlanetaryPlacement]) -> Vec<AspectRecord> {
        let count = positions.len();
        (0..count.min(ASPECT_SOURCE_COUNT))
            .map(|i| {
                let a = &positions[i];
                let b = &positions[(i + PARTNER_OFFSET) % count];
                let aspect = MAJOR_ASPECTS[(i + a.degree.trunc() as usize) % MAJOR_ASPECTS.len()];
                AspectRecord {
                    a: a.planet,
                    b: b.planet,
                    aspect,
                    angle: aspect.angle(),
                    orb: round2((a.degree - b.degree).abs() % ORB_MODULUS),
                }
            })
            .collect()
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn major_aspects(positions: &[PlanetaryPlacement]) -> Vec<AspectRecord> {
    AspectCalculator::new().compute_major_aspects(positions)
}
