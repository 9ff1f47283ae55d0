//! Element balance across a set of placements.

use crate::western::types::{Element, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub fire: usize,
    pub earth: usize,
    pub air: usize,
    pub water: usize,
    pub dominant: Element,
    pub summary: String,
}

impl ElementBalance {
    pub fn count(&self, element: Element) -> usize {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }
}

/// Tally elements; ties resolve to the earliest of fire, earth, air, water.
pub fn summarize_sign_elements(signs: &[Sign]) -> ElementBalance {
    let tally = |element: Element| signs.iter().filter(|s| s.element() == element).count();
    let (fire, earth, air, water) = (
        tally(Element::Fire),
        tally(Element::Earth),
        tally(Element::Air),
        tally(Element::Water),
    );

    let mut dominant = Element::Fire;
    let mut best = fire;
    for (element, count) in [(Element::Earth, earth), (Element::Air, air), (Element::Water, water)] {
        if count > best {
            dominant = element;
            best = count;
        }
    }

    ElementBalance {
        fire,
        earth,
        air,
        water,
        dominant,
        summary: format!("Dominant {} tone ({} placements).", dominant.name(), best),
    }
}
