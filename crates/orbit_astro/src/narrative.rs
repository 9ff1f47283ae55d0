//! Fixed template text attached to each reading.
//!
//! This is the deterministic fallback voice; callers that generate prose
//! elsewhere can replace it but should keep the disclaimers.

use crate::calendar::{ordinal_suffix, ProfectionWindow};
use crate::ephemeris::PlanetaryPlacement;
use crate::synastry::PairingMode;
use crate::western::{ElementBalance, Planet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementNote {
    pub planet: Planet,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginNarrative {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub mode_label: String,
    pub placement_notes: Vec<PlacementNote>,
    pub disclaimers: Vec<String>,
}

pub fn origin_narrative(
    full: bool,
    placements: &[PlanetaryPlacement],
    elements: &ElementBalance,
) -> OriginNarrative {
    let headline = match placements {
        [sun, moon, ..] => format!(
            "You lead with {} Sun expression and {} emotional tone.",
            sun.sign, moon.sign
        ),
        [sun] => format!("You lead with {} Sun expression.", sun.sign),
        [] => "Your chart is ready.".to_string(),
    };

    let mut paragraphs = vec![
        "This interpretation is built from your stored birth data and rendered in a direct, non-predictive voice."
            .to_string(),
        elements.summary.clone(),
    ];
    if !full {
        paragraphs.push(
            "Add your birth time and place to unlock Rising sign, houses, and precise aspect-level depth."
                .to_string(),
        );
    }

    let placement_notes = placements
        .iter()
        .map(|p| PlacementNote {
            planet: p.planet,
            text: format!(
                "{} in {} suggests a recurring pattern you can consciously work with.",
                p.planet, p.sign
            ),
        })
        .collect();

    let disclaimers = if full {
        Vec::new()
    } else {
        vec![
            "This reading is based on birth date only.".to_string(),
            "Rising sign and houses require an accurate birth time and location.".to_string(),
            "Moon sign may shift within the day for some birth dates.".to_string(),
        ]
    };

    OriginNarrative {
        headline,
        paragraphs,
        mode_label: if full { "Full chart" } else { "Birth-date-only chart" }.to_string(),
        placement_notes,
        disclaimers,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub segment: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyNarrative {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub mode_label: String,
    pub year_label: String,
    pub window_label: String,
    pub house_focus: String,
    pub ruling_planet_note: Option<String>,
    pub timeline: Vec<TimelineSegment>,
    pub prompts: Vec<String>,
    pub disclaimers: Vec<String>,
}

pub const YEARLY_TIMELINE_SEGMENTS: [&str; 3] =
    ["Beginning of the year", "Middle of the year", "Closing months"];

pub fn yearly_narrative(
    house: u8,
    topic: &str,
    window: &ProfectionWindow,
    lord: Option<Planet>,
) -> YearlyNarrative {
    let nth = ordinal_suffix(u32::from(house));
    let topic = topic.to_lowercase();
    let full = lord.is_some();

    let timeline_text = [
        format!(
            "Beginning of the year is about setting direction around {topic}. \
             You are likely to notice what requires structure, what can be simplified, and what deserves clear priority."
        ),
        format!(
            "Middle of the year tests commitment to {topic}. \
             This phase often brings tradeoffs, feedback, and practical adjustments that make the path more realistic."
        ),
        format!(
            "Closing months focus on integrating lessons in {topic}. \
             You consolidate what worked, release what drained energy, and carry clearer momentum into the next cycle."
        ),
    ];
    let timeline = YEARLY_TIMELINE_SEGMENTS
        .iter()
        .zip(timeline_text)
        .map(|(segment, text)| TimelineSegment {
            segment: segment.to_string(),
            text,
        })
        .collect();

    YearlyNarrative {
        headline: format!("This is a {nth}-house year focused on {topic}."),
        paragraphs: vec![
            "A profection year means each birthday activates a different life area in a repeating 12-year cycle."
                .to_string(),
            format!(
                "Your current cycle activates the {nth} house, so decisions tied to {topic} carry extra weight this year."
            ),
        ],
        mode_label: if full { "Full profection year" } else { "Birth-date-only year view" }.to_string(),
        year_label: format!("{nth} house year"),
        window_label: format!(
            "{} -> {}",
            window.start.format("%Y-%m-%d"),
            window.end.format("%Y-%m-%d")
        ),
        house_focus: format!("In this cycle, your attention is repeatedly pulled toward {topic}."),
        ruling_planet_note: lord.map(|lord| {
            format!(
                "Your profection lord is {lord}, which colors the year with {}-style priorities.",
                lord.name().to_lowercase()
            )
        }),
        timeline,
        prompts: vec![
            "What pattern am I repeating in this life area?".to_string(),
            "What boundary or commitment would make this year cleaner?".to_string(),
            "What would progress look like by the end of this profection year?".to_string(),
        ],
        disclaimers: if full {
            Vec::new()
        } else {
            vec!["This reading uses your birth date only. Add time/place to unlock full profection detail."
                .to_string()]
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetweenUsNarrative {
    pub headline: String,
    pub paragraphs: Vec<String>,
    pub mode_label: String,
    pub reflection_prompts: Vec<String>,
    pub disclaimers: Vec<String>,
}

pub fn between_us_narrative(mode: PairingMode, first_name: &str, partner_name: &str) -> BetweenUsNarrative {
    BetweenUsNarrative {
        headline: format!("{first_name} and {partner_name}: compatibility across six dimensions."),
        paragraphs: vec![
            "This result is designed as practical relational guidance, not fate.".to_string(),
            "Higher precision requires more complete birth data for both people.".to_string(),
        ],
        mode_label: mode.label(),
        reflection_prompts: vec![
            "Where do we communicate clearly, and where do we assume?".to_string(),
            "Which conflict pattern keeps repeating, and what boundary would interrupt it?".to_string(),
        ],
        disclaimers: if mode == PairingMode::NameOnlyReflection {
            vec!["This is a reflection mode reading. Add partner birth data for astrology-backed synastry."
                .to_string()]
        } else {
            Vec::new()
        },
    }
}
