//! "Between us" pairing: six fixed compatibility dimensions.
//!
//! Scores are display labels derived from the partner's display name, not
//! from chart placements.

use crate::birth::{BirthInput, PartnerProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingMode {
    /// Both people have full-precision birth data.
    FullSynastry,
    /// The partner has a date of birth, one side lacks full precision.
    PartialSynastry,
    /// The partner has a known sign but no date of birth.
    SunSignPairing,
    NameOnlyReflection,
}

impl PairingMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullSynastry => "full_synastry",
            Self::PartialSynastry => "partial_synastry",
            Self::SunSignPairing => "sun_sign_pairing",
            Self::NameOnlyReflection => "name_only_reflection",
        }
    }

    /// "Full Synastry", "Name Only Reflection", ...
    pub fn label(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for PairingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLabel {
    StrongFlow,
    Mixed,
    GrowthEdge,
    Magnetic,
    Steady,
    Intense,
    /// Placeholder shown when there is no birth data to pair.
    Reflect,
}

impl ScoreLabel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::StrongFlow => "strong_flow",
            Self::Mixed => "mixed",
            Self::GrowthEdge => "growth_edge",
            Self::Magnetic => "magnetic",
            Self::Steady => "steady",
            Self::Intense => "intense",
            Self::Reflect => "reflect",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const COMPATIBILITY_LABELS: [ScoreLabel; 6] = [
    ScoreLabel::StrongFlow,
    ScoreLabel::Mixed,
    ScoreLabel::GrowthEdge,
    ScoreLabel::Magnetic,
    ScoreLabel::Steady,
    ScoreLabel::Intense,
];

/// (key, label) in display order.
pub const DIMENSIONS: [(&str, &str); 6] = [
    ("emotional", "Emotional Compatibility"),
    ("communication", "Communication Style"),
    ("sexual", "Sexual Chemistry"),
    ("stability", "Long-Term Stability"),
    ("growth", "Growth Potential"),
    ("power", "Power Dynamics"),
];

pub fn compatibility_label(seed: usize) -> ScoreLabel {
    COMPATIBILITY_LABELS[seed % COMPATIBILITY_LABELS.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityDimension {
    pub key: String,
    pub label: String,
    pub score_label: ScoreLabel,
    /// "<user sign> x <partner sign> pattern"; absent in name-only mode.
    pub basis: Option<String>,
    pub narrative: String,
}

/// Pick the pairing mode from whatever partner data exists.
pub fn pairing_mode(user: &BirthInput, partner: Option<&PartnerProfile>) -> PairingMode {
    match partner {
        Some(PartnerProfile { birth: Some(partner_birth), .. }) => {
            if user.is_full_precision() && partner_birth.is_full_precision() {
                PairingMode::FullSynastry
            } else {
                PairingMode::PartialSynastry
            }
        }
        Some(PartnerProfile { sun_sign: Some(_), .. }) => PairingMode::SunSignPairing,
        _ => PairingMode::NameOnlyReflection,
    }
}

/// Six dimensions for a pairing, always in [`DIMENSIONS`] order.
///
/// `basis` is the sign pattern text; it is ignored in name-only mode.
pub fn score_dimensions(
    mode: PairingMode,
    partner_display_name: &str,
    basis: &str,
) -> Vec<CompatibilityDimension> {
    let name_len = partner_display_name.chars().count();

    DIMENSIONS
        .iter()
        .enumerate()
        .map(|(idx, (key, label))| {
            let computed = compatibility_label((idx + name_len) * 3);
            let (score_label, basis, narrative) = if mode == PairingMode::NameOnlyReflection {
                (
                    ScoreLabel::Reflect,
                    None,
                    format!(
                        "{label}: reflect on where this relationship feels stable versus effortful, \
                         and what direct conversation would improve it this week."
                    ),
                )
            } else {
                (
                    computed,
                    Some(basis.to_string()),
                    format!(
                        "{label}: this connection shows a `{computed}` dynamic. \
                         Use boundaries and explicit communication to convert friction into growth."
                    ),
                )
            };

            CompatibilityDimension {
                key: key.to_string(),
                label: label.to_string(),
                score_label,
                basis,
                narrative,
            }
        })
        .collect()
}
