//! Chart orchestration: assembles placements, aspects, profections and
//! pairings into the readings handed to callers.

use crate::aspects::{AspectCalculator, AspectRecord};
use crate::birth::{BirthInput, BirthSignature, PartnerProfile, UserProfile};
use crate::calendar::ProfectionWindow;
use crate::ephemeris::{approximate_ascendant, deterministic_planetary_positions, PlanetaryPlacement};
use crate::error::AstroError;
use crate::lunar::{approximate_moon_sign, moon_change_warning};
use crate::narrative::{
    between_us_narrative, origin_narrative, yearly_narrative, BetweenUsNarrative, OriginNarrative,
    YearlyNarrative,
};
use crate::profection::profection_for;
use crate::synastry::{pairing_mode, score_dimensions, CompatibilityDimension, PairingMode};
use crate::western::{summarize_sign_elements, ElementBalance, Planet, Rulership, Sign};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// Placements counted for the element balance.
const ELEMENT_SAMPLE: usize = 8;

/// Engine configuration, passed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    /// Scheme used to find the profection lord.
    pub rulership: Rulership,
    /// Display name when a reflection is requested without a partner name.
    pub default_partner_name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rulership: Rulership::Traditional,
            default_partner_name: "Partner".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginMode {
    Full,
    SignOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearlyMode {
    FullProfection,
    LightYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPrecision {
    Precise,
    Approximate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonNote {
    pub precision: MoonPrecision,
    /// Day-of-month heuristic; the Moon may have changed sign on this date.
    pub sign_change_possible: bool,
    /// Low-confidence estimate independent of birth time.
    pub approximate_sign: Sign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginChart {
    pub mode: OriginMode,
    pub signature: BirthSignature,
    pub sun_sign: Sign,
    pub ascendant: Option<Sign>,
    pub placements: Vec<PlanetaryPlacement>,
    pub aspects: Option<Vec<AspectRecord>>,
    pub moon: MoonNote,
    pub elements: ElementBalance,
    pub narrative: OriginNarrative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyChart {
    pub mode: YearlyMode,
    pub age: u32,
    pub profected_house: u8,
    pub house_topic: String,
    pub window: ProfectionWindow,
    pub house_sign: Option<Sign>,
    pub ruling_planet: Option<Planet>,
    pub narrative: YearlyNarrative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetweenUsReading {
    pub mode: PairingMode,
    pub partner_name: String,
    /// `None` when the partner's sign is unknown.
    pub partner_sign: Option<Sign>,
    pub dimensions: Vec<CompatibilityDimension>,
    pub narrative: BetweenUsNarrative,
}

/// The three reading operations.
pub trait AstroEngine {
    fn origin_chart(&self, birth: &BirthInput) -> OriginChart;

    fn yearly_chart(&self, birth: &BirthInput, reference: NaiveDate) -> Result<YearlyChart, AstroError>;

    fn between_us(
        &self,
        user: &UserProfile,
        partner: Option<&PartnerProfile>,
        partner_name: Option<&str>,
    ) -> BetweenUsReading;
}

/// Seeded-arithmetic engine. Holds configuration only; every call is pure.
#[derive(Debug, Clone, Default)]
pub struct DeterministicAstroEngine {
    settings: EngineSettings,
    aspects: AspectCalculator,
}

impl DeterministicAstroEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            aspects: AspectCalculator::new(),
        }
    }
}

impl AstroEngine for DeterministicAstroEngine {
    fn origin_chart(&self, birth: &BirthInput) -> OriginChart {
        let full = birth.is_full_precision();
        debug!("origin chart for {} (full precision: {full})", birth.dob);

        let placements = deterministic_planetary_positions(birth.dob, birth.birth_time, full);
        let ascendant = full.then(|| approximate_ascendant(birth.dob, birth.birth_time));
        let aspects = full.then(|| self.aspects.compute_major_aspects(&placements));

        let sample: Vec<Sign> = placements.iter().take(ELEMENT_SAMPLE).map(|p| p.sign).collect();
        let elements = summarize_sign_elements(&sample);
        let narrative = origin_narrative(full, &placements, &elements);

        OriginChart {
            mode: if full { OriginMode::Full } else { OriginMode::SignOnly },
            signature: birth.signature(),
            sun_sign: birth.sun_sign(),
            ascendant,
            placements,
            aspects,
            moon: MoonNote {
                precision: if full { MoonPrecision::Precise } else { MoonPrecision::Approximate },
                sign_change_possible: moon_change_warning(birth.dob),
                approximate_sign: approximate_moon_sign(birth.dob),
            },
            elements,
            narrative,
        }
    }

    fn yearly_chart(&self, birth: &BirthInput, reference: NaiveDate) -> Result<YearlyChart, AstroError> {
        let full = birth.is_full_precision();
        let ascendant = full.then(|| approximate_ascendant(birth.dob, birth.birth_time));
        let state = profection_for(birth.dob, reference, ascendant, self.settings.rulership)?;
        debug!(
            "yearly chart for {} on {reference}: age {}, house {}",
            birth.dob, state.age, state.house
        );

        let narrative = yearly_narrative(state.house, &state.house_topic, &state.window, state.lord);
        Ok(YearlyChart {
            mode: if full { YearlyMode::FullProfection } else { YearlyMode::LightYear },
            age: state.age,
            profected_house: state.house,
            house_topic: state.house_topic,
            window: state.window,
            house_sign: state.house_sign,
            ruling_planet: state.lord,
            narrative,
        })
    }

    fn between_us(
        &self,
        user: &UserProfile,
        partner: Option<&PartnerProfile>,
        partner_name: Option<&str>,
    ) -> BetweenUsReading {
        let mode = pairing_mode(&user.birth, partner);

        let (partner_display_name, partner_sign) = match mode {
            PairingMode::NameOnlyReflection => {
                let name = partner_name
                    .filter(|n| !n.trim().is_empty())
                    .map(str::to_string)
                    .or_else(|| partner.map(|p| p.name.clone()))
                    .unwrap_or_else(|| self.settings.default_partner_name.clone());
                (name, None)
            }
            _ => {
                let partner = partner.map(|p| (p.name.clone(), p.effective_sign()));
                partner.unwrap_or_else(|| (self.settings.default_partner_name.clone(), None))
            }
        };
        debug!("between-us reading in {mode} mode with {partner_display_name}");

        let basis = format!(
            "{} x {} pattern",
            user.effective_sign(),
            partner_sign.map(|s| s.name()).unwrap_or("Unknown")
        );
        let dimensions = score_dimensions(mode, &partner_display_name, &basis);
        let narrative = between_us_narrative(mode, &user.first_name, &partner_display_name);

        BetweenUsReading {
            mode,
            partner_name: partner_display_name,
            partner_sign,
            dimensions,
            narrative,
        }
    }
}
