//! Deterministic synthetic astrology core.
//!
//! Every function in this crate is a pure function of its inputs: the same
//! birth data always yields the same chart, so callers can cache results keyed
//! on [`BirthInput::signature`].

pub mod error;
pub mod calendar;
pub mod birth;
pub mod western;
pub mod ephemeris;
pub mod aspects;
pub mod profection;
pub mod synastry;
pub mod lunar;
pub mod daily;
pub mod engine;
pub mod narrative;

pub use birth::{BirthInput, BirthSignature, PartnerProfile, Precision, UserProfile};
pub use engine::{
    AstroEngine, BetweenUsReading, DeterministicAstroEngine, EngineSettings, OriginChart,
    OriginMode, YearlyChart, YearlyMode,
};
pub use error::AstroError;
pub use western::{Element, Planet, Rulership, Sign};
