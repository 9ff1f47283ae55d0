//! Rough lunar heuristics.
//!
//! None of these use the Moon's real position. They are low-confidence
//! placeholders for birth data without a time, and should be labelled as
//! approximate wherever they are shown.

use crate::calendar::ordinal_day;
use crate::western::{deterministic_sign, Sign};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days of the month on which the Moon may have changed sign.
pub const MOON_CHANGE_DAYS: [u32; 12] = [2, 4, 7, 9, 12, 14, 17, 19, 22, 24, 27, 29];

pub fn approximate_moon_sign(dob: NaiveDate) -> Sign {
    deterministic_sign((ordinal_day(dob) * 11).div_euclid(2))
}

pub fn moon_change_warning(dob: NaiveDate) -> bool {
    MOON_CHANGE_DAYS.contains(&dob.day())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

pub const MOON_PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

/// Each phase is held for this many days.
pub const PHASE_LENGTH_DAYS: i64 = 4;

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "new_moon",
            Self::WaxingCrescent => "waxing_crescent",
            Self::FirstQuarter => "first_quarter",
            Self::WaxingGibbous => "waxing_gibbous",
            Self::FullMoon => "full_moon",
            Self::WaningGibbous => "waning_gibbous",
            Self::LastQuarter => "last_quarter",
            Self::WaningCrescent => "waning_crescent",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonPhaseReading {
    pub phase: MoonPhase,
    pub start_date: NaiveDate,
    /// Inclusive.
    pub end_date: NaiveDate,
    pub insight: String,
}

pub fn moon_phase_for_day(day: NaiveDate) -> MoonPhaseReading {
    let index = ordinal_day(day).div_euclid(PHASE_LENGTH_DAYS).rem_euclid(MOON_PHASES.len() as i64);
    let phase = MOON_PHASES[index as usize];
    MoonPhaseReading {
        phase,
        start_date: day,
        end_date: day + Duration::days(PHASE_LENGTH_DAYS - 1),
        insight: format!(
            "{}: simplify your emotional commitments and close one open loop.",
            phase.title()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_approximate_moon_sign() {
        assert_eq!(approximate_moon_sign(d(1990, 3, 10)), Sign::Sagittarius);
    }

    #[test]
    fn test_moon_change_warning_days() {
        assert!(!moon_change_warning(d(1990, 3, 10)));
        assert!(moon_change_warning(d(1990, 3, 9)));
        assert!(moon_change_warning(d(1990, 3, 29)));
        assert!(!moon_change_warning(d(1990, 3, 30)));
    }

    #[test]
    fn test_moon_phase_window() {
        let reading = moon_phase_for_day(d(2024, 6, 1));
        assert_eq!(reading.phase, MoonPhase::WaningCrescent);
        assert_eq!(reading.end_date, d(2024, 6, 4));
        assert_eq!(
            reading.insight,
            "Waning Crescent: simplify your emotional commitments and close one open loop."
        );
    }
}
