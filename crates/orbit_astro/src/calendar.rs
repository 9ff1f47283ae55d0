//! Calendar arithmetic used by the chart engine.
//!
//! Day numbers follow the proleptic Gregorian ordinal where 0001-01-01 is day 1.

use crate::error::AstroError;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes past midnight assumed when the birth time is unknown (noon).
pub const UNKNOWN_TIME_MINUTES: i64 = 720;

/// Sequential day number of `date` (0001-01-01 = 1).
pub fn ordinal_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Minutes past midnight for a known birth time, noon otherwise.
pub fn minute_component(birth_time: Option<NaiveTime>) -> i64 {
    match birth_time {
        Some(t) => i64::from(t.hour()) * 60 + i64::from(t.minute()),
        None => UNKNOWN_TIME_MINUTES,
    }
}

/// Age in whole years on `reference`, never negative.
///
/// The year turns on the same day as [`anniversary`], so a 29 February
/// birthday ages on 28 February in non-leap years.
pub fn calculate_age_on(reference: NaiveDate, dob: NaiveDate) -> u32 {
    let mut years = reference.year() - dob.year();
    if (reference.month(), reference.day()) < birthday_in(dob, reference.year()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Month and day the birthday of `dob` is observed in `year`.
fn birthday_in(dob: NaiveDate, year: i32) -> (u32, u32) {
    let leap_day = dob.month() == 2 && dob.day() == 29;
    if leap_day && NaiveDate::from_ymd_opt(year, 2, 29).is_none() {
        (2, 28)
    } else {
        (dob.month(), dob.day())
    }
}

/// The birthday of `dob` in `year`.
///
/// A 29 February birthday falls on 28 February in non-leap years.
pub fn anniversary(dob: NaiveDate, year: i32) -> Result<NaiveDate, AstroError> {
    NaiveDate::from_ymd_opt(year, dob.month(), dob.day())
        .or_else(|| {
            if dob.month() == 2 && dob.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
        .ok_or(AstroError::DateOutOfRange { dob, year })
}

/// Birthday-to-birthday span, `start` inclusive and `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfectionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ProfectionWindow {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }
}

/// The profection year containing `reference`.
pub fn current_profection_window(
    reference: NaiveDate,
    dob: NaiveDate,
) -> Result<ProfectionWindow, AstroError> {
    let this_year = anniversary(dob, reference.year())?;
    if reference >= this_year {
        Ok(ProfectionWindow {
            start: this_year,
            end: anniversary(dob, reference.year() + 1)?,
        })
    } else {
        Ok(ProfectionWindow {
            start: anniversary(dob, reference.year() - 1)?,
            end: this_year,
        })
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AstroError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| AstroError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime, AstroError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| AstroError::InvalidTime {
            value: value.to_string(),
        })
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
pub fn ordinal_suffix(value: u32) -> String {
    let suffix = if (10..=20).contains(&(value % 100)) {
        "th"
    } else {
        match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{value}{suffix}")
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
