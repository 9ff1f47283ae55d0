use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised at the edges of the chart engine.
///
/// The chart computations themselves cannot fail for a valid calendar date;
/// these variants cover parsing caller-supplied text and anniversaries that
/// fall outside the representable calendar.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Unknown zodiac sign: {name}")]
    UnknownSign { name: String },
    #[error("Unknown planet: {name}")]
    UnknownPlanet { name: String },
    #[error("Unknown rulership scheme: {name}. Valid schemes: traditional, modern")]
    UnknownRulership { name: String },
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Invalid time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime { value: String },
    #[error("No anniversary of {dob} exists in year {year}")]
    DateOutOfRange { dob: NaiveDate, year: i32 },
}
