//! Birth data supplied by callers.

use crate::western::{sun_sign_for_date, Sign};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Birth time, latitude, longitude and timezone are all known.
    Full,
    Reduced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub dob: NaiveDate,
    #[serde(default)]
    pub birth_time: Option<NaiveTime>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl BirthInput {
    /// Date of birth only.
    pub fn date_only(dob: NaiveDate) -> Self {
        Self {
            dob,
            birth_time: None,
            lat: None,
            lng: None,
            timezone: None,
        }
    }

    pub fn with_time(mut self, birth_time: NaiveTime) -> Self {
        self.birth_time = Some(birth_time);
        self
    }

    pub fn with_location(mut self, lat: f64, lng: f64, timezone: impl Into<String>) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self.timezone = Some(timezone.into());
        self
    }

    pub fn precision(&self) -> Precision {
        let has_timezone = self.timezone.as_deref().is_some_and(|tz| !tz.is_empty());
        if self.birth_time.is_some() && self.lat.is_some() && self.lng.is_some() && has_timezone {
            Precision::Full
        } else {
            Precision::Reduced
        }
    }

    pub fn is_full_precision(&self) -> bool {
        self.precision() == Precision::Full
    }

    pub fn sun_sign(&self) -> Sign {
        sun_sign_for_date(self.dob)
    }

    /// Key over every field that influences a computed chart.
    pub fn signature(&self) -> BirthSignature {
        fn opt<T: fmt::Display>(value: &Option<T>) -> String {
            value.as_ref().map(|v| v.to_string()).unwrap_or_default()
        }
        BirthSignature(format!(
            "{}|{}|{}|{}|{}",
            self.dob.format("%Y-%m-%d"),
            opt(&self.birth_time.map(|t| t.format("%H:%M:%S"))),
            opt(&self.lat),
            opt(&self.lng),
            opt(&self.timezone),
        ))
    }
}

/// Identity of a birth record for reuse of stored charts.
///
/// Two inputs with equal signatures produce identical charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthSignature(String);

impl BirthSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BirthSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub birth: BirthInput,
    /// Sign stored at registration, if any.
    #[serde(default)]
    pub sun_sign: Option<Sign>,
}

impl UserProfile {
    pub fn new(first_name: impl Into<String>, birth: BirthInput) -> Self {
        Self {
            first_name: first_name.into(),
            birth,
            sun_sign: None,
        }
    }

    /// Stored sign, else the sun sign of the date of birth.
    pub fn effective_sign(&self) -> Sign {
        self.sun_sign.unwrap_or_else(|| self.birth.sun_sign())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerProfile {
    pub name: String,
    #[serde(default)]
    pub birth: Option<BirthInput>,
    #[serde(default)]
    pub sun_sign: Option<Sign>,
}

impl PartnerProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth: None,
            sun_sign: None,
        }
    }

    pub fn with_birth(mut self, birth: BirthInput) -> Self {
        self.birth = Some(birth);
        self
    }

    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sun_sign = Some(sign);
        self
    }

    /// Stored sign, else the sun sign of the date of birth.
    pub fn effective_sign(&self) -> Option<Sign> {
        self.sun_sign
            .or_else(|| self.birth.as_ref().map(BirthInput::sun_sign))
    }
}
