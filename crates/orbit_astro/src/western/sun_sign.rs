//! Tropical sun sign lookup by calendar window.

use crate::western::types::Sign;
use chrono::{Datelike, NaiveDate};

/// (sign, start (month, day), end (month, day)), both ends inclusive.
/// Capricorn is the only window that wraps across the new year.
pub const SIGN_WINDOWS: [(Sign, (u32, u32), (u32, u32)); 12] = [
    (Sign::Capricorn, (12, 22), (1, 19)),
    (Sign::Aquarius, (1, 20), (2, 18)),
    (Sign::Pisces, (2, 19), (3, 20)),
    (Sign::Aries, (3, 21), (4, 19)),
    (Sign::Taurus, (4, 20), (5, 20)),
    (Sign::Gemini, (5, 21), (6, 20)),
    (Sign::Cancer, (6, 21), (7, 22)),
    (Sign::Leo, (7, 23), (8, 22)),
    (Sign::Virgo, (8, 23), (9, 22)),
    (Sign::Libra, (9, 23), (10, 22)),
    (Sign::Scorpio, (10, 23), (11, 21)),
    (Sign::Sagittarius, (11, 22), (12, 21)),
];

pub fn sun_sign_for_date(dob: NaiveDate) -> Sign {
    let month_day = (dob.month(), dob.day());
    for (sign, start, end) in SIGN_WINDOWS {
        let matched = if start <= end {
            start <= month_day && month_day <= end
        } else {
            month_day >= start || month_day <= end
        };
        if matched {
            return sign;
        }
    }
    // The windows cover every (month, day) of the calendar.
    Sign::Capricorn
}

/// `seed mod 12` into the zodiac, starting at Aries.
pub fn deterministic_sign(seed: i64) -> Sign {
    Sign::from_index(seed)
}
