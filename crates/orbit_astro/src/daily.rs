//! Deterministic daily horoscope used when no generated prose is available.

use crate::birth::UserProfile;
use crate::western::Sign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One horoscope per (sign, day); safe to cache on that pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoroscope {
    pub sign: Sign,
    pub date: NaiveDate,
    pub headline: String,
    pub general: String,
    pub love: String,
    pub career: String,
    pub wellness: String,
}

pub fn daily_horoscope(sign: Sign, day: NaiveDate) -> DailyHoroscope {
    DailyHoroscope {
        sign,
        date: day,
        headline: format!("{sign} daily theme"),
        general: "Keep decisions simple today. Act on what is clear and defer what is noisy.".to_string(),
        love: "Name one need directly instead of hinting.".to_string(),
        career: "Prioritize one high-impact task and close it.".to_string(),
        wellness: "Reduce cognitive overload with one structured reset block.".to_string(),
    }
}

pub fn daily_horoscope_for(user: &UserProfile, day: NaiveDate) -> DailyHoroscope {
    daily_horoscope(user.effective_sign(), day)
}
