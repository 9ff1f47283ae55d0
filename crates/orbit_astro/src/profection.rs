//! Annual profections: each birthday advances the emphasized house by one,
//! completing the circle every twelve years.

use crate::calendar::{calculate_age_on, current_profection_window, ProfectionWindow};
use crate::error::AstroError;
use crate::western::{sign_ruler, Planet, Rulership, Sign};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Life-area topic per house, index 0 = 1st house.
pub const HOUSE_TOPICS: [&str; 12] = [
    "Identity, body, self-definition",
    "Money, values, resources",
    "Communication, learning, siblings",
    "Home, roots, family, emotional foundations",
    "Creativity, romance, joy, self-expression",
    "Workflows, health, daily systems",
    "Partnerships, contracts, commitments",
    "Shared resources, intimacy, transformation",
    "Beliefs, higher learning, travel",
    "Career, reputation, public direction",
    "Community, friendship, long-term goals",
    "Rest, closure, subconscious patterns",
];

/// Age 0 is the 1st house.
pub fn profected_house(age: u32) -> u8 {
    (age % 12) as u8 + 1
}

/// Topic for a house number; wraps outside 1..=12.
pub fn house_topic(house: u8) -> &'static str {
    HOUSE_TOPICS[(usize::from(house) + 11) % 12]
}

/// Sign on the profected house, counting whole signs from the ascendant.
pub fn profected_house_sign(ascendant: Sign, house: u8) -> Sign {
    ascendant.offset(i64::from(house) - 1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfectionState {
    pub age: u32,
    pub house: u8,
    pub house_topic: String,
    pub window: ProfectionWindow,
    /// Present only when the ascendant is known.
    pub house_sign: Option<Sign>,
    pub lord: Option<Planet>,
}

/// Profection for `reference`, with sign and lord when `ascendant` is given.
pub fn profection_for(
    dob: NaiveDate,
    reference: NaiveDate,
    ascendant: Option<Sign>,
    rulership: Rulership,
) -> Result<ProfectionState, AstroError> {
    let age = calculate_age_on(reference, dob);
    let window = current_profection_window(reference, dob)?;
    let house = profected_house(age);
    let house_sign = ascendant.map(|asc| profected_house_sign(asc, house));

    Ok(ProfectionState {
        age,
        house,
        house_topic: house_topic(house).to_string(),
        window,
        house_sign,
        lord: house_sign.map(|sign| sign_ruler(sign, rulership)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profected_house_cycle() {
        assert_eq!(profected_house(0), 1);
        assert_eq!(profected_house(11), 12);
        assert_eq!(profected_house(12), 1);
        assert_eq!(profected_house(23), 12);
        assert_eq!(profected_house(34), 11);
    }

    #[test]
    fn test_house_topics() {
        assert_eq!(house_topic(1), "Identity, body, self-definition");
        assert_eq!(house_topic(12), "Rest, closure, subconscious patterns");
    }

    #[test]
    fn test_house_sign_from_ascendant() {
        assert_eq!(profected_house_sign(Sign::Gemini, 1), Sign::Gemini);
        assert_eq!(profected_house_sign(Sign::Gemini, 11), Sign::Aries);
        assert_eq!(profected_house_sign(Sign::Pisces, 12), Sign::Aquarius);
    }

    #[test]
    fn test_profection_without_ascendant() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let state = profection_for(dob, reference, None, Rulership::Traditional).unwrap();
        assert_eq!(state.age, 34);
        assert_eq!(state.house, 11);
        assert!(state.house_sign.is_none());
        assert!(state.lord.is_none());
    }

    #[test]
    fn test_profection_with_ascendant() {
        let dob = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let state = profection_for(dob, reference, Some(Sign::Gemini), Rulership::Traditional).unwrap();
        assert_eq!(state.house_sign, Some(Sign::Aries));
        assert_eq!(state.lord, Some(Planet::Mars));
    }
}
