//! Sign rulers for Western astrology.
//!
//! Maps zodiac signs to their planetary rulers (traditional and modern).

use crate::error::AstroError;
use crate::western::types::{Planet, Sign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rulership {
    /// Classical seven-planet rulerships.
    #[default]
    Traditional,
    /// Outer planets take Scorpio, Aquarius and Pisces.
    Modern,
}

impl FromStr for Rulership {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traditional" => Ok(Self::Traditional),
            "modern" => Ok(Self::Modern),
            _ => Err(AstroError::UnknownRulership { name: s.to_string() }),
        }
    }
}

const TRADITIONAL_RULERS: [Planet; 12] = [
    Planet::Mars,    // Aries
    Planet::Venus,   // Taurus
    Planet::Mercury, // Gemini
    Planet::Moon,    // Cancer
    Planet::Sun,     // Leo
    Planet::Mercury, // Virgo
    Planet::Venus,   // Libra
    Planet::Mars,    // Scorpio
    Planet::Jupiter, // Sagittarius
    Planet::Saturn,  // Capricorn
    Planet::Saturn,  // Aquarius
    Planet::Jupiter, // Pisces
];

const MODERN_RULERS: [Planet; 12] = [
    Planet::Mars,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
    Planet::Sun,
    Planet::Mercury,
    Planet::Venus,
    Planet::Pluto, // Scorpio (modern)
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,  // Aquarius (modern)
    Planet::Neptune, // Pisces (modern)
];

/// Ruling planet of `sign` under the given scheme.
pub fn sign_ruler(sign: Sign, scheme: Rulership) -> Planet {
    match scheme {
        Rulership::Traditional => TRADITIONAL_RULERS[sign.index()],
        Rulership::Modern => MODERN_RULERS[sign.index()],
    }
}

/// Ruling planet of `sign` in the classical scheme.
pub fn sign_to_lord(sign: Sign) -> Planet {
    sign_ruler(sign, Rulership::Traditional)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_ruler_traditional() {
        assert_eq!(sign_to_lord(Sign::Aries), Planet::Mars);
        assert_eq!(sign_to_lord(Sign::Cancer), Planet::Moon);
        assert_eq!(sign_to_lord(Sign::Leo), Planet::Sun);
        assert_eq!(sign_to_lord(Sign::Scorpio), Planet::Mars);
        assert_eq!(sign_to_lord(Sign::Aquarius), Planet::Saturn);
        assert_eq!(sign_to_lord(Sign::Pisces), Planet::Jupiter);
    }

    #[test]
    fn test_sign_ruler_modern() {
        assert_eq!(sign_ruler(Sign::Scorpio, Rulership::Modern), Planet::Pluto);
        assert_eq!(sign_ruler(Sign::Aquarius, Rulership::Modern), Planet::Uranus);
        assert_eq!(sign_ruler(Sign::Pisces, Rulership::Modern), Planet::Neptune);
        assert_eq!(sign_ruler(Sign::Leo, Rulership::Modern), Planet::Sun);
    }

    #[test]
    fn test_rulership_parse() {
        assert_eq!("Modern".parse::<Rulership>().unwrap(), Rulership::Modern);
        assert!("hellenistic".parse::<Rulership>().is_err());
    }
}
