//! Seeded placement synthesis.
//!
//! Positions here are not astronomical. Each body's seed is the birth day
//! number plus the birth minute plus a fixed per-body stride; sign, degree and
//! house are all taken from that seed. Only the Sun's sign is real: it is
//! overwritten with the tropical sun sign for the date.
//!
//! The constants below are part of the reproducibility contract. Changing any
//! of them changes every stored chart.

use crate::calendar::{minute_component, ordinal_day, round2};
use crate::ephemeris::types::PlanetaryPlacement;
use crate::western::{deterministic_sign, sun_sign_for_date, Sign, PLANETS};
use chrono::{NaiveDate, NaiveTime};

/// Seed distance between consecutive bodies.
pub const PLANET_STRIDE: i64 = 37;
/// Seed modulus mapped onto the 30 degrees of a sign.
pub const DEGREE_MODULUS: i64 = 3000;
/// The ascendant moves three times faster than the minute component.
pub const ASCENDANT_MINUTE_FACTOR: i64 = 3;

fn planet_seed(dob: NaiveDate, minutes: i64, index: usize) -> i64 {
    ordinal_day(dob) + minutes + index as i64 * PLANET_STRIDE
}

fn seed_degree(seed: i64) -> f64 {
    round2(seed.rem_euclid(DEGREE_MODULUS) as f64 / DEGREE_MODULUS as f64 * 30.0)
}

fn seed_house(seed: i64) -> u8 {
    seed.rem_euclid(12) as u8 + 1
}

/// All twelve bodies in fixed order, Sun first.
pub fn deterministic_planetary_positions(
    dob: NaiveDate,
    birth_time: Option<NaiveTime>,
    include_houses: bool,
) -> Vec<PlanetaryPlacement> {
    let minutes = minute_component(birth_time);

    let mut positions: Vec<PlanetaryPlacement> = PLANETS
        .iter()
        .enumerate()
        .map(|(idx, planet)| {
            let seed = planet_seed(dob, minutes, idx);
            PlanetaryPlacement {
                planet: *planet,
                sign: deterministic_sign(seed),
                degree: seed_degree(seed),
                house: include_houses.then(|| seed_house(seed)),
            }
        })
        .collect();

    if let Some(sun) = positions.first_mut() {
        sun.sign = sun_sign_for_date(dob);
    }
    positions
}

pub fn approximate_ascendant(dob: NaiveDate, birth_time: Option<NaiveTime>) -> Sign {
    deterministic_sign(ordinal_day(dob) + minute_component(birth_time) * ASCENDANT_MINUTE_FACTOR)
}
