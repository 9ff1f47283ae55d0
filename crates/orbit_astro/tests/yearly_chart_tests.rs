use chrono::{NaiveDate, NaiveTime};
use orbit_astro::western::{Planet, Rulership, Sign};
use orbit_astro::{AstroEngine, BirthInput, DeterministicAstroEngine, EngineSettings, YearlyMode};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn full_birth() -> BirthInput {
    BirthInput::date_only(d(1990, 3, 10))
        .with_time(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        .with_location(40.7128, -74.006, "America/New_York")
}

#[test]
fn test_full_profection_golden() {
    let engine = DeterministicAstroEngine::default();

    let cases = [
        (d(2024, 3, 9), 33, 10, Sign::Pisces, Planet::Jupiter),
        (d(2024, 3, 10), 34, 11, Sign::Aries, Planet::Mars),
        (d(2024, 6, 1), 34, 11, Sign::Aries, Planet::Mars),
        (d(1990, 3, 10), 0, 1, Sign::Gemini, Planet::Mercury),
    ];
    for (reference, age, house, sign, lord) in cases {
        let chart = engine.yearly_chart(&full_birth(), reference).unwrap();
        assert_eq!(chart.mode, YearlyMode::FullProfection);
        assert_eq!(chart.age, age, "{reference}");
        assert_eq!(chart.profected_house, house, "{reference}");
        assert_eq!(chart.house_sign, Some(sign), "{reference}");
        assert_eq!(chart.ruling_planet, Some(lord), "{reference}");
        assert!(chart.window.contains(reference));
    }
}

#[test]
fn test_light_year_omits_sign_and_lord() {
    let birth = BirthInput::date_only(d(1990, 3, 10));
    let chart = DeterministicAstroEngine::default()
        .yearly_chart(&birth, d(2024, 6, 1))
        .unwrap();

    assert_eq!(chart.mode, YearlyMode::LightYear);
    assert_eq!(chart.age, 34);
    assert_eq!(chart.profected_house, 11);
    assert_eq!(chart.house_topic, "Community, friendship, long-term goals");
    assert_eq!((chart.window.start, chart.window.end), (d(2024, 3, 10), d(2025, 3, 10)));
    assert!(chart.house_sign.is_none());
    assert!(chart.ruling_planet.is_none());
    assert!(chart.narrative.ruling_planet_note.is_none());
    assert_eq!(chart.narrative.disclaimers.len(), 1);
}

#[test]
fn test_modern_rulership_setting() {
    // age 33 lands on Pisces for this chart
    let settings = EngineSettings {
        rulership: Rulership::Modern,
        ..EngineSettings::default()
    };
    let chart = DeterministicAstroEngine::new(settings)
        .yearly_chart(&full_birth(), d(2024, 3, 9))
        .unwrap();
    assert_eq!(chart.house_sign, Some(Sign::Pisces));
    assert_eq!(chart.ruling_planet, Some(Planet::Neptune));
}

#[test]
fn test_leap_day_birthday_window() {
    let birth = BirthInput::date_only(d(2000, 2, 29));
    let engine = DeterministicAstroEngine::default();

    let chart = engine.yearly_chart(&birth, d(2023, 2, 28)).unwrap();
    assert_eq!(chart.age, 23);
    assert_eq!(chart.profected_house, 12);
    assert_eq!((chart.window.start, chart.window.end), (d(2023, 2, 28), d(2024, 2, 29)));

    let next_day = engine.yearly_chart(&birth, d(2023, 3, 1)).unwrap();
    assert_eq!(next_day.window, chart.window);
    assert_eq!((next_day.age, next_day.profected_house), (chart.age, chart.profected_house));

    let before = engine.yearly_chart(&birth, d(2023, 2, 27)).unwrap();
    assert_eq!(before.age, 22);
    assert_eq!(before.profected_house, 11);
    assert_eq!((before.window.start, before.window.end), (d(2022, 2, 28), d(2023, 2, 28)));
}

#[test]
fn test_age_and_house_constant_within_window() {
    let engine = DeterministicAstroEngine::default();
    for dob in [d(2000, 2, 29), d(1990, 3, 10), d(1985, 12, 31)] {
        let birth = BirthInput::date_only(dob);
        let start = d(2019, 1, 1);
        for offset in 0..(366 * 5) {
            let day = start + chrono::Duration::days(offset);
            let chart = engine.yearly_chart(&birth, day).unwrap();
            let at_start = engine.yearly_chart(&birth, chart.window.start).unwrap();
            assert_eq!(chart.age, at_start.age, "{dob} on {day}");
            assert_eq!(chart.profected_house, at_start.profected_house, "{dob} on {day}");
        }
    }
}

#[test]
fn test_twelve_year_cycle() {
    let birth = BirthInput::date_only(d(1980, 7, 4));
    let engine = DeterministicAstroEngine::default();
    for age in 0..48u32 {
        let reference = d(1980 + age as i32, 7, 4);
        let chart = engine.yearly_chart(&birth, reference).unwrap();
        assert_eq!(chart.age, age);
        assert_eq!(u32::from(chart.profected_house), age % 12 + 1);
    }
}
