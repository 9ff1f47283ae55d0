use chrono::{NaiveDate, NaiveTime};
use orbit_astro::synastry::{PairingMode, ScoreLabel};
use orbit_astro::western::Sign;
use orbit_astro::{AstroEngine, BirthInput, DeterministicAstroEngine, EngineSettings, PartnerProfile, UserProfile};

const KEYS: [&str; 6] = ["emotional", "communication", "sexual", "stability", "growth", "power"];

fn full(y: i32, m: u32, day: u32) -> BirthInput {
    BirthInput::date_only(NaiveDate::from_ymd_opt(y, m, day).unwrap())
        .with_time(NaiveTime::from_hms_opt(7, 20, 0).unwrap())
        .with_location(48.8566, 2.3522, "Europe/Paris")
}

fn user() -> UserProfile {
    UserProfile::new("Ada", full(1990, 3, 10))
}

#[test]
fn test_full_synastry() {
    let partner = PartnerProfile::named("Sam").with_birth(full(1988, 8, 1));
    let reading = DeterministicAstroEngine::default().between_us(&user(), Some(&partner), None);

    assert_eq!(reading.mode, PairingMode::FullSynastry);
    assert_eq!(reading.partner_name, "Sam");
    assert_eq!(reading.partner_sign, Some(Sign::Leo));
    let keys: Vec<&str> = reading.dimensions.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, KEYS);
    assert_eq!(reading.dimensions[0].score_label, ScoreLabel::Magnetic);
    assert_eq!(reading.dimensions[1].score_label, ScoreLabel::StrongFlow);
    assert_eq!(reading.dimensions[0].basis.as_deref(), Some("Pisces x Leo pattern"));
    assert!(reading.narrative.disclaimers.is_empty());
}

#[test]
fn test_partial_and_sign_pairing() {
    let engine = DeterministicAstroEngine::default();
    let dated = PartnerProfile::named("Jo").with_birth(BirthInput::date_only(NaiveDate::from_ymd_opt(1992, 1, 5).unwrap()));
    let partial = engine.between_us(&user(), Some(&dated), None);
    assert_eq!(partial.mode, PairingMode::PartialSynastry);
    assert_eq!(partial.partner_sign, Some(Sign::Capricorn));
    assert_eq!(partial.dimensions[0].score_label, ScoreLabel::StrongFlow);
    let keys: Vec<&str> = partial.dimensions.iter().map(|dim| dim.key.as_str()).collect();
    assert_eq!(keys, KEYS);

    let signed = PartnerProfile::named("Jo").with_sign(Sign::Aries);
    let pairing = engine.between_us(&user(), Some(&signed), Some("ignored"));
    assert_eq!(pairing.mode, PairingMode::SunSignPairing);
    assert_eq!(pairing.partner_name, "Jo");
    assert_eq!(pairing.dimensions[3].basis.as_deref(), Some("Pisces x Aries pattern"));
    assert_eq!(pairing.narrative.mode_label, "Sun Sign Pairing");
    let keys: Vec<&str> = pairing.dimensions.iter().map(|dim| dim.key.as_str()).collect();
    assert_eq!(keys, KEYS);
}

#[test]
fn test_name_only_reflection() {
    let engine = DeterministicAstroEngine::default();
    let reading = engine.between_us(&user(), None, Some("Alexandra"));

    assert_eq!(reading.mode, PairingMode::NameOnlyReflection);
    assert_eq!(reading.partner_name, "Alexandra");
    assert!(reading.partner_sign.is_none());
    assert_eq!(reading.dimensions.len(), 6);
    assert!(reading.dimensions.iter().all(|d| d.score_label == ScoreLabel::Reflect));
    assert!(reading.dimensions.iter().all(|d| d.basis.is_none()));
    assert_eq!(reading.narrative.disclaimers.len(), 1);

    let json = serde_json::to_value(&reading).unwrap();
    assert_eq!(json["dimensions"][5]["score_label"], "reflect");
    assert_eq!(json["mode"], "name_only_reflection");
}

#[test]
fn test_reflection_name_fallbacks() {
    let engine = DeterministicAstroEngine::default();
    let profile_only = PartnerProfile::named("Robin");
    assert_eq!(engine.between_us(&user(), Some(&profile_only), None).partner_name, "Robin");
    assert_eq!(engine.between_us(&user(), None, None).partner_name, "Partner");
    assert_eq!(engine.between_us(&user(), None, Some("  ")).partner_name, "Partner");

    let custom = DeterministicAstroEngine::new(EngineSettings {
        default_partner_name: "Them".to_string(),
        ..EngineSettings::default()
    });
    let reading = custom.between_us(&user(), None, None);
    assert_eq!(reading.partner_name, "Them");
    assert_eq!(reading.narrative.headline, "Ada and Them: compatibility across six dimensions.");
}

#[test]
fn test_scores_depend_only_on_name_and_mode() {
    let engine = DeterministicAstroEngine::default();
    let a = PartnerProfile::named("Kim").with_birth(full(1970, 1, 1));
    let b = PartnerProfile::named("Lee").with_birth(full(2001, 12, 31));
    let left: Vec<ScoreLabel> = engine.between_us(&user(), Some(&a), None).dimensions.iter().map(|d| d.score_label).collect();
    let right: Vec<ScoreLabel> = engine.between_us(&user(), Some(&b), None).dimensions.iter().map(|d| d.score_label).collect();
    assert_eq!(left, right);
}
