use seeshu_core::models::assessment::{RiskLevel, Urgency};
use seeshu_core::models::observation::{ClinicalObservation, SymptomFlags};
use seeshu_triage::pneumonia::PneumoniaRiskScorer;

fn healthy() -> ClinicalObservation {
    ClinicalObservation {
        temperature_celsius: 37.0,
        breathing_rate_per_minute: 40,
        symptoms: SymptomFlags::default(),
    }
}

#[test]
fn healthy_baby_scores_zero_and_low() {
    let result = PneumoniaRiskScorer.score(&healthy());

    assert_eq!(result.risk_score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.urgency, Urgency::Monitor);
}

/// Fever flag plus temperature above 38.0 both contribute — the two fever
/// signals stack rather than deduplicate.
#[test]
fn fever_flag_and_high_temperature_stack() {
    let mut obs = healthy();
    obs.symptoms.fever = true;
    obs.temperature_celsius = 38.5;
    obs.breathing_rate_per_minute = 45;

    let result = PneumoniaRiskScorer.score(&obs);

    assert_eq!(result.risk_score, 4);
    assert_eq!(result.risk_level, RiskLevel::Moderate);
    assert_eq!(result.urgency, Urgency::Within24Hours);
}

/// Fast breathing counts once whether it comes from the flag, the measured
/// rate, or both.
#[test]
fn fast_breathing_counted_once() {
    let mut by_flag = healthy();
    by_flag.symptoms.fast_breathing = true;

    let mut by_rate = healthy();
    by_rate.breathing_rate_per_minute = 65;

    let mut by_both = healthy();
    by_both.symptoms.fast_breathing = true;
    by_both.breathing_rate_per_minute = 65;

    assert_eq!(PneumoniaRiskScorer.score(&by_flag).risk_score, 3);
    assert_eq!(PneumoniaRiskScorer.score(&by_rate).risk_score, 3);
    assert_eq!(PneumoniaRiskScorer.score(&by_both).risk_score, 3);
}

#[test]
fn severe_presentation_scores_high() {
    let mut obs = healthy();
    obs.symptoms.fever = true;
    obs.symptoms.chest_indrawing = true;
    obs.breathing_rate_per_minute = 65;
    obs.temperature_celsius = 39.2;

    let result = PneumoniaRiskScorer.score(&obs);

    // fever 2 + fast breathing (rate) 3 + chest indrawing 3 + temp 2
    assert_eq!(result.risk_score, 10);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.urgency, Urgency::Immediate);
}

#[test]
fn band_thresholds_are_exact() {
    // cough (1) + fever flag (2) = 3 — the bottom of moderate.
    let mut at_three = healthy();
    at_three.symptoms.cough = true;
    at_three.symptoms.fever = true;
    let result = PneumoniaRiskScorer.score(&at_three);
    assert_eq!(result.risk_score, 3);
    assert_eq!(result.risk_level, RiskLevel::Moderate);

    // fever (2) + feeding difficulty (2) + cough (1) = 5 — still moderate.
    let mut at_five = healthy();
    at_five.symptoms.fever = true;
    at_five.symptoms.feeding_difficulty = true;
    at_five.symptoms.cough = true;
    let result = PneumoniaRiskScorer.score(&at_five);
    assert_eq!(result.risk_score, 5);
    assert_eq!(result.risk_level, RiskLevel::Moderate);

    // fever (2) + feeding difficulty (2) + lethargy (2) = 6 — the bottom of high.
    let mut at_six = healthy();
    at_six.symptoms.fever = true;
    at_six.symptoms.feeding_difficulty = true;
    at_six.symptoms.lethargy = true;
    let result = PneumoniaRiskScorer.score(&at_six);
    assert_eq!(result.risk_score, 6);
    assert_eq!(result.risk_level, RiskLevel::High);

    // fever alone (2) stays low.
    let mut at_two = healthy();
    at_two.symptoms.fever = true;
    let result = PneumoniaRiskScorer.score(&at_two);
    assert_eq!(result.risk_score, 2);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

/// Flipping any single symptom flag from false to true never lowers the
/// score.
#[test]
fn single_flag_flips_never_decrease_score() {
    let base = healthy();
    let base_score = PneumoniaRiskScorer.score(&base).risk_score;

    let flips: [fn(&mut SymptomFlags); 7] = [
        |s| s.fever = true,
        |s| s.fast_breathing = true,
        |s| s.chest_indrawing = true,
        |s| s.feeding_difficulty = true,
        |s| s.lethargy = true,
        |s| s.cough = true,
        |s| s.unusual_crying = true,
    ];

    for flip in flips {
        let mut obs = base;
        flip(&mut obs.symptoms);
        let flipped_score = PneumoniaRiskScorer.score(&obs).risk_score;
        assert!(
            flipped_score >= base_score,
            "flipping a flag dropped the score from {base_score} to {flipped_score}",
        );
    }
}

#[test]
fn scoring_is_deterministic() {
    let mut obs = healthy();
    obs.symptoms.fever = true;
    obs.symptoms.lethargy = true;
    obs.temperature_celsius = 38.9;

    let first = PneumoniaRiskScorer.score(&obs);
    let second = PneumoniaRiskScorer.score(&obs);

    assert_eq!(first, second);
}

#[test]
fn urgency_always_tracks_risk_level() {
    // Sweep every symptom-flag combination at two temperature/rate settings
    // and check the band-to-urgency pairing never diverges.
    for bits in 0u32..128 {
        for (temp, rate) in [(37.0, 40), (39.5, 70)] {
            let obs = ClinicalObservation {
                temperature_celsius: temp,
                breathing_rate_per_minute: rate,
                symptoms: SymptomFlags {
                    fever: bits & 1 != 0,
                    fast_breathing: bits & 2 != 0,
                    chest_indrawing: bits & 4 != 0,
                    feeding_difficulty: bits & 8 != 0,
                    lethargy: bits & 16 != 0,
                    cough: bits & 32 != 0,
                    unusual_crying: bits & 64 != 0,
                },
            };
            let result = PneumoniaRiskScorer.score(&obs);
            assert_eq!(result.urgency, result.risk_level.urgency());
        }
    }
}

#[test]
fn key_findings_summarize_the_three_inputs() {
    let mut obs = healthy();
    obs.temperature_celsius = 38.5;
    obs.breathing_rate_per_minute = 45;
    obs.symptoms.fever = true;
    obs.symptoms.cough = true;

    let result = PneumoniaRiskScorer.score(&obs);

    assert_eq!(
        result.key_findings,
        vec![
            "Temperature: 38.5°C".to_string(),
            "Breathing rate: 45/min".to_string(),
            "Symptoms present: 2".to_string(),
        ],
    );
}

#[test]
fn confidence_is_constant() {
    let low = PneumoniaRiskScorer.score(&healthy());

    let mut severe = healthy();
    severe.symptoms.chest_indrawing = true;
    severe.symptoms.lethargy = true;
    severe.temperature_celsius = 40.0;
    let high = PneumoniaRiskScorer.score(&severe);

    assert_eq!(low.confidence, 85);
    assert_eq!(high.confidence, 85);
}

#[test]
fn recommendations_match_the_band() {
    let mut severe = healthy();
    severe.symptoms.chest_indrawing = true;
    severe.symptoms.fast_breathing = true;
    let result = PneumoniaRiskScorer.score(&severe);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.recommendations.len(), 4);
    assert!(result.recommendations[0].contains("Immediate"));

    let low = PneumoniaRiskScorer.score(&healthy());
    assert_eq!(low.recommendations.len(), 4);
    assert!(low.recommendations[0].contains("Continue normal care"));
}

/// Wire forms are a front-end contract: bands and urgencies must serialize
/// to the exact strings the pages switch on.
#[test]
fn wire_forms_are_stable() {
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    assert_eq!(
        serde_json::to_string(&Urgency::Within24Hours).unwrap(),
        "\"within24hours\"",
    );
    assert_eq!(
        serde_json::to_string(&Urgency::Immediate).unwrap(),
        "\"immediate\"",
    );
    assert_eq!(
        serde_json::to_string(&Urgency::Monitor).unwrap(),
        "\"monitor\"",
    );
}
