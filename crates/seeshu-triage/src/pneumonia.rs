use seeshu_core::models::assessment::{RiskAssessment, RiskLevel};
use seeshu_core::models::observation::ClinicalObservation;

/// Weighted contributions per finding. Fast breathing counts once whether it
/// comes from the flag, the measured rate, or both. The fever flag and the
/// measured temperature contribute independently and stack.
const FEVER_WEIGHT: u32 = 2;
const FAST_BREATHING_WEIGHT: u32 = 3;
const CHEST_INDRAWING_WEIGHT: u32 = 3;
const FEEDING_DIFFICULTY_WEIGHT: u32 = 2;
const LETHARGY_WEIGHT: u32 = 2;
const COUGH_WEIGHT: u32 = 1;
const HIGH_TEMPERATURE_WEIGHT: u32 = 2;

/// Breaths per minute above which breathing counts as fast.
const FAST_BREATHING_CUTOFF: u32 = 60;

/// Degrees Celsius above which temperature contributes on its own.
const HIGH_TEMPERATURE_CUTOFF: f64 = 38.0;

/// Score at or above which the band is `high`; `moderate` starts at the
/// lower threshold, everything below is `low`.
const HIGH_THRESHOLD: u32 = 6;
const MODERATE_THRESHOLD: u32 = 3;

/// Reported confidence is a fixed constant, not derived from the inputs.
const CONFIDENCE: u8 = 85;

const HIGH_RECOMMENDATIONS: [&str; 4] = [
    "Immediate medical attention required",
    "Visit nearest PHC or hospital immediately",
    "Call emergency services if breathing difficulty worsens",
    "Do not delay seeking professional care",
];

const MODERATE_RECOMMENDATIONS: [&str; 4] = [
    "Consult with a healthcare provider within 24 hours",
    "Monitor breathing rate closely",
    "Ensure proper feeding and hydration",
    "Use our doctor consultation feature",
];

const LOW_RECOMMENDATIONS: [&str; 4] = [
    "Continue normal care and monitoring",
    "Watch for any worsening symptoms",
    "Maintain proper hygiene and feeding",
    "Schedule routine check-up as planned",
];

/// Rule-based pneumonia risk scorer.
///
/// A total function over its input domain: every observation produces a
/// classification, out-of-range vitals simply fail to cross the relevant
/// cutoffs. Callers that want range checking run
/// [`ClinicalObservation::validate`] first.
pub struct PneumoniaRiskScorer;

impl PneumoniaRiskScorer {
    pub fn id(&self) -> &str {
        "pneumonia_rules_v1"
    }

    pub fn name(&self) -> &str {
        "Newborn pneumonia risk rules"
    }

    /// Score one observation. Deterministic and side-effect free; identical
    /// input yields identical output.
    pub fn score(&self, obs: &ClinicalObservation) -> RiskAssessment {
        let mut risk_score = 0;

        if obs.symptoms.fever {
            risk_score += FEVER_WEIGHT;
        }
        if obs.symptoms.fast_breathing || obs.breathing_rate_per_minute > FAST_BREATHING_CUTOFF {
            risk_score += FAST_BREATHING_WEIGHT;
        }
        if obs.symptoms.chest_indrawing {
            risk_score += CHEST_INDRAWING_WEIGHT;
        }
        if obs.symptoms.feeding_difficulty {
            risk_score += FEEDING_DIFFICULTY_WEIGHT;
        }
        if obs.symptoms.lethargy {
            risk_score += LETHARGY_WEIGHT;
        }
        if obs.symptoms.cough {
            risk_score += COUGH_WEIGHT;
        }
        // unusual_crying is recorded on the checklist but carries no weight
        // in the current rule set.
        if obs.temperature_celsius > HIGH_TEMPERATURE_CUTOFF {
            risk_score += HIGH_TEMPERATURE_WEIGHT;
        }

        let risk_level = classify(risk_score);

        RiskAssessment {
            risk_score,
            risk_level,
            confidence: CONFIDENCE,
            key_findings: vec![
                format!("Temperature: {}°C", obs.temperature_celsius),
                format!("Breathing rate: {}/min", obs.breathing_rate_per_minute),
                format!("Symptoms present: {}", obs.symptoms.count_present()),
            ],
            recommendations: recommendations(risk_level),
            urgency: risk_level.urgency(),
            explanation: format!(
                "Assessment shows {} risk level based on symptoms and vital signs.",
                risk_level.as_str(),
            ),
        }
    }
}

fn classify(risk_score: u32) -> RiskLevel {
    if risk_score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if risk_score >= MODERATE_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

/// The fixed recommendation list for a band. Content is presentation copy;
/// the tier-to-timeframe pairing is the contract.
pub fn recommendations(level: RiskLevel) -> Vec<String> {
    let list = match level {
        RiskLevel::High => &HIGH_RECOMMENDATIONS,
        RiskLevel::Moderate => &MODERATE_RECOMMENDATIONS,
        RiskLevel::Low => &LOW_RECOMMENDATIONS,
    };
    list.iter().map(|s| s.to_string()).collect()
}
