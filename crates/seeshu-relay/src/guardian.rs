//! The offline "Guardian" responder.
//!
//! A keyword-bucket lookup over the incoming message, checked in a fixed
//! order (first matching bucket wins). This is the reply source the chat
//! widget uses when the upstream relay is unreachable, and it is fully
//! deterministic.

const FEVER_REPLY: &str = "Fever in newborns can be serious. Check if temperature is above 38°C (100.4°F). Look for fast breathing, poor feeding, or lethargy. Would you like to start a detailed assessment?";

const BREATHING_REPLY: &str = "Fast breathing in newborns (>60 breaths/minute) can indicate pneumonia. I can help you record a cough sample for AI analysis. Would you like to proceed?";

const EMERGENCY_REPLY: &str = "If this is an emergency, please call 108 immediately or use our SOS feature. For immediate medical advice, I can connect you with an available doctor.";

const ASSESSMENT_REPLY: &str = "I can help you start a comprehensive assessment. This will check symptoms, vital signs, and risk factors. Would you like to begin the assessment now?";

const DOCTOR_REPLY: &str = "I can connect you with available pediatricians. Would you like to see available doctors or schedule a consultation?";

const SYMPTOM_REPLY: &str = "Key pneumonia symptoms in newborns: fast breathing (>60/min), fever (>38°C), chest indrawing, poor feeding, lethargy, persistent cough, unusual crying. Any of these present?";

const HELP_REPLY: &str = "I'm Guardian, your pneumonia care assistant. I can help with: symptom assessment, emergency guidance, doctor connections, and educational information. What do you need help with?";

const DEFAULT_REPLY: &str = "I understand your concern about newborn health. I can help you with pneumonia symptoms, start an assessment, or connect you with a doctor. What would you like to do?";

/// Keyword buckets in match order. Earlier buckets shadow later ones, so
/// "cough" lands on the breathing reply, not the symptom guide.
const BUCKETS: [(&[&str], &str); 7] = [
    (&["fever", "temperature", "hot"], FEVER_REPLY),
    (&["breathing", "cough", "respiratory"], BREATHING_REPLY),
    (&["emergency", "urgent", "critical"], EMERGENCY_REPLY),
    (&["assessment", "test", "check"], ASSESSMENT_REPLY),
    (&["doctor", "consult", "medical"], DOCTOR_REPLY),
    (&["symptom", "sign"], SYMPTOM_REPLY),
    (&["help", "what", "how"], HELP_REPLY),
];

/// Pick the canned reply for a message. Case-insensitive substring match;
/// always returns something.
pub fn respond(message: &str) -> &'static str {
    let lowered = message.to_lowercase();

    for (keywords, reply) in BUCKETS {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return reply;
        }
    }

    DEFAULT_REPLY
}
