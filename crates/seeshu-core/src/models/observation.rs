use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Temperature range a thermometer reading is expected to fall in (°C).
pub const TEMPERATURE_RANGE: (f64, f64) = (35.0, 42.0);

/// Breathing rate range the counter UI allows (breaths per minute).
pub const BREATHING_RATE_RANGE: (u32, u32) = (20, 100);

/// The symptom checklist an ASHA worker or guardian fills in during an
/// assessment. Each flag is an independent observation; none are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomFlags {
    pub fever: bool,
    pub fast_breathing: bool,
    pub chest_indrawing: bool,
    pub feeding_difficulty: bool,
    pub lethargy: bool,
    pub cough: bool,
    pub unusual_crying: bool,
}

impl SymptomFlags {
    /// Number of flags set to true.
    pub fn count_present(&self) -> u32 {
        [
            self.fever,
            self.fast_breathing,
            self.chest_indrawing,
            self.feeding_difficulty,
            self.lethargy,
            self.cough,
            self.unusual_crying,
        ]
        .into_iter()
        .filter(|&s| s)
        .count() as u32
    }
}

/// A single set of clinical inputs for one scoring call. Immutable once
/// constructed; nothing about it persists beyond the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClinicalObservation {
    pub temperature_celsius: f64,
    pub breathing_rate_per_minute: u32,
    pub symptoms: SymptomFlags,
}

impl ClinicalObservation {
    /// Check the vitals against the documented input ranges.
    ///
    /// The scorer itself accepts any values and never fails; this guard is
    /// for callers that want to reject malformed upstream input before
    /// scoring.
    pub fn validate(&self) -> Result<(), CoreError> {
        let (t_min, t_max) = TEMPERATURE_RANGE;
        if !self.temperature_celsius.is_finite()
            || self.temperature_celsius < t_min
            || self.temperature_celsius > t_max
        {
            return Err(CoreError::InvalidObservation(format!(
                "temperature {} °C is outside [{t_min}, {t_max}]",
                self.temperature_celsius,
            )));
        }

        let (r_min, r_max) = BREATHING_RATE_RANGE;
        if self.breathing_rate_per_minute < r_min || self.breathing_rate_per_minute > r_max {
            return Err(CoreError::InvalidObservation(format!(
                "breathing rate {}/min is outside [{r_min}, {r_max}]",
                self.breathing_rate_per_minute,
            )));
        }

        Ok(())
    }
}
