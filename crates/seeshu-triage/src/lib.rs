//! seeshu-triage
//!
//! Risk classification for newborn pneumonia. Pure rule tables — no model
//! weights are learned, no I/O happens here.
//!
//! Two entry points:
//!
//! - [`pneumonia::PneumoniaRiskScorer`] — the deterministic symptom/vitals
//!   scorer behind the assessment wizard.
//! - [`CoughAnalyzer`] — the seam for cough-audio classification. The only
//!   implementation today is [`cough::FakeAudioRiskOracle`], a fabricated
//!   placeholder; a real signal-processing model slots in behind the same
//!   trait without touching call sites.

pub mod cough;
pub mod error;
pub mod pneumonia;

use cough::{CoughAnalysis, CoughSample};
use error::CoughAnalysisError;

/// Trait implemented by cough-audio risk models.
pub trait CoughAnalyzer: Send + Sync {
    /// Unique identifier for this analyzer (e.g. `fake_audio_oracle`).
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Classify a recorded cough sample.
    fn analyze(&self, sample: &CoughSample) -> Result<CoughAnalysis, CoughAnalysisError>;
}
