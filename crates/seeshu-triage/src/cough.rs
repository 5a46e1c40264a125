use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use seeshu_core::models::assessment::RiskLevel;

use crate::CoughAnalyzer;
use crate::error::CoughAnalysisError;

/// Metadata for a recorded cough clip. The audio bytes themselves stay with
/// the uploader; classification here never inspects them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoughSample {
    pub duration_secs: u32,
    pub byte_len: u64,
    pub mime_type: Option<String>,
}

/// Result of a cough-audio classification.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoughAnalysis {
    pub risk_level: RiskLevel,
    pub confidence: u8,
    pub audio_features: Vec<String>,
    pub recommendation: String,
    pub next_steps: Vec<String>,
}

/// Fabricated cough-analysis oracle.
///
/// This is a placeholder, not a model: it flips a weighted coin for the risk
/// band (`moderate` with probability 0.4, otherwise `low` — it never emits
/// `high`), draws a confidence in [75, 95], and returns canned feature
/// strings. It exists so the consultation flow works end to end; a genuine
/// signal-processing classifier replaces it behind [`CoughAnalyzer`].
pub struct FakeAudioRiskOracle;

impl CoughAnalyzer for FakeAudioRiskOracle {
    fn id(&self) -> &str {
        "fake_audio_oracle"
    }

    fn name(&self) -> &str {
        "Fabricated cough oracle"
    }

    fn analyze(&self, sample: &CoughSample) -> Result<CoughAnalysis, CoughAnalysisError> {
        if sample.byte_len == 0 {
            return Err(CoughAnalysisError::EmptySample);
        }

        let mut rng = rand::thread_rng();
        let risk_level = if rng.gen_bool(0.4) {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        let confidence: u8 = rng.gen_range(75..=95);

        Ok(CoughAnalysis {
            risk_level,
            confidence,
            audio_features: vec![
                "Respiratory rate: 45 breaths/min".to_string(),
                "Wheeze detected: No".to_string(),
                "Crackling sounds: Mild".to_string(),
                "Overall pattern: Concerning".to_string(),
            ],
            recommendation: recommendation(risk_level).to_string(),
            next_steps: next_steps(risk_level)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }
}

fn recommendation(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => {
            "Immediate medical consultation recommended. Cough pattern suggests respiratory distress."
        }
        RiskLevel::Moderate => {
            "Medical consultation within 24 hours recommended. Monitor breathing closely."
        }
        RiskLevel::Low => {
            "Continue monitoring. Cough pattern appears normal but consult if symptoms worsen."
        }
    }
}

fn next_steps(level: RiskLevel) -> &'static [&'static str; 3] {
    match level {
        RiskLevel::High => &[
            "Seek immediate medical attention",
            "Monitor breathing rate closely",
            "Keep baby hydrated and comfortable",
        ],
        RiskLevel::Moderate => &[
            "Schedule doctor consultation",
            "Monitor for worsening symptoms",
            "Use our doctor connect feature",
        ],
        RiskLevel::Low => &[
            "Continue normal care",
            "Watch for any changes",
            "Contact doctor if concerned",
        ],
    }
}
