use seeshu_core::models::assessment::RiskLevel;
use seeshu_triage::CoughAnalyzer;
use seeshu_triage::cough::{CoughSample, FakeAudioRiskOracle};
use seeshu_triage::error::CoughAnalysisError;

fn sample() -> CoughSample {
    CoughSample {
        duration_secs: 10,
        byte_len: 48_000,
        mime_type: Some("audio/wav".to_string()),
    }
}

/// The oracle is random but bounded: only `low` or `moderate`, confidence
/// within [75, 95].
#[test]
fn oracle_output_stays_in_bounds() {
    let oracle = FakeAudioRiskOracle;

    for _ in 0..200 {
        let analysis = oracle.analyze(&sample()).unwrap();
        assert!(matches!(
            analysis.risk_level,
            RiskLevel::Low | RiskLevel::Moderate,
        ));
        assert!((75..=95).contains(&analysis.confidence));
    }
}

#[test]
fn oracle_pairs_copy_with_band() {
    let oracle = FakeAudioRiskOracle;

    for _ in 0..50 {
        let analysis = oracle.analyze(&sample()).unwrap();
        match analysis.risk_level {
            RiskLevel::Moderate => {
                assert!(analysis.recommendation.contains("within 24 hours"));
                assert_eq!(analysis.next_steps[0], "Schedule doctor consultation");
            }
            RiskLevel::Low => {
                assert!(analysis.recommendation.contains("Continue monitoring"));
                assert_eq!(analysis.next_steps[0], "Continue normal care");
            }
            RiskLevel::High => panic!("oracle must never emit high"),
        }
        assert_eq!(analysis.audio_features.len(), 4);
        assert_eq!(analysis.next_steps.len(), 3);
    }
}

#[test]
fn empty_sample_is_rejected() {
    let oracle = FakeAudioRiskOracle;
    let empty = CoughSample {
        duration_secs: 0,
        byte_len: 0,
        mime_type: None,
    };

    assert!(matches!(
        oracle.analyze(&empty),
        Err(CoughAnalysisError::EmptySample),
    ));
}
