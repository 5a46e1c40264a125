use seeshu_core::models::assessment::RiskLevel;
use seeshu_relay::context::{AssessmentContext, build_context_block};

#[test]
fn empty_assessments_returns_empty_string() {
    assert_eq!(build_context_block(&[]), "");
}

#[test]
fn single_assessment_produces_valid_block() {
    let entries = vec![AssessmentContext {
        patient_name: "Aarav Kumar".to_string(),
        risk_level: RiskLevel::Moderate,
        risk_score: 4,
        summary: "Fever and mild cough, breathing rate 45/min.".to_string(),
    }];

    let block = build_context_block(&entries);
    assert!(block.starts_with("<assessment_context>"));
    assert!(block.ends_with("</assessment_context>"));
    assert!(block.contains("<assessment patient=\"Aarav Kumar\" risk=\"moderate\" score=\"4\">"));
    assert!(block.contains("Fever and mild cough, breathing rate 45/min."));
}

#[test]
fn multiple_assessments_all_included() {
    let entries = vec![
        AssessmentContext {
            patient_name: "Aarav Kumar".to_string(),
            risk_level: RiskLevel::High,
            risk_score: 10,
            summary: "Chest indrawing observed.\n".to_string(),
        },
        AssessmentContext {
            patient_name: "Meera Devi".to_string(),
            risk_level: RiskLevel::Low,
            risk_score: 0,
            summary: "No symptoms present.".to_string(),
        },
    ];

    let block = build_context_block(&entries);
    assert!(block.contains("risk=\"high\""));
    assert!(block.contains("risk=\"low\""));
    assert!(block.contains("Chest indrawing observed."));
    assert!(block.contains("No symptoms present."));
}
