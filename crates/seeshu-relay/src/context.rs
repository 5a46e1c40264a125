//! Assessment-context builder for chat conversations.
//!
//! Assembles recent assessment summaries into a structured block that can be
//! prepended to the system prompt, so the upstream model answers with the
//! baby's latest triage results in view.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use seeshu_core::models::assessment::RiskLevel;

/// One recent assessment, as the chat widget summarizes it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentContext {
    pub patient_name: String,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub summary: String,
}

/// Build a structured context block from assessment summaries.
///
/// Returns an XML-style block to prepend to the system prompt. An empty
/// slice returns an empty string (no context to inject).
pub fn build_context_block(assessments: &[AssessmentContext]) -> String {
    if assessments.is_empty() {
        return String::new();
    }

    let mut block = String::from("<assessment_context>\n");

    for entry in assessments {
        block.push_str(&format!(
            "<assessment patient=\"{}\" risk=\"{}\" score=\"{}\">\n",
            entry.patient_name,
            entry.risk_level.as_str(),
            entry.risk_score,
        ));
        block.push_str(&entry.summary);
        if !entry.summary.ends_with('\n') {
            block.push('\n');
        }
        block.push_str("</assessment>\n");
    }

    block.push_str("</assessment_context>");
    block
}
