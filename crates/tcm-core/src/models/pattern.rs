use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One scored syndrome match for a visit. Constructed by the matcher,
/// never mutated afterwards; callers may persist it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternMatch {
    pub pattern_id: String,
    pub name: String,
    pub category: String,
    /// 0–100, one decimal place.
    pub confidence: f64,
    pub supporting_evidence: Vec<String>,
    /// Reserved for negative evidence; no current knowledge-base entry
    /// defines contradicting findings, so this stays empty.
    pub contradicting_evidence: Vec<String>,
    pub description: String,
    pub treatment_principle: String,
    pub common_points: Vec<String>,
}

/// Catalog listing entry, in knowledge-base definition order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternSummary {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
}
