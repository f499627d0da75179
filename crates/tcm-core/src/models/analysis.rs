use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::pattern::PatternMatch;

/// A stored pattern analysis for a visit. The core produces the matches and
/// the overall confidence; persisting this row is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternAnalysis {
    pub id: Uuid,
    pub visit_id: Uuid,
    pub patterns: Vec<PatternMatch>,
    /// 0.0–1.0 blend of section completeness and top pattern confidence.
    pub overall_confidence: f64,
    pub created_at: jiff::Timestamp,
}

impl PatternAnalysis {
    pub fn new(visit_id: Uuid, patterns: Vec<PatternMatch>, overall_confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            visit_id,
            patterns,
            overall_confidence,
            created_at: jiff::Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_analysis_gets_its_own_id() {
        let visit = Uuid::new_v4();
        let a = PatternAnalysis::new(visit, vec![], 0.0);
        let b = PatternAnalysis::new(visit, vec![], 0.0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.visit_id, b.visit_id);
        assert!(a.created_at <= b.created_at);
    }
}
