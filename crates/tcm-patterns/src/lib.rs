//! tcm-patterns
//!
//! The pattern-matching half of the decision support core: a static
//! knowledge base of syndrome definitions, the observation normalizer, and
//! the weighted-evidence matcher that ranks syndromes for a visit.
//! Pure computation — no I/O, no persistence.

pub mod error;
pub mod knowledge;
pub mod normalize;

use tracing::debug;

use tcm_core::models::{InterrogationData, ObservationData, PatternMatch, PatternSummary};

use knowledge::{knowledge_base, PatternDefinition};
use normalize::FindingSet;

/// Weighted-evidence pattern matcher over the static knowledge base.
///
/// Holds no per-call state; a single instance is re-entrant and may be
/// shared freely across concurrent analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Score every catalog pattern against the visit's observations and
    /// return matches ranked by confidence (descending; ties keep catalog
    /// order). Patterns with no matching evidence are dropped.
    pub fn analyze(&self, observations: &ObservationData) -> Vec<PatternMatch> {
        let findings = FindingSet::from_observations(observations);
        debug!(findings = findings.len(), "normalized observations");

        let mut matches: Vec<PatternMatch> = knowledge_base()
            .iter()
            .filter_map(|pattern| score_pattern(pattern, &findings))
            .collect();

        // Stable sort keeps knowledge-base order for equal confidences.
        matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        debug!(matched = matches.len(), "ranked pattern matches");
        matches
    }

    /// Full catalog listing, in definition order.
    pub fn all_patterns(&self) -> Vec<PatternSummary> {
        knowledge_base()
            .iter()
            .map(|p| PatternSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                description: p.description.clone(),
            })
            .collect()
    }

    /// Single pattern lookup; `None` when the id is not in the catalog.
    pub fn pattern_details(&self, pattern_id: &str) -> Option<&'static PatternDefinition> {
        knowledge::get_pattern(pattern_id)
    }

    /// Overall confidence for a completed analysis: completed-section ratio
    /// weighted at 0.4 plus the top match's confidence weighted at 0.6.
    /// Returns 0.0 when nothing matched. Scale 0.0–1.0.
    pub fn overall_confidence(
        &self,
        observations: &ObservationData,
        interrogations: &InterrogationData,
        matches: &[PatternMatch],
    ) -> f64 {
        let Some(top) = matches.first() else {
            return 0.0;
        };

        let total_sections =
            observations.present_sections() + interrogations.present_sections();
        let completed_sections =
            observations.completed_sections() + interrogations.completed_sections();
        let completeness = completed_sections as f64 / total_sections.max(1) as f64;

        completeness * 0.4 + (top.confidence / 100.0) * 0.6
    }
}

fn score_pattern(pattern: &PatternDefinition, findings: &FindingSet) -> Option<PatternMatch> {
    let total_weight = pattern.total_weight();
    if total_weight <= 0.0 {
        // Zero-weight patterns are unmatchable; guard the division.
        return None;
    }

    let mut matched_weight = 0.0;
    let mut supporting = Vec::new();
    for obs in &pattern.key_observations {
        if findings.contains(&obs.tag) {
            matched_weight += obs.weight;
            supporting.push(format_evidence(&obs.tag));
        }
    }

    let confidence = matched_weight / total_weight;
    if confidence <= 0.0 {
        return None;
    }

    Some(PatternMatch {
        pattern_id: pattern.id.clone(),
        name: pattern.name.clone(),
        category: pattern.category.clone(),
        confidence: round1(confidence * 100.0),
        supporting_evidence: supporting,
        contradicting_evidence: Vec::new(),
        description: pattern.description.clone(),
        treatment_principle: pattern.treatment_principle.clone(),
        common_points: pattern.common_points.clone(),
    })
}

/// `tongue_tooth_marked` -> `Tongue Tooth Marked`.
fn format_evidence(tag: &str) -> String {
    tag.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
