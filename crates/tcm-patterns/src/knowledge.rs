//! The pattern knowledge base: a static catalog of the most common
//! syndromes with weighted diagnostic findings, after Maciocia's
//! *Diagnosis in Chinese Medicine*.
//!
//! Loaded once, read-only afterwards; safe to share across threads.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A weighted diagnostic finding within a pattern definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KeyObservation {
    pub tag: String,
    /// Non-negative evidence weight, informally 0–1.
    pub weight: f64,
}

/// One syndrome definition in the catalog. Pure data, no behavior beyond
/// weight accounting.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Definition order is preserved; it drives the order of supporting
    /// evidence in match output. An empty list makes the pattern
    /// unmatchable by construction.
    pub key_observations: Vec<KeyObservation>,
    pub treatment_principle: String,
    pub common_points: Vec<String>,
}

impl PatternDefinition {
    pub fn total_weight(&self) -> f64 {
        self.key_observations.iter().map(|o| o.weight).sum()
    }
}

fn pattern(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    key_observations: &[(&str, f64)],
    treatment_principle: &str,
    common_points: &[&str],
) -> PatternDefinition {
    PatternDefinition {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        key_observations: key_observations
            .iter()
            .map(|(tag, weight)| KeyObservation {
                tag: tag.to_string(),
                weight: *weight,
            })
            .collect(),
        treatment_principle: treatment_principle.to_string(),
        common_points: common_points.iter().map(|p| p.to_string()).collect(),
    }
}

/// The full catalog, in definition order.
pub fn knowledge_base() -> &'static [PatternDefinition] {
    static CATALOG: LazyLock<Vec<PatternDefinition>> = LazyLock::new(|| {
        vec![
            pattern(
                "spleen_qi_deficiency",
                "Spleen-Qi Deficiency",
                "Deficiency/Spleen",
                "Chronic deficiency of Spleen-Qi leading to poor transformation and transportation",
                &[
                    ("tongue_pale", 0.7),
                    ("tongue_swollen", 0.6),
                    ("tongue_tooth_marked", 0.8),
                    ("coating_thin_white", 0.3),
                    ("complexion_sallow", 0.5),
                    ("shen_weak", 0.6),
                ],
                "Tonify Spleen-Qi",
                &["ST-36", "SP-6", "CV-12", "BL-20"],
            ),
            pattern(
                "kidney_yang_deficiency",
                "Kidney-Yang Deficiency",
                "Deficiency/Kidney",
                "Deficiency of Kidney-Yang leading to Cold and failure to warm the body",
                &[
                    ("tongue_pale", 0.8),
                    ("tongue_swollen", 0.7),
                    ("tongue_wet", 0.8),
                    ("coating_thin_white", 0.4),
                    ("complexion_pale", 0.6),
                    ("hands_cold", 0.7),
                    ("feet_cold", 0.9),
                    ("shen_weak", 0.5),
                ],
                "Warm and Tonify Kidney-Yang",
                &["GV-4", "CV-4", "BL-23", "KI-3", "KI-7"],
            ),
            pattern(
                "liver_qi_stagnation",
                "Liver-Qi Stagnation",
                "Excess/Liver",
                "Stagnation of Liver-Qi causing constraint and emotional symptoms",
                &[
                    ("tongue_red_sides", 0.7),
                    ("tongue_color_normal", 0.3),
                    ("complexion_greenish", 0.5),
                    ("movement_restless", 0.6),
                    ("shen_normal", 0.2),
                ],
                "Soothe Liver-Qi, Regulate Qi flow",
                &["LR-3", "LR-14", "GB-34", "PC-6"],
            ),
            pattern(
                "blood_deficiency",
                "Blood Deficiency",
                "Deficiency/Blood",
                "Deficiency of Blood leading to malnourishment",
                &[
                    ("tongue_pale", 0.8),
                    ("tongue_thin", 0.7),
                    ("complexion_pale_dull", 0.7),
                    ("nails_pale", 0.6),
                    ("lips_pale", 0.6),
                    ("shen_weak", 0.5),
                ],
                "Nourish Blood",
                &["SP-6", "ST-36", "BL-17", "BL-20"],
            ),
            pattern(
                "yin_deficiency_empty_heat",
                "Yin Deficiency with Empty Heat",
                "Deficiency/Yin",
                "Deficiency of Yin leading to relative excess of Yang manifesting as Empty Heat",
                &[
                    ("tongue_red", 0.9),
                    ("tongue_no_coating", 0.8),
                    ("tongue_dry", 0.7),
                    ("tongue_cracks", 0.6),
                    ("complexion_malar_flush", 0.8),
                    ("hands_hot_palms", 0.7),
                    ("feet_hot", 0.7),
                ],
                "Nourish Yin, Clear Empty Heat",
                &["KI-3", "KI-6", "SP-6", "LU-7", "HT-6"],
            ),
            pattern(
                "dampness",
                "Dampness",
                "Excess/Dampness",
                "Accumulation of Dampness obstructing Qi flow",
                &[
                    ("tongue_swollen", 0.7),
                    ("coating_thick", 0.8),
                    ("coating_greasy", 0.9),
                    ("coating_white", 0.5),
                    ("body_overweight", 0.5),
                    ("skin_puffy", 0.6),
                ],
                "Resolve Dampness, Strengthen Spleen",
                &["SP-6", "SP-9", "ST-40", "CV-12"],
            ),
            pattern(
                "damp_heat",
                "Damp-Heat",
                "Excess/Damp-Heat",
                "Combination of Dampness and Heat obstructing and inflaming",
                &[
                    ("tongue_red", 0.7),
                    ("coating_yellow", 0.8),
                    ("coating_thick", 0.7),
                    ("coating_greasy", 0.9),
                    ("complexion_yellow", 0.6),
                    ("skin_greasy", 0.5),
                ],
                "Clear Heat, Resolve Dampness",
                &["SP-6", "SP-9", "LI-11", "ST-44"],
            ),
            pattern(
                "liver_fire",
                "Liver-Fire",
                "Excess/Liver",
                "Excess Fire in the Liver rising upward",
                &[
                    ("tongue_red", 0.8),
                    ("tongue_red_sides", 0.9),
                    ("coating_yellow", 0.7),
                    ("complexion_red", 0.7),
                    ("eyes_red", 0.8),
                    ("movement_restless", 0.6),
                ],
                "Clear Liver-Fire, Drain Fire",
                &["LR-2", "LR-3", "GB-20", "LI-11"],
            ),
            pattern(
                "heart_blood_deficiency",
                "Heart-Blood Deficiency",
                "Deficiency/Heart",
                "Deficiency of Heart-Blood leading to failure to nourish the Mind",
                &[
                    ("tongue_pale", 0.8),
                    ("tongue_thin", 0.6),
                    ("complexion_pale", 0.6),
                    ("lips_pale", 0.7),
                    ("shen_weak", 0.7),
                ],
                "Nourish Heart-Blood, Calm Mind",
                &["HT-7", "SP-6", "ST-36", "BL-15", "BL-17"],
            ),
            pattern(
                "lung_qi_deficiency",
                "Lung-Qi Deficiency",
                "Deficiency/Lung",
                "Deficiency of Lung-Qi leading to failure to govern Qi and respiration",
                &[
                    ("tongue_pale", 0.7),
                    ("complexion_pale", 0.6),
                    ("voice_weak", 0.8),
                    ("chest_sunken", 0.6),
                    ("shen_weak", 0.6),
                ],
                "Tonify Lung-Qi",
                &["LU-9", "LU-7", "BL-13", "ST-36", "CV-17"],
            ),
            pattern(
                "kidney_yin_deficiency",
                "Kidney-Yin Deficiency",
                "Deficiency/Kidney",
                "Deficiency of Kidney-Yin leading to Empty Heat",
                &[
                    ("tongue_red", 0.8),
                    ("tongue_no_coating", 0.7),
                    ("tongue_dry", 0.6),
                    ("complexion_malar_flush", 0.7),
                    ("hands_hot_palms", 0.7),
                    ("feet_hot", 0.7),
                    ("back_pain", 0.5),
                ],
                "Nourish Kidney-Yin",
                &["KI-3", "KI-6", "KI-10", "SP-6", "BL-23"],
            ),
            pattern(
                "phlegm",
                "Phlegm",
                "Excess/Phlegm",
                "Accumulation of Phlegm obstructing channels",
                &[
                    ("tongue_swollen", 0.8),
                    ("coating_thick", 0.9),
                    ("coating_greasy", 0.9),
                    ("coating_sticky", 0.8),
                    ("body_overweight", 0.6),
                ],
                "Transform Phlegm, Resolve Dampness",
                &["ST-40", "SP-6", "SP-9", "CV-12"],
            ),
            pattern(
                "blood_stasis",
                "Blood Stasis",
                "Excess/Blood",
                "Stagnation of Blood in channels and organs",
                &[
                    ("tongue_purple", 0.9),
                    ("tongue_purple_spots", 0.8),
                    ("complexion_purple", 0.7),
                    ("lips_purple", 0.7),
                    ("nails_purple", 0.6),
                    ("veins_distended", 0.6),
                ],
                "Invigorate Blood, Remove Stasis",
                &["SP-10", "SP-6", "LR-3", "BL-17"],
            ),
            pattern(
                "liver_yang_rising",
                "Liver-Yang Rising",
                "Excess/Liver",
                "Liver-Yang rising upward, often on background of Liver-Yin deficiency",
                &[
                    ("tongue_red", 0.7),
                    ("tongue_red_sides", 0.8),
                    ("complexion_red", 0.7),
                    ("eyes_red", 0.6),
                    ("movement_restless", 0.6),
                ],
                "Subdue Liver-Yang, Nourish Liver-Yin",
                &["LR-3", "LR-2", "GB-20", "KI-3"],
            ),
            pattern(
                "stomach_heat",
                "Stomach-Heat",
                "Excess/Stomach",
                "Excess Heat in the Stomach",
                &[
                    ("tongue_red", 0.7),
                    ("tongue_red_center", 0.8),
                    ("coating_yellow", 0.8),
                    ("coating_thick", 0.6),
                    ("coating_dry", 0.6),
                ],
                "Clear Stomach-Heat",
                &["ST-44", "ST-45", "LI-11", "CV-12"],
            ),
            pattern(
                "heart_fire",
                "Heart-Fire",
                "Excess/Heart",
                "Excess Fire in the Heart blazing upward",
                &[
                    ("tongue_red", 0.8),
                    ("tongue_red_tip", 0.9),
                    ("coating_yellow", 0.6),
                    ("complexion_red", 0.6),
                    ("movement_restless", 0.7),
                ],
                "Clear Heart-Fire",
                &["HT-8", "HT-7", "PC-7", "SI-2"],
            ),
            pattern(
                "spleen_yang_deficiency",
                "Spleen-Yang Deficiency",
                "Deficiency/Spleen",
                "Deficiency of Spleen-Yang leading to Cold and failure to transform",
                &[
                    ("tongue_pale", 0.8),
                    ("tongue_swollen", 0.7),
                    ("tongue_wet", 0.7),
                    ("tongue_tooth_marked", 0.7),
                    ("complexion_pale", 0.6),
                    ("abdomen_cold", 0.6),
                ],
                "Warm and Tonify Spleen-Yang",
                &["ST-36", "SP-6", "CV-12", "BL-20", "CV-4"],
            ),
            pattern(
                "lung_yin_deficiency",
                "Lung-Yin Deficiency",
                "Deficiency/Lung",
                "Deficiency of Lung-Yin leading to Dryness and Empty Heat",
                &[
                    ("tongue_red", 0.7),
                    ("tongue_red_front", 0.8),
                    ("tongue_dry", 0.7),
                    ("coating_none", 0.6),
                    ("complexion_malar_flush", 0.5),
                ],
                "Nourish Lung-Yin",
                &["LU-9", "LU-7", "KI-6", "SP-6", "BL-13"],
            ),
            pattern(
                "qi_deficiency",
                "Qi Deficiency",
                "Deficiency/Qi",
                "General deficiency of Qi affecting multiple organs",
                &[
                    ("tongue_pale", 0.6),
                    ("complexion_pale", 0.6),
                    ("shen_weak", 0.8),
                    ("voice_weak", 0.7),
                    ("posture_stooped", 0.5),
                ],
                "Tonify Qi",
                &["ST-36", "SP-6", "LU-9", "CV-6"],
            ),
            pattern(
                "liver_blood_deficiency",
                "Liver-Blood Deficiency",
                "Deficiency/Liver",
                "Deficiency of Liver-Blood leading to failure to nourish",
                &[
                    ("tongue_pale", 0.7),
                    ("tongue_pale_sides", 0.8),
                    ("tongue_thin", 0.6),
                    ("complexion_pale", 0.6),
                    ("nails_pale", 0.7),
                    ("nails_brittle", 0.6),
                ],
                "Nourish Liver-Blood",
                &["LR-8", "SP-6", "ST-36", "BL-17", "BL-18"],
            ),
        ]
    });
    &CATALOG
}

/// Look up a pattern definition by id.
pub fn get_pattern(id: &str) -> Option<&'static PatternDefinition> {
    knowledge_base().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_twenty_patterns() {
        assert_eq!(knowledge_base().len(), 20);
    }

    #[test]
    fn every_pattern_is_matchable() {
        for p in knowledge_base() {
            assert!(
                !p.key_observations.is_empty(),
                "{} has no key observations",
                p.id
            );
            assert!(p.total_weight() > 0.0, "{} has zero total weight", p.id);
            for obs in &p.key_observations {
                assert!(obs.weight >= 0.0, "{} has a negative weight", p.id);
            }
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = knowledge_base().iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), knowledge_base().len());
    }

    #[test]
    fn lookup_by_id() {
        let def = get_pattern("spleen_qi_deficiency").unwrap();
        assert_eq!(def.name, "Spleen-Qi Deficiency");
        assert!(get_pattern("does_not_exist").is_none());
    }
}
