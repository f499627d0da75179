//! Converts heterogeneous raw observation records into a flat set of
//! boolean finding tags (`tongue_pale`, `hands_cold`, ...) that the
//! weighted matcher scores against.

use std::collections::BTreeSet;

use tcm_core::fields::{is_present, text};
use tcm_core::models::ObservationData;

/// An unordered set of finding tags derived from one visit's observations.
/// Built fresh per analysis call; never persisted by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingSet {
    tags: BTreeSet<String>,
}

impl FindingSet {
    /// Extract finding tags from every known observation section. Total and
    /// side-effect-free: missing sections and unrecognized values simply
    /// contribute no tags.
    pub fn from_observations(observations: &ObservationData) -> Self {
        let mut set = Self::default();

        let shen = observations.shen();
        match text(&shen.overall) {
            "weak" => set.insert("shen_weak"),
            "strong" => set.insert("shen_strong"),
            _ => {}
        }

        let tongue = observations.tongue();
        if is_present(&tongue.body_color) {
            set.insert(&format!("tongue_{}", text(&tongue.body_color)));
        }
        if is_present(&tongue.body_shape) {
            set.insert(&format!("tongue_{}", text(&tongue.body_shape)));
        }
        if tongue.tooth_marked {
            set.insert("tongue_tooth_marked");
        }
        if tongue.cracks {
            set.insert("tongue_cracks");
        }
        if tongue.red_points {
            set.insert("tongue_red_points");
        }
        if tongue.purple_spots {
            set.insert("tongue_purple_spots");
        }
        if is_present(&tongue.moisture) {
            set.insert(&format!("tongue_{}", text(&tongue.moisture)));
        }
        if is_present(&tongue.coating_color) {
            set.insert(&format!("coating_{}", text(&tongue.coating_color)));
        }
        if is_present(&tongue.coating_thickness) {
            set.insert(&format!("coating_{}", text(&tongue.coating_thickness)));
        }
        if is_present(&tongue.coating_quality) {
            set.insert(&format!("coating_{}", text(&tongue.coating_quality)));
        }
        if tongue.red_sides {
            set.insert("tongue_red_sides");
        }
        if tongue.red_tip {
            set.insert("tongue_red_tip");
        }
        if tongue.red_center {
            set.insert("tongue_red_center");
        }

        let complexion = observations.complexion();
        if is_present(&complexion.primary_color) {
            if is_present(&complexion.shade) {
                set.insert(&format!(
                    "complexion_{}_{}",
                    text(&complexion.primary_color),
                    text(&complexion.shade)
                ));
            } else {
                set.insert(&format!("complexion_{}", text(&complexion.primary_color)));
            }
        }

        match text(&observations.hands().temperature) {
            "cold" => set.insert("hands_cold"),
            "hot_palms" => set.insert("hands_hot_palms"),
            _ => {}
        }

        match text(&observations.feet().temperature) {
            "cold" => set.insert("feet_cold"),
            "hot" => set.insert("feet_hot"),
            _ => {}
        }

        if observations.eyes().sclera_red {
            set.insert("eyes_red");
        }

        let nails = observations.nails();
        if is_present(&nails.color) {
            set.insert(&format!("nails_{}", text(&nails.color)));
        }
        if nails.brittle {
            set.insert("nails_brittle");
        }

        let lips = observations.lips();
        if is_present(&lips.color) {
            set.insert(&format!("lips_{}", text(&lips.color)));
        }

        if observations.movement().restless {
            set.insert("movement_restless");
        }
        if observations.posture().stooped {
            set.insert("posture_stooped");
        }
        if observations.voice().weak {
            set.insert("voice_weak");
        }
        if observations.chest().sunken {
            set.insert("chest_sunken");
        }
        if observations.body_type().overweight {
            set.insert("body_overweight");
        }

        let skin = observations.skin();
        if skin.puffy {
            set.insert("skin_puffy");
        }
        if skin.greasy {
            set.insert("skin_greasy");
        }

        if observations.veins().distended {
            set.insert("veins_distended");
        }

        set
    }

    pub fn insert(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}
