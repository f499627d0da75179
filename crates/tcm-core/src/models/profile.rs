use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::chief_complaint::ChiefComplaint;

/// Interior/Exterior axis of the Eight Principles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InteriorExterior {
    Interior,
    Exterior,
    Both,
}

impl fmt::Display for InteriorExterior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
            Self::Both => "both",
        })
    }
}

/// Hot/Cold axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HotCold {
    Hot,
    Cold,
    Mixed,
    Neutral,
}

impl fmt::Display for HotCold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Mixed => "mixed",
            Self::Neutral => "neutral",
        })
    }
}

/// Excess/Deficiency axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExcessDeficiency {
    Excess,
    Deficiency,
    Mixed,
}

impl fmt::Display for ExcessDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Excess => "excess",
            Self::Deficiency => "deficiency",
            Self::Mixed => "mixed",
        })
    }
}

/// Yin/Yang summary, derived purely from the other three axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum YinYang {
    Yin,
    Yang,
    Balanced,
}

impl fmt::Display for YinYang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yin => "yin",
            Self::Yang => "yang",
            Self::Balanced => "balanced",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QiStatus {
    Deficient,
    Stagnant,
    Normal,
}

impl fmt::Display for QiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Stagnant => "stagnant",
            Self::Normal => "normal",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BloodStatus {
    Deficient,
    Stagnant,
    Heat,
    Normal,
}

impl fmt::Display for BloodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Stagnant => "stagnant",
            Self::Heat => "heat",
            Self::Normal => "normal",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FluidStatus {
    Deficient,
    Excess,
    Normal,
}

impl fmt::Display for FluidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deficient => "deficient",
            Self::Excess => "excess",
            Self::Normal => "normal",
        })
    }
}

/// External or internal causative influence implicated in the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PathogenicFactor {
    Dampness,
    Phlegm,
    Heat,
    Fire,
    Cold,
    Dryness,
    Wind,
}

impl fmt::Display for PathogenicFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dampness => "dampness",
            Self::Phlegm => "phlegm",
            Self::Heat => "heat",
            Self::Fire => "fire",
            Self::Cold => "cold",
            Self::Dryness => "dryness",
            Self::Wind => "wind",
        })
    }
}

/// TCM organ systems (organ theory, not Western anatomy). Variants are
/// declared alphabetically so the derived `Ord` matches the alphabetical
/// ordering the profile reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Organ {
    Heart,
    Kidney,
    Liver,
    Lung,
    Spleen,
    Stomach,
}

impl fmt::Display for Organ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heart => "Heart",
            Self::Kidney => "Kidney",
            Self::Liver => "Liver",
            Self::Lung => "Lung",
            Self::Spleen => "Spleen",
            Self::Stomach => "Stomach",
        })
    }
}

/// The patient's TCM characteristic profile for one visit: Eight Principles
/// classification, organ involvement, pathogenic factors, Qi/Blood/Fluid
/// status, and the notes explaining how each call was reached.
///
/// Immutable once returned from the reasoning engine; every classification
/// field is assigned exactly once per analysis.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TcmProfile {
    pub interior_exterior: InteriorExterior,
    pub hot_cold: HotCold,
    pub excess_deficiency: ExcessDeficiency,
    pub yin_yang: YinYang,

    /// Alphabetically sorted.
    pub affected_organs: Vec<Organ>,
    /// First-detection order, no duplicates.
    pub pathogenic_factors: Vec<PathogenicFactor>,

    pub qi_status: QiStatus,
    pub blood_status: BloodStatus,
    pub fluid_status: FluidStatus,

    pub key_manifestations: Vec<String>,
    pub chief_complaint_context: ChiefComplaint,

    /// 0.0–1.0 heuristic over a fixed roster of data points.
    pub data_completeness: f64,
    pub reasoning_notes: Vec<String>,
}

/// The external-facing rendering of a [`TcmProfile`]: nested groupings for
/// the Eight Principles and Qi/Blood/Fluids, completeness as a percentage.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileSummary {
    pub eight_principles: EightPrinciples,
    pub affected_organs: Vec<Organ>,
    pub pathogenic_factors: Vec<PathogenicFactor>,
    pub qi_blood_fluids: QiBloodFluids,
    pub key_manifestations: Vec<String>,
    pub chief_complaint_context: ChiefComplaint,
    /// Percentage, one decimal place.
    pub data_completeness: f64,
    pub reasoning_notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EightPrinciples {
    pub interior_exterior: InteriorExterior,
    pub hot_cold: HotCold,
    pub excess_deficiency: ExcessDeficiency,
    pub yin_yang: YinYang,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QiBloodFluids {
    pub qi: QiStatus,
    pub blood: BloodStatus,
    pub fluids: FluidStatus,
}

impl From<&TcmProfile> for ProfileSummary {
    fn from(profile: &TcmProfile) -> Self {
        Self {
            eight_principles: EightPrinciples {
                interior_exterior: profile.interior_exterior,
                hot_cold: profile.hot_cold,
                excess_deficiency: profile.excess_deficiency,
                yin_yang: profile.yin_yang,
            },
            affected_organs: profile.affected_organs.clone(),
            pathogenic_factors: profile.pathogenic_factors.clone(),
            qi_blood_fluids: QiBloodFluids {
                qi: profile.qi_status,
                blood: profile.blood_status,
                fluids: profile.fluid_status,
            },
            key_manifestations: profile.key_manifestations.clone(),
            chief_complaint_context: profile.chief_complaint_context.clone(),
            data_completeness: (profile.data_completeness * 1000.0).round() / 10.0,
            reasoning_notes: profile.reasoning_notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organ_order_is_alphabetical() {
        let mut organs = vec![Organ::Stomach, Organ::Heart, Organ::Spleen, Organ::Kidney];
        organs.sort();
        assert_eq!(
            organs,
            vec![Organ::Heart, Organ::Kidney, Organ::Spleen, Organ::Stomach]
        );
    }

    #[test]
    fn classification_tokens_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(InteriorExterior::Both).unwrap(),
            serde_json::json!("both")
        );
        assert_eq!(
            serde_json::to_value(HotCold::Neutral).unwrap(),
            serde_json::json!("neutral")
        );
        assert_eq!(PathogenicFactor::Dampness.to_string(), "dampness");
    }

    #[test]
    fn summary_renders_completeness_as_percentage() {
        let profile = TcmProfile {
            interior_exterior: InteriorExterior::Interior,
            hot_cold: HotCold::Neutral,
            excess_deficiency: ExcessDeficiency::Mixed,
            yin_yang: YinYang::Balanced,
            affected_organs: vec![],
            pathogenic_factors: vec![],
            qi_status: QiStatus::Normal,
            blood_status: BloodStatus::Normal,
            fluid_status: FluidStatus::Normal,
            key_manifestations: vec![],
            chief_complaint_context: ChiefComplaint::default(),
            data_completeness: 0.4722,
            reasoning_notes: vec![],
        };
        let summary = ProfileSummary::from(&profile);
        assert_eq!(summary.data_completeness, 47.2);
    }
}
