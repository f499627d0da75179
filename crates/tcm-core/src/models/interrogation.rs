use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::fields::is_present;

use super::section::{FieldMap, SectionRecord};

/// All interrogation (asking) sections recorded for one visit. Wire names
/// keep the hyphenated section ids the interview protocol uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InterrogationData {
    #[serde(rename = "chills-fever")]
    pub chills_fever: Option<SectionRecord<ChillsFeverData>>,
    pub perspiration: Option<SectionRecord<PerspirationData>>,
    #[serde(rename = "head-body")]
    pub head_body: Option<SectionRecord<HeadBodyData>>,
    #[serde(rename = "stools-urine")]
    pub stools_urine: Option<SectionRecord<StoolsUrineData>>,
    #[serde(rename = "thirst-appetite")]
    pub thirst_appetite: Option<SectionRecord<ThirstAppetiteData>>,
    #[serde(rename = "chest-abdomen")]
    pub chest_abdomen: Option<SectionRecord<FieldMap>>,
    #[serde(rename = "hearing-ears")]
    pub hearing_ears: Option<SectionRecord<FieldMap>>,
    pub sleep: Option<SectionRecord<SleepData>>,
    pub emotions: Option<SectionRecord<EmotionsData>>,
    #[serde(rename = "energy-vitality")]
    pub energy_vitality: Option<SectionRecord<EnergyVitalityData>>,
    #[serde(rename = "pain-sensations")]
    pub pain_sensations: Option<SectionRecord<FieldMap>>,
    #[serde(rename = "womens-health")]
    pub womens_health: Option<SectionRecord<FieldMap>>,
}

impl InterrogationData {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn chills_fever(&self) -> ChillsFeverData {
        self.chills_fever
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn perspiration(&self) -> PerspirationData {
        self.perspiration
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn head_body(&self) -> HeadBodyData {
        self.head_body
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn stools_urine(&self) -> StoolsUrineData {
        self.stools_urine
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn thirst_appetite(&self) -> ThirstAppetiteData {
        self.thirst_appetite
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn sleep(&self) -> SleepData {
        self.sleep.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn emotions(&self) -> EmotionsData {
        self.emotions
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn energy_vitality(&self) -> EnergyVitalityData {
        self.energy_vitality
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    /// Number of sections that carry at least one recorded value.
    pub fn populated_sections(&self) -> usize {
        let mut count = 0;
        count += self
            .chills_fever
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .perspiration
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .head_body
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .stools_urine
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .thirst_appetite
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .chest_abdomen
            .as_ref()
            .is_some_and(|s| !s.data.is_empty()) as usize;
        count += self
            .hearing_ears
            .as_ref()
            .is_some_and(|s| !s.data.is_empty()) as usize;
        count += self.sleep.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .emotions
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .energy_vitality
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .pain_sensations
            .as_ref()
            .is_some_and(|s| !s.data.is_empty()) as usize;
        count += self
            .womens_health
            .as_ref()
            .is_some_and(|s| !s.data.is_empty()) as usize;
        count
    }

    /// Number of sections the practitioner marked completed.
    pub fn completed_sections(&self) -> usize {
        let mut count = 0;
        count += self.chills_fever.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.perspiration.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.head_body.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.stools_urine.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.thirst_appetite.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.chest_abdomen.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.hearing_ears.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.sleep.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.emotions.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.energy_vitality.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.pain_sensations.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.womens_health.as_ref().is_some_and(|s| s.completed) as usize;
        count
    }

    /// Total number of sections present in the record, populated or not.
    pub fn present_sections(&self) -> usize {
        let mut count = 0;
        count += self.chills_fever.is_some() as usize;
        count += self.perspiration.is_some() as usize;
        count += self.head_body.is_some() as usize;
        count += self.stools_urine.is_some() as usize;
        count += self.thirst_appetite.is_some() as usize;
        count += self.chest_abdomen.is_some() as usize;
        count += self.hearing_ears.is_some() as usize;
        count += self.sleep.is_some() as usize;
        count += self.emotions.is_some() as usize;
        count += self.energy_vitality.is_some() as usize;
        count += self.pain_sensations.is_some() as usize;
        count += self.womens_health.is_some() as usize;
        count
    }
}

/// Fever and chills. `fever_present` and `chills_present` hold the answer
/// text ("Low-grade fever", "Aversion to cold", ...); presence of any text
/// is what the exterior rule looks for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ChillsFeverData {
    pub fever_present: Option<String>,
    pub chills_present: Option<String>,
    pub fever_timing: Option<String>,
}

impl ChillsFeverData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.fever_present)
            || is_present(&self.chills_present)
            || is_present(&self.fever_timing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PerspirationData {
    pub sweating_pattern: Option<String>,
    pub sweating_timing: Option<String>,
}

impl PerspirationData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.sweating_pattern) || is_present(&self.sweating_timing)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct HeadBodyData {
    pub headaches: bool,
    /// Ache locations, e.g. `["Back", "Limbs"]`.
    pub body_aches: Vec<String>,
    pub dizziness: bool,
}

impl HeadBodyData {
    pub fn is_populated(&self) -> bool {
        self.headaches || !self.body_aches.is_empty() || self.dizziness
    }

    pub fn has_body_aches(&self) -> bool {
        !self.body_aches.is_empty()
    }

    pub fn aches_include(&self, location: &str) -> bool {
        self.body_aches.iter().any(|a| a == location)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct StoolsUrineData {
    pub stool_consistency: Option<String>,
    pub bowel_frequency: Option<String>,
    pub urination_frequency: Option<String>,
}

impl StoolsUrineData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.stool_consistency)
            || is_present(&self.bowel_frequency)
            || is_present(&self.urination_frequency)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ThirstAppetiteData {
    pub thirst: Option<String>,
    pub appetite: Option<String>,
}

impl ThirstAppetiteData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.thirst) || is_present(&self.appetite)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SleepData {
    pub sleep_quality: Option<String>,
}

impl SleepData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.sleep_quality)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EmotionsData {
    pub emotional_state: Option<String>,
}

impl EmotionsData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.emotional_state)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EnergyVitalityData {
    pub energy_level: Option<String>,
}

impl EnergyVitalityData {
    /// The low-energy answers the deficiency rules look for.
    pub fn is_low(&self) -> bool {
        matches!(
            self.energy_level.as_deref(),
            Some("Low") | Some("Very low") | Some("Exhausted")
        )
    }

    pub fn is_populated(&self) -> bool {
        is_present(&self.energy_level)
    }
}
