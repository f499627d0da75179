use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::fields::is_present;

use super::section::SectionRecord;

/// All observation (looking) sections recorded for one visit, keyed by the
/// section names the examination protocol uses. A missing section simply
/// means it was not examined; no rule treats that as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ObservationData {
    pub tongue: Option<SectionRecord<TongueData>>,
    pub shen: Option<SectionRecord<ShenData>>,
    pub complexion: Option<SectionRecord<ComplexionData>>,
    pub hands: Option<SectionRecord<HandsData>>,
    pub feet: Option<SectionRecord<FeetData>>,
    pub eyes: Option<SectionRecord<EyesData>>,
    pub nails: Option<SectionRecord<NailsData>>,
    pub lips: Option<SectionRecord<LipsData>>,
    pub movement: Option<SectionRecord<MovementData>>,
    pub posture: Option<SectionRecord<PostureData>>,
    pub voice: Option<SectionRecord<VoiceData>>,
    pub chest: Option<SectionRecord<ChestData>>,
    pub body_type: Option<SectionRecord<BodyTypeData>>,
    pub skin: Option<SectionRecord<SkinData>>,
    pub veins: Option<SectionRecord<VeinsData>>,
}

impl ObservationData {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// The tongue section data, or an empty record when not examined.
    pub fn tongue(&self) -> TongueData {
        self.tongue.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn shen(&self) -> ShenData {
        self.shen.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn complexion(&self) -> ComplexionData {
        self.complexion
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn hands(&self) -> HandsData {
        self.hands.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn feet(&self) -> FeetData {
        self.feet.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn eyes(&self) -> EyesData {
        self.eyes.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn nails(&self) -> NailsData {
        self.nails.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn lips(&self) -> LipsData {
        self.lips.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn movement(&self) -> MovementData {
        self.movement
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn posture(&self) -> PostureData {
        self.posture
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn voice(&self) -> VoiceData {
        self.voice.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn chest(&self) -> ChestData {
        self.chest.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn body_type(&self) -> BodyTypeData {
        self.body_type
            .as_ref()
            .map(|s| s.data.clone())
            .unwrap_or_default()
    }

    pub fn skin(&self) -> SkinData {
        self.skin.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    pub fn veins(&self) -> VeinsData {
        self.veins.as_ref().map(|s| s.data.clone()).unwrap_or_default()
    }

    /// Number of sections that carry at least one recorded value.
    pub fn populated_sections(&self) -> usize {
        let mut count = 0;
        count += self.tongue.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.shen.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .complexion
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self.hands.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.feet.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.eyes.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.nails.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.lips.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .movement
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self.posture.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.voice.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.chest.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self
            .body_type
            .as_ref()
            .is_some_and(|s| s.data.is_populated()) as usize;
        count += self.skin.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count += self.veins.as_ref().is_some_and(|s| s.data.is_populated()) as usize;
        count
    }

    /// Number of sections the practitioner marked completed.
    pub fn completed_sections(&self) -> usize {
        let mut count = 0;
        count += self.tongue.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.shen.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.complexion.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.hands.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.feet.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.eyes.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.nails.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.lips.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.movement.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.posture.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.voice.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.chest.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.body_type.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.skin.as_ref().is_some_and(|s| s.completed) as usize;
        count += self.veins.as_ref().is_some_and(|s| s.completed) as usize;
        count
    }

    /// Total number of sections present in the record, populated or not.
    pub fn present_sections(&self) -> usize {
        let mut count = 0;
        count += self.tongue.is_some() as usize;
        count += self.shen.is_some() as usize;
        count += self.complexion.is_some() as usize;
        count += self.hands.is_some() as usize;
        count += self.feet.is_some() as usize;
        count += self.eyes.is_some() as usize;
        count += self.nails.is_some() as usize;
        count += self.lips.is_some() as usize;
        count += self.movement.is_some() as usize;
        count += self.posture.is_some() as usize;
        count += self.voice.is_some() as usize;
        count += self.chest.is_some() as usize;
        count += self.body_type.is_some() as usize;
        count += self.skin.is_some() as usize;
        count += self.veins.is_some() as usize;
        count
    }
}

/// Tongue body and coating findings. The single most information-dense
/// observation section; both engines read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TongueData {
    pub body_color: Option<String>,
    pub body_shape: Option<String>,
    pub moisture: Option<String>,
    pub coating_color: Option<String>,
    pub coating_thickness: Option<String>,
    pub coating_quality: Option<String>,
    pub tooth_marked: bool,
    pub cracks: bool,
    pub red_points: bool,
    pub purple_spots: bool,
    pub red_sides: bool,
    pub red_tip: bool,
    pub red_center: bool,
    /// Marked features as a list, e.g. `["purple_spots", "red_sides"]`.
    pub features: Vec<String>,
}

impl TongueData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.body_color)
            || is_present(&self.body_shape)
            || is_present(&self.moisture)
            || is_present(&self.coating_color)
            || is_present(&self.coating_thickness)
            || is_present(&self.coating_quality)
            || self.tooth_marked
            || self.cracks
            || self.red_points
            || self.purple_spots
            || self.red_sides
            || self.red_tip
            || self.red_center
            || !self.features.is_empty()
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Shen (spirit/vitality) as observed in the eyes and demeanor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ShenData {
    pub overall: Option<String>,
}

impl ShenData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.overall)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ComplexionData {
    pub primary_color: Option<String>,
    pub shade: Option<String>,
}

impl ComplexionData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.primary_color) || is_present(&self.shade)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct HandsData {
    pub temperature: Option<String>,
}

impl HandsData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.temperature)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct FeetData {
    pub temperature: Option<String>,
}

impl FeetData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.temperature)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EyesData {
    pub sclera_red: bool,
}

impl EyesData {
    pub fn is_populated(&self) -> bool {
        self.sclera_red
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NailsData {
    pub color: Option<String>,
    pub brittle: bool,
}

impl NailsData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.color) || self.brittle
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct LipsData {
    pub color: Option<String>,
}

impl LipsData {
    pub fn is_populated(&self) -> bool {
        is_present(&self.color)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MovementData {
    pub restless: bool,
}

impl MovementData {
    pub fn is_populated(&self) -> bool {
        self.restless
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PostureData {
    pub stooped: bool,
}

impl PostureData {
    pub fn is_populated(&self) -> bool {
        self.stooped
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VoiceData {
    pub weak: bool,
    pub loud: bool,
}

impl VoiceData {
    pub fn is_populated(&self) -> bool {
        self.weak || self.loud
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ChestData {
    pub sunken: bool,
}

impl ChestData {
    pub fn is_populated(&self) -> bool {
        self.sunken
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct BodyTypeData {
    pub overweight: bool,
}

impl BodyTypeData {
    pub fn is_populated(&self) -> bool {
        self.overweight
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SkinData {
    pub puffy: bool,
    pub greasy: bool,
    pub dry: bool,
    pub rough: bool,
}

impl SkinData {
    pub fn is_populated(&self) -> bool {
        self.puffy || self.greasy || self.dry || self.rough
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VeinsData {
    pub distended: bool,
}

impl VeinsData {
    pub fn is_populated(&self) -> bool {
        self.distended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_deserialize_to_none() {
        let obs = ObservationData::from_json(serde_json::json!({
            "tongue": {"data": {"body_color": "pale"}, "completed": true}
        }))
        .unwrap();
        assert!(obs.shen.is_none());
        assert_eq!(obs.tongue().body_color.as_deref(), Some("pale"));
        assert_eq!(obs.populated_sections(), 1);
        assert_eq!(obs.completed_sections(), 1);
    }

    #[test]
    fn unknown_sections_and_fields_are_ignored() {
        let obs = ObservationData::from_json(serde_json::json!({
            "gait": {"data": {"speed": "slow"}, "completed": true},
            "tongue": {"data": {"body_color": "red", "sheen": "glossy"}}
        }))
        .unwrap();
        assert_eq!(obs.populated_sections(), 1);
        assert!(!obs.tongue.as_ref().unwrap().completed);
    }

    #[test]
    fn empty_section_is_present_but_not_populated() {
        let obs = ObservationData::from_json(serde_json::json!({
            "shen": {"data": {}, "completed": false}
        }))
        .unwrap();
        assert_eq!(obs.present_sections(), 1);
        assert_eq!(obs.populated_sections(), 0);
    }
}
