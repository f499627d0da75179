//! Eight-Principles reasoning over intake data.
//!
//! [`TcmReasoningEngine`] runs a fixed cascade of classification stages over
//! the observation, interrogation and chief-complaint records of a visit and
//! produces a [`TcmProfile`]: the four diagnostic axes, affected organ
//! systems, pathogenic factors, Qi/Blood/Fluid status and a trail of
//! reasoning notes. The stage rules themselves live in [`stages`].

pub mod stages;

use tracing::info;

use tcm_core::models::{
    BloodStatus, ChiefComplaint, ExcessDeficiency, FluidStatus, HotCold, InteriorExterior,
    InterrogationData, ObservationData, ProfileSummary, QiStatus, TcmProfile, YinYang,
};

/// Runs the diagnostic cascade and keeps the most recent profile.
///
/// Each call to [`analyze`](Self::analyze) starts from a fresh profile, so
/// one engine can serve successive visits; re-analyzing the same inputs
/// yields an identical profile.
#[derive(Debug, Default)]
pub struct TcmReasoningEngine {
    profile: Option<TcmProfile>,
}

impl TcmReasoningEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one visit's data. Stage order is fixed: completeness, then
    /// the three observed axes, then Yin/Yang (derived from those), then
    /// pathogenic factors and the Qi/Blood/Fluid and organ assessments that
    /// read the earlier classifications.
    pub fn analyze(
        &mut self,
        observations: &ObservationData,
        interrogation: &InterrogationData,
        chief_complaint: &ChiefComplaint,
    ) -> &TcmProfile {
        let mut profile = TcmProfile {
            interior_exterior: InteriorExterior::Interior,
            hot_cold: HotCold::Neutral,
            excess_deficiency: ExcessDeficiency::Mixed,
            yin_yang: YinYang::Balanced,
            affected_organs: Vec::new(),
            pathogenic_factors: Vec::new(),
            qi_status: QiStatus::Normal,
            blood_status: BloodStatus::Normal,
            fluid_status: FluidStatus::Normal,
            key_manifestations: Vec::new(),
            chief_complaint_context: chief_complaint.clone(),
            data_completeness: 0.0,
            reasoning_notes: Vec::new(),
        };

        stages::assess_completeness(&mut profile, observations, interrogation, chief_complaint);
        stages::determine_interior_exterior(&mut profile, observations, interrogation);
        stages::determine_hot_cold(&mut profile, observations, interrogation);
        stages::determine_excess_deficiency(&mut profile, observations, interrogation);
        stages::determine_yin_yang(&mut profile);
        stages::identify_pathogenic_factors(&mut profile, observations, interrogation);
        stages::assess_qi_status(&mut profile, observations, interrogation);
        stages::assess_blood_status(&mut profile, observations);
        stages::assess_fluid_status(&mut profile, observations, interrogation);
        stages::identify_affected_organs(&mut profile, observations, interrogation);
        stages::compile_key_manifestations(&mut profile, observations, interrogation);

        info!(
            interior_exterior = %profile.interior_exterior,
            hot_cold = %profile.hot_cold,
            excess_deficiency = %profile.excess_deficiency,
            yin_yang = %profile.yin_yang,
            data_completeness = profile.data_completeness,
            "tcm profile derived"
        );

        self.profile.insert(profile)
    }

    /// The profile from the most recent [`analyze`](Self::analyze) call.
    pub fn profile(&self) -> Option<&TcmProfile> {
        self.profile.as_ref()
    }

    /// Rendering of the current profile for external consumers, or `None`
    /// before any analysis has run.
    pub fn profile_summary(&self) -> Option<ProfileSummary> {
        self.profile.as_ref().map(ProfileSummary::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcm_core::models::{Organ, PathogenicFactor};

    fn deficiency_case() -> (ObservationData, InterrogationData, ChiefComplaint) {
        let observations = ObservationData::from_json(serde_json::json!({
            "tongue": {
                "data": {
                    "body_color": "pale",
                    "body_shape": "swollen",
                    "coating_color": "white",
                    "coating_thickness": "thin",
                    "tooth_marked": true
                },
                "completed": true
            },
            "shen": {"data": {"overall": "weak"}, "completed": true},
            "hands": {"data": {"temperature": "cold"}, "completed": true}
        }))
        .unwrap();
        let interrogation = InterrogationData::from_json(serde_json::json!({
            "energy-vitality": {"data": {"energy_level": "Very low"}, "completed": true},
            "stools-urine": {"data": {"stool_consistency": "Loose/watery"}, "completed": true},
            "thirst-appetite": {
                "data": {"thirst": "Prefers warm drinks", "appetite": "Poor appetite"},
                "completed": true
            }
        }))
        .unwrap();
        let chief_complaint = ChiefComplaint {
            primary_concern: Some("Chronic fatigue and digestive weakness".to_string()),
            ..Default::default()
        };
        (observations, interrogation, chief_complaint)
    }

    #[test]
    fn deficiency_case_classifies_interior_cold_deficient_yin() {
        let (observations, interrogation, chief_complaint) = deficiency_case();
        let mut engine = TcmReasoningEngine::new();
        let profile = engine.analyze(&observations, &interrogation, &chief_complaint);

        assert_eq!(profile.interior_exterior, InteriorExterior::Interior);
        assert_eq!(profile.hot_cold, HotCold::Cold);
        assert_eq!(profile.excess_deficiency, ExcessDeficiency::Deficiency);
        assert_eq!(profile.yin_yang, YinYang::Yin);
        assert_eq!(profile.qi_status, QiStatus::Deficient);
        assert!(profile.pathogenic_factors.contains(&PathogenicFactor::Dampness));
        assert!(profile.pathogenic_factors.contains(&PathogenicFactor::Cold));
        // Spleen from stools/appetite and the swollen pale tongue, Kidney
        // from the fatigue keyword plus cold extremities, Lung from low
        // energy with confirmed Qi deficiency, Stomach from "digestive".
        assert_eq!(
            profile.affected_organs,
            vec![Organ::Kidney, Organ::Lung, Organ::Spleen, Organ::Stomach]
        );
        assert!(profile.data_completeness > 0.0 && profile.data_completeness <= 1.0);
        assert!(
            profile
                .reasoning_notes
                .iter()
                .any(|n| n.starts_with("Affected organs:"))
        );
    }

    #[test]
    fn exterior_heat_case_classifies_yang() {
        let observations = ObservationData::from_json(serde_json::json!({
            "tongue": {"data": {"body_color": "red", "coating_color": "yellow"}},
            "complexion": {"data": {"primary_color": "red"}},
            "shen": {"data": {"overall": "strong"}},
            "voice": {"data": {"loud": true}}
        }))
        .unwrap();
        let interrogation = InterrogationData::from_json(serde_json::json!({
            "chills-fever": {"data": {"fever_present": "High fever", "chills_present": "Chills"}},
            "head-body": {"data": {"headaches": true, "body_aches": ["Limbs", "Back"]}},
            "thirst-appetite": {"data": {"thirst": "Prefers cold drinks"}}
        }))
        .unwrap();
        let chief_complaint = ChiefComplaint {
            primary_concern: Some("Sudden onset of fever".to_string()),
            ..Default::default()
        };

        let mut engine = TcmReasoningEngine::new();
        let profile = engine.analyze(&observations, &interrogation, &chief_complaint);

        assert_eq!(profile.interior_exterior, InteriorExterior::Exterior);
        assert_eq!(profile.hot_cold, HotCold::Hot);
        assert_eq!(profile.excess_deficiency, ExcessDeficiency::Excess);
        assert_eq!(profile.yin_yang, YinYang::Yang);
        assert!(profile.pathogenic_factors.contains(&PathogenicFactor::Heat));
        assert!(profile.pathogenic_factors.contains(&PathogenicFactor::Wind));
        // Back aches implicate the Kidney even in an exterior pattern.
        assert!(profile.affected_organs.contains(&Organ::Kidney));
    }

    #[test]
    fn empty_intake_yields_neutral_profile() {
        let mut engine = TcmReasoningEngine::new();
        let profile = engine.analyze(
            &ObservationData::default(),
            &InterrogationData::default(),
            &ChiefComplaint::default(),
        );

        assert_eq!(profile.interior_exterior, InteriorExterior::Interior);
        assert_eq!(profile.hot_cold, HotCold::Neutral);
        assert_eq!(profile.excess_deficiency, ExcessDeficiency::Mixed);
        assert_eq!(profile.yin_yang, YinYang::Yin);
        assert_eq!(profile.qi_status, QiStatus::Normal);
        assert_eq!(profile.blood_status, BloodStatus::Normal);
        assert_eq!(profile.fluid_status, FluidStatus::Normal);
        assert!(profile.affected_organs.is_empty());
        assert!(profile.pathogenic_factors.is_empty());
        assert!(profile.key_manifestations.is_empty());
        assert_eq!(profile.data_completeness, 0.0);
    }

    #[test]
    fn analysis_is_deterministic_across_runs() {
        let (observations, interrogation, chief_complaint) = deficiency_case();
        let mut engine = TcmReasoningEngine::new();
        let first = engine
            .analyze(&observations, &interrogation, &chief_complaint)
            .clone();
        let second = engine.analyze(&observations, &interrogation, &chief_complaint);

        assert_eq!(first.reasoning_notes, second.reasoning_notes);
        assert_eq!(first.key_manifestations, second.key_manifestations);
        assert_eq!(first.affected_organs, second.affected_organs);
        assert_eq!(first.data_completeness, second.data_completeness);
    }

    #[test]
    fn summary_is_none_before_analysis() {
        let engine = TcmReasoningEngine::new();
        assert!(engine.profile().is_none());
        assert!(engine.profile_summary().is_none());
    }

    #[test]
    fn summary_groups_principles_and_rounds_completeness() {
        let (observations, interrogation, chief_complaint) = deficiency_case();
        let mut engine = TcmReasoningEngine::new();
        engine.analyze(&observations, &interrogation, &chief_complaint);

        let summary = engine.profile_summary().unwrap();
        assert_eq!(summary.eight_principles.hot_cold, HotCold::Cold);
        assert_eq!(summary.qi_blood_fluids.qi, QiStatus::Deficient);
        // Percentage with one decimal place.
        assert_eq!(
            summary.data_completeness,
            (summary.data_completeness * 10.0).round() / 10.0
        );
        assert!(summary.data_completeness > 0.0 && summary.data_completeness <= 100.0);
    }
}
