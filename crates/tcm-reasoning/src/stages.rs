//! The rule cascade: an ordered pipeline of pure stage functions over the
//! profile under construction. Order is load-bearing — several stages read
//! classification fields written by earlier ones; each function documents
//! what it depends on. Absent data never fails a stage, it just means the
//! indicator is not present.

use tcm_core::fields::{any_keyword, contains, is_present, text};
use tcm_core::models::{
    BloodStatus, ChiefComplaint, ExcessDeficiency, FluidStatus, HotCold, InteriorExterior,
    InterrogationData, ObservationData, Organ, PathogenicFactor, QiStatus, TcmProfile, YinYang,
};

/// Fixed completeness denominator covering the standard intake roster
/// (section slots, chief-complaint parts and the key data points below).
/// Deliberately not derived from the schema; the quotient is clamped to
/// 1.0 so unusually thorough records simply cap out.
pub const COMPLETENESS_DENOMINATOR: f64 = 36.0;

/// Stage 1: data completeness over the fixed roster. No dependencies.
pub fn assess_completeness(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
    cc: &ChiefComplaint,
) {
    let mut populated = obs.populated_sections() + interr.populated_sections();
    populated += cc.populated_parts();

    // Key data points that significantly shape the reasoning.
    let tongue = obs.tongue();
    let key_points = [
        is_present(&tongue.body_color),
        is_present(&tongue.coating_color),
        is_present(&obs.complexion().primary_color),
        is_present(&obs.shen().overall),
        is_present(&interr.chills_fever().fever_present),
        is_present(&interr.energy_vitality().energy_level),
        is_present(&interr.thirst_appetite().thirst),
        is_present(&interr.stools_urine().stool_consistency),
        is_present(&interr.sleep().sleep_quality),
    ];
    populated += key_points.iter().filter(|p| **p).count();

    profile.data_completeness = (populated as f64 / COMPLETENESS_DENOMINATOR).min(1.0);
}

/// Stage 2: Interior/Exterior. Reads the chief complaint already stored on
/// the profile.
pub fn determine_interior_exterior(
    profile: &mut TcmProfile,
    _obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut exterior: Vec<&str> = Vec::new();
    let mut interior: Vec<&str> = Vec::new();

    let chills_fever = interr.chills_fever();
    if is_present(&chills_fever.fever_present) && is_present(&chills_fever.chills_present) {
        exterior.push("simultaneous fever and chills");
    }
    if interr.head_body().has_body_aches() {
        exterior.push("body aches");
    }

    let concern = &profile.chief_complaint_context.primary_concern;
    if any_keyword(concern, &["chronic", "months", "years", "ongoing"]) {
        interior.push("chronic condition");
    }
    if interr.energy_vitality().is_low() {
        interior.push("chronic low energy");
    }
    if matches!(
        text(&interr.stools_urine().stool_consistency),
        "Loose/watery" | "Constipated"
    ) {
        interior.push("digestive dysfunction");
    }

    profile.interior_exterior = match (exterior.is_empty(), interior.is_empty()) {
        (false, true) => InteriorExterior::Exterior,
        (true, false) => InteriorExterior::Interior,
        (false, false) => InteriorExterior::Both,
        // Default for diagnostic work: most presenting conditions are interior.
        (true, true) => InteriorExterior::Interior,
    };

    if !exterior.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Exterior signs: {}", exterior.join(", ")));
    }
    if !interior.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Interior signs: {}", interior.join(", ")));
    }
}

/// Stage 3: thermal nature. The indicator counts use a 1.5x dominance rule
/// so a single stray sign does not flip the classification.
pub fn determine_hot_cold(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut hot: Vec<&str> = Vec::new();
    let mut cold: Vec<&str> = Vec::new();

    // Tongue first: the most reliable thermometer.
    let tongue = obs.tongue();
    if contains(&tongue.body_color, "red") {
        hot.push("red tongue body");
    } else if contains(&tongue.body_color, "pale") {
        cold.push("pale tongue body");
    }
    if contains(&tongue.coating_color, "yellow") {
        hot.push("yellow tongue coating");
    } else if contains(&tongue.coating_color, "white") {
        cold.push("white tongue coating");
    }

    let thirst = interr.thirst_appetite().thirst;
    if contains(&thirst, "warm") {
        cold.push("prefers warm drinks");
    } else if contains(&thirst, "cold") {
        hot.push("prefers cold drinks");
    } else if text(&thirst) == "No thirst" {
        cold.push("no thirst");
    }

    let chills_fever = interr.chills_fever();
    if is_present(&chills_fever.fever_present) {
        hot.push("fever present");
    }
    if text(&chills_fever.chills_present) == "Aversion to cold" {
        cold.push("aversion to cold");
    }

    let hands = obs.hands();
    let feet = obs.feet();
    if text(&hands.temperature) == "cold" || text(&feet.temperature) == "cold" {
        cold.push("cold extremities");
    }
    if text(&hands.temperature) == "hot_palms" {
        hot.push("hot palms");
    }

    let complexion = obs.complexion();
    if contains(&complexion.primary_color, "red") {
        hot.push("red complexion");
    } else if contains(&complexion.primary_color, "pale") {
        cold.push("pale complexion");
    }

    if text(&interr.perspiration().sweating_pattern) == "Night sweats" {
        hot.push("night sweats");
    }

    let hot_score = hot.len() as f64;
    let cold_score = cold.len() as f64;
    profile.hot_cold = if hot_score > cold_score * 1.5 {
        HotCold::Hot
    } else if cold_score > hot_score * 1.5 {
        HotCold::Cold
    } else if hot_score > 0.0 && cold_score > 0.0 {
        HotCold::Mixed
    } else {
        HotCold::Neutral
    };

    if !hot.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Heat signs: {}", hot.join(", ")));
    }
    if !cold.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Cold signs: {}", cold.join(", ")));
    }
}

/// Stage 4: Excess/Deficiency. Reads the chief complaint from the profile.
pub fn determine_excess_deficiency(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut excess: Vec<&str> = Vec::new();
    let mut deficiency: Vec<&str> = Vec::new();

    match text(&obs.shen().overall) {
        "weak" => deficiency.push("weak shen (spirit)"),
        "strong" => excess.push("strong shen"),
        _ => {}
    }

    let energy = interr.energy_vitality();
    if energy.is_low() {
        deficiency.push("chronic low energy");
    } else if text(&energy.energy_level) == "High" {
        excess.push("high energy");
    }

    let voice = obs.voice();
    if voice.weak {
        deficiency.push("weak voice");
    } else if voice.loud {
        excess.push("loud voice");
    }

    // A swollen tongue cuts both ways: pale points to Qi deficiency, a
    // thick coating to excess dampness.
    let tongue = obs.tongue();
    if contains(&tongue.body_shape, "thin") {
        deficiency.push("thin tongue");
    } else if contains(&tongue.body_shape, "swollen") {
        if text(&tongue.body_color) == "pale" {
            deficiency.push("swollen pale tongue");
        } else if text(&tongue.coating_thickness) == "thick" {
            excess.push("swollen tongue with thick coating");
        }
    }

    match text(&interr.stools_urine().stool_consistency) {
        "Loose/watery" => deficiency.push("loose stools"),
        "Constipated" => excess.push("constipation"),
        _ => {}
    }

    if matches!(
        text(&interr.thirst_appetite().appetite),
        "No appetite" | "Poor appetite"
    ) {
        deficiency.push("poor appetite");
    }

    let concern = &profile.chief_complaint_context.primary_concern;
    if any_keyword(concern, &["chronic", "ongoing", "years"]) {
        deficiency.push("chronic condition");
    } else if any_keyword(concern, &["sudden", "acute", "recent"]) {
        excess.push("acute onset");
    }

    let excess_score = excess.len() as f64;
    let deficiency_score = deficiency.len() as f64;
    profile.excess_deficiency = if deficiency_score > excess_score * 1.5 {
        ExcessDeficiency::Deficiency
    } else if excess_score > deficiency_score * 1.5 {
        ExcessDeficiency::Excess
    } else if deficiency_score > 0.0 && excess_score > 0.0 {
        ExcessDeficiency::Mixed
    } else if energy.is_low() {
        ExcessDeficiency::Deficiency
    } else {
        ExcessDeficiency::Mixed
    };

    if !excess.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Excess signs: {}", excess.join(", ")));
    }
    if !deficiency.is_empty() {
        profile
            .reasoning_notes
            .push(format!("Deficiency signs: {}", deficiency.join(", ")));
    }
}

/// Stage 5: Yin/Yang. Pure derivation from stages 2–4 — Exterior, Hot and
/// Excess each score one Yang point; Interior, Cold and Deficiency one Yin
/// point. Majority wins, tie is balanced.
pub fn determine_yin_yang(profile: &mut TcmProfile) {
    let mut yang = 0;
    let mut yin = 0;

    match profile.interior_exterior {
        InteriorExterior::Exterior => yang += 1,
        InteriorExterior::Interior => yin += 1,
        InteriorExterior::Both => {}
    }
    match profile.hot_cold {
        HotCold::Hot => yang += 1,
        HotCold::Cold => yin += 1,
        HotCold::Mixed | HotCold::Neutral => {}
    }
    match profile.excess_deficiency {
        ExcessDeficiency::Excess => yang += 1,
        ExcessDeficiency::Deficiency => yin += 1,
        ExcessDeficiency::Mixed => {}
    }

    profile.yin_yang = if yang > yin {
        YinYang::Yang
    } else if yin > yang {
        YinYang::Yin
    } else {
        YinYang::Balanced
    };
}

/// Stage 6: pathogenic factors, in first-detection order without
/// duplicates. Depends on `hot_cold` (stage 3) and `interior_exterior`
/// (stage 2).
pub fn identify_pathogenic_factors(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut factors: Vec<PathogenicFactor> = Vec::new();
    let add = |factors: &mut Vec<PathogenicFactor>, factor: PathogenicFactor| {
        if !factors.contains(&factor) {
            factors.push(factor);
        }
    };

    let tongue = obs.tongue();
    let greasy_coating =
        contains(&tongue.coating_quality, "greasy") || contains(&tongue.coating_quality, "sticky");
    if greasy_coating {
        add(&mut factors, PathogenicFactor::Dampness);
    }

    if text(&tongue.coating_thickness) == "thick" && contains(&tongue.coating_quality, "greasy") {
        add(&mut factors, PathogenicFactor::Phlegm);
    }

    if obs.body_type().overweight {
        add(&mut factors, PathogenicFactor::Dampness);
    }

    if text(&interr.stools_urine().stool_consistency) == "Loose/watery"
        && profile.hot_cold == HotCold::Cold
    {
        add(&mut factors, PathogenicFactor::Dampness);
    }

    if profile.hot_cold == HotCold::Hot {
        add(&mut factors, PathogenicFactor::Heat);
        // Fire is heat escalated: a dark-red tongue or a thick yellow coat.
        if contains(&tongue.body_color, "dark red")
            || text(&tongue.coating_color) == "yellow thick"
        {
            add(&mut factors, PathogenicFactor::Fire);
        }
    }

    if profile.hot_cold == HotCold::Cold {
        add(&mut factors, PathogenicFactor::Cold);
    }

    if text(&tongue.moisture) == "dry" {
        add(&mut factors, PathogenicFactor::Dryness);
    }

    if profile.interior_exterior == InteriorExterior::Exterior {
        let head_body = interr.head_body();
        if head_body.headaches && head_body.has_body_aches() {
            add(&mut factors, PathogenicFactor::Wind);
        }
    }

    if !factors.is_empty() {
        let joined = factors
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        profile
            .reasoning_notes
            .push(format!("Pathogenic factors: {joined}"));
    }
    profile.pathogenic_factors = factors;
}

/// Stage 7: Qi status. Deficiency (two or more signs) takes priority over
/// stagnation. Reads the chief complaint from the profile.
pub fn assess_qi_status(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut deficiency: Vec<&str> = Vec::new();
    let mut stagnation: Vec<&str> = Vec::new();

    if text(&obs.shen().overall) == "weak" {
        deficiency.push("weak shen");
    }
    if interr.energy_vitality().is_low() {
        deficiency.push("fatigue");
    }
    if obs.voice().weak {
        deficiency.push("weak voice");
    }

    let concern = &profile.chief_complaint_context.primary_concern;
    if any_keyword(concern, &["pain", "distension"]) {
        stagnation.push("pain/distension");
    }
    if matches!(
        text(&interr.emotions().emotional_state),
        "Irritable" | "Frustrated" | "Depressed"
    ) {
        stagnation.push("emotional constraint");
    }

    if deficiency.len() >= 2 {
        profile.qi_status = QiStatus::Deficient;
        profile
            .reasoning_notes
            .push(format!("Qi deficiency: {}", deficiency.join(", ")));
    } else if !stagnation.is_empty() {
        profile.qi_status = QiStatus::Stagnant;
        profile
            .reasoning_notes
            .push(format!("Qi stagnation: {}", stagnation.join(", ")));
    } else {
        profile.qi_status = QiStatus::Normal;
    }
}

/// Stage 8: Blood status, checked deficient > stagnant > heat > normal.
/// Depends on `hot_cold` (stage 3).
pub fn assess_blood_status(profile: &mut TcmProfile, obs: &ObservationData) {
    let mut deficiency: Vec<&str> = Vec::new();
    let mut stagnation: Vec<&str> = Vec::new();
    let mut heat: Vec<&str> = Vec::new();

    let tongue = obs.tongue();
    if text(&tongue.body_color) == "pale" && text(&tongue.body_shape) == "thin" {
        deficiency.push("pale thin tongue");
    }
    if text(&obs.complexion().primary_color) == "pale" {
        deficiency.push("pale complexion");
    }
    if text(&obs.nails().color) == "pale" {
        deficiency.push("pale nails");
    }

    if contains(&tongue.body_color, "purple") {
        stagnation.push("purple tongue");
    }
    if tongue.has_feature("purple_spots") {
        stagnation.push("purple spots on tongue");
    }

    if profile.hot_cold == HotCold::Hot && text(&tongue.body_color) == "dark red" {
        heat.push("dark red tongue");
    }

    if deficiency.len() >= 2 {
        profile.blood_status = BloodStatus::Deficient;
        profile
            .reasoning_notes
            .push(format!("Blood deficiency: {}", deficiency.join(", ")));
    } else if !stagnation.is_empty() {
        profile.blood_status = BloodStatus::Stagnant;
        profile
            .reasoning_notes
            .push(format!("Blood stasis: {}", stagnation.join(", ")));
    } else if !heat.is_empty() {
        profile.blood_status = BloodStatus::Heat;
        profile
            .reasoning_notes
            .push(format!("Blood heat: {}", heat.join(", ")));
    } else {
        profile.blood_status = BloodStatus::Normal;
    }
}

/// Stage 9: fluid status. Depends on the pathogenic factors (stage 6).
pub fn assess_fluid_status(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut deficiency: Vec<&str> = Vec::new();
    let mut excess: Vec<&str> = Vec::new();

    let tongue = obs.tongue();
    if text(&tongue.moisture) == "dry" {
        deficiency.push("dry tongue");
    }
    if contains(&interr.thirst_appetite().thirst, "thirsty") {
        deficiency.push("thirsty");
    }
    if obs.skin().dry {
        deficiency.push("dry skin");
    }

    if profile.pathogenic_factors.contains(&PathogenicFactor::Dampness) {
        excess.push("dampness");
    }
    if text(&tongue.coating_thickness) == "thick" {
        excess.push("thick coating");
    }

    if deficiency.len() >= 2 {
        profile.fluid_status = FluidStatus::Deficient;
        profile
            .reasoning_notes
            .push(format!("Fluid deficiency: {}", deficiency.join(", ")));
    } else if !excess.is_empty() {
        profile.fluid_status = FluidStatus::Excess;
        profile
            .reasoning_notes
            .push(format!("Fluid excess: {}", excess.join(", ")));
    } else {
        profile.fluid_status = FluidStatus::Normal;
    }
}

/// Stage 10: affected organ systems (TCM organ theory, not anatomy).
/// Depends on `hot_cold` (stage 3), `qi_status` (stage 7) and, for the
/// Kidney cold-extremities rule, the note text stage 3 recorded.
pub fn identify_affected_organs(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut organs = std::collections::BTreeSet::new();

    let stools = interr.stools_urine();
    let appetite = interr.thirst_appetite().appetite;
    if text(&stools.stool_consistency) == "Loose/watery"
        || matches!(text(&appetite), "No appetite" | "Poor appetite")
    {
        organs.insert(Organ::Spleen);
    }

    let tongue = obs.tongue();
    if text(&tongue.body_shape) == "swollen" && text(&tongue.body_color) == "pale" {
        organs.insert(Organ::Spleen);
    }

    if contains(&stools.urination_frequency, "night") {
        organs.insert(Organ::Kidney);
    }
    let head_body = interr.head_body();
    if head_body.aches_include("Back") {
        organs.insert(Organ::Kidney);
    }
    let cold_extremities_noted = profile
        .reasoning_notes
        .iter()
        .any(|n| n.contains("cold extremities"));
    if profile.hot_cold == HotCold::Cold && cold_extremities_noted {
        organs.insert(Organ::Kidney);
    }

    let emotional_state = interr.emotions().emotional_state;
    if matches!(text(&emotional_state), "Irritable" | "Frustrated" | "Angry") {
        organs.insert(Organ::Liver);
    }
    if tongue.has_feature("red_sides") {
        organs.insert(Organ::Liver);
    }

    if matches!(text(&interr.sleep().sleep_quality), "Poor" | "Very poor") {
        organs.insert(Organ::Heart);
    }
    if matches!(text(&emotional_state), "Anxious" | "Worried") {
        organs.insert(Organ::Heart);
    }

    // Low energy alone could be Lung or Spleen; only attribute it to the
    // Lung once stage 7 has already confirmed Qi deficiency.
    if interr.energy_vitality().is_low() && profile.qi_status == QiStatus::Deficient {
        organs.insert(Organ::Lung);
    }
    let skin = obs.skin();
    if skin.dry || skin.rough {
        organs.insert(Organ::Lung);
    }

    let concern = &profile.chief_complaint_context.primary_concern;
    if any_keyword(concern, &["digest", "stomach", "bowel"]) {
        organs.insert(Organ::Spleen);
        organs.insert(Organ::Stomach);
    }
    if any_keyword(concern, &["sleep", "anxiety", "palpitation"]) {
        organs.insert(Organ::Heart);
    }
    if any_keyword(concern, &["anger", "irritable", "headache"]) {
        organs.insert(Organ::Liver);
    }
    if any_keyword(concern, &["fatigue", "weakness"]) {
        organs.insert(Organ::Spleen);
        organs.insert(Organ::Kidney);
    }

    if !organs.is_empty() {
        let joined = organs
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        profile
            .reasoning_notes
            .push(format!("Affected organs: {joined}"));
    }
    profile.affected_organs = organs.into_iter().collect();
}

/// Stage 11: presentation summary of the most significant manifestations.
/// Depends on `hot_cold` (stage 3); no other stage reads this output.
pub fn compile_key_manifestations(
    profile: &mut TcmProfile,
    obs: &ObservationData,
    interr: &InterrogationData,
) {
    let mut manifestations = Vec::new();
    let mut push_if_present = |label: &str, field: &Option<String>| {
        if is_present(field) {
            manifestations.push(format!("{label}: {}", text(field)));
        }
    };

    let tongue = obs.tongue();
    push_if_present("Tongue", &tongue.body_color);
    push_if_present("Coating", &tongue.coating_color);
    push_if_present("Complexion", &obs.complexion().primary_color);
    push_if_present("Shen", &obs.shen().overall);
    push_if_present("Energy", &interr.energy_vitality().energy_level);
    push_if_present("Stools", &interr.stools_urine().stool_consistency);
    push_if_present("Sleep", &interr.sleep().sleep_quality);

    if profile.hot_cold != HotCold::Neutral {
        manifestations.push(format!("Temperature: {}", profile.hot_cold));
    }

    profile.key_manifestations = manifestations;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_profile(cc: ChiefComplaint) -> TcmProfile {
        TcmProfile {
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
            chief_complaint_context: cc,
            data_completeness: 0.0,
            reasoning_notes: Vec::new(),
        }
    }

    fn obs(value: serde_json::Value) -> ObservationData {
        ObservationData::from_json(value).unwrap()
    }

    fn interr(value: serde_json::Value) -> InterrogationData {
        InterrogationData::from_json(value).unwrap()
    }

    #[test]
    fn simultaneous_fever_and_chills_is_exterior() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let interrogation = interr(serde_json::json!({
            "chills-fever": {"data": {
                "fever_present": "Low-grade fever",
                "chills_present": "Mild chills"
            }}
        }));
        determine_interior_exterior(&mut profile, &ObservationData::default(), &interrogation);
        assert_eq!(profile.interior_exterior, InteriorExterior::Exterior);
        assert!(profile.reasoning_notes[0].starts_with("Exterior signs:"));
    }

    #[test]
    fn no_indicators_defaults_to_interior() {
        let mut profile = blank_profile(ChiefComplaint::default());
        determine_interior_exterior(
            &mut profile,
            &ObservationData::default(),
            &InterrogationData::default(),
        );
        assert_eq!(profile.interior_exterior, InteriorExterior::Interior);
        assert!(profile.reasoning_notes.is_empty());
    }

    #[test]
    fn mixed_signals_classify_as_both() {
        let mut profile = blank_profile(ChiefComplaint {
            primary_concern: Some("chronic headaches".to_string()),
            ..Default::default()
        });
        let interrogation = interr(serde_json::json!({
            "chills-fever": {"data": {"fever_present": "Yes", "chills_present": "Yes"}}
        }));
        determine_interior_exterior(&mut profile, &ObservationData::default(), &interrogation);
        assert_eq!(profile.interior_exterior, InteriorExterior::Both);
    }

    #[test]
    fn dominant_cold_signs_classify_cold() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "pale", "coating_color": "white"}},
            "hands": {"data": {"temperature": "cold"}}
        }));
        determine_hot_cold(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(profile.hot_cold, HotCold::Cold);
        assert!(profile.reasoning_notes[0].contains("pale tongue body"));
        assert!(profile.reasoning_notes[0].contains("cold extremities"));
    }

    #[test]
    fn no_thermal_signs_is_neutral() {
        let mut profile = blank_profile(ChiefComplaint::default());
        determine_hot_cold(
            &mut profile,
            &ObservationData::default(),
            &InterrogationData::default(),
        );
        assert_eq!(profile.hot_cold, HotCold::Neutral);
    }

    #[test]
    fn near_equal_counts_are_mixed() {
        let mut profile = blank_profile(ChiefComplaint::default());
        // Two hot signs vs two cold signs: neither reaches 1.5x dominance.
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "red", "coating_color": "white"}},
            "hands": {"data": {"temperature": "hot_palms"}},
            "feet": {"data": {"temperature": "cold"}}
        }));
        determine_hot_cold(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(profile.hot_cold, HotCold::Mixed);
    }

    #[test]
    fn deficiency_dominance_classifies_deficiency() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let observation = obs(serde_json::json!({
            "shen": {"data": {"overall": "weak"}},
            "voice": {"data": {"weak": true}}
        }));
        let interrogation = interr(serde_json::json!({
            "energy-vitality": {"data": {"energy_level": "Exhausted"}},
            "stools-urine": {"data": {"stool_consistency": "Loose/watery"}},
            "thirst-appetite": {"data": {"appetite": "Poor appetite"}}
        }));
        determine_excess_deficiency(&mut profile, &observation, &interrogation);
        assert_eq!(profile.excess_deficiency, ExcessDeficiency::Deficiency);
    }

    #[test]
    fn no_signs_with_normal_energy_falls_back_to_mixed() {
        let mut profile = blank_profile(ChiefComplaint::default());
        determine_excess_deficiency(
            &mut profile,
            &ObservationData::default(),
            &InterrogationData::default(),
        );
        assert_eq!(profile.excess_deficiency, ExcessDeficiency::Mixed);
    }

    #[test]
    fn yin_yang_majority_rule_covers_all_combinations() {
        use ExcessDeficiency as Ed;
        use InteriorExterior as Ie;
        use HotCold as Hc;

        let ie_values = [Ie::Interior, Ie::Exterior, Ie::Both];
        let hc_values = [Hc::Hot, Hc::Cold, Hc::Mixed, Hc::Neutral];
        let ed_values = [Ed::Excess, Ed::Deficiency, Ed::Mixed];

        for ie in ie_values {
            for hc in hc_values {
                for ed in ed_values {
                    let mut profile = blank_profile(ChiefComplaint::default());
                    profile.interior_exterior = ie;
                    profile.hot_cold = hc;
                    profile.excess_deficiency = ed;
                    determine_yin_yang(&mut profile);

                    let yang = (ie == Ie::Exterior) as i32
                        + (hc == Hc::Hot) as i32
                        + (ed == Ed::Excess) as i32;
                    let yin = (ie == Ie::Interior) as i32
                        + (hc == Hc::Cold) as i32
                        + (ed == Ed::Deficiency) as i32;
                    let expected = if yang > yin {
                        YinYang::Yang
                    } else if yin > yang {
                        YinYang::Yin
                    } else {
                        YinYang::Balanced
                    };
                    assert_eq!(profile.yin_yang, expected, "{ie:?}/{hc:?}/{ed:?}");
                }
            }
        }
    }

    #[test]
    fn greasy_thick_coating_yields_dampness_and_phlegm_once() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"coating_thickness": "thick", "coating_quality": "greasy"}},
            "body_type": {"data": {"overweight": true}}
        }));
        identify_pathogenic_factors(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(
            profile.pathogenic_factors,
            vec![PathogenicFactor::Dampness, PathogenicFactor::Phlegm]
        );
    }

    #[test]
    fn fire_requires_heat_first() {
        // Dark red tongue alone, without a hot classification, is not fire.
        let mut profile = blank_profile(ChiefComplaint::default());
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "dark red"}}
        }));
        identify_pathogenic_factors(&mut profile, &observation, &InterrogationData::default());
        assert!(profile.pathogenic_factors.is_empty());

        profile.hot_cold = HotCold::Hot;
        identify_pathogenic_factors(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(
            profile.pathogenic_factors,
            vec![PathogenicFactor::Heat, PathogenicFactor::Fire]
        );
    }

    #[test]
    fn wind_needs_exterior_with_headache_and_body_aches() {
        let mut profile = blank_profile(ChiefComplaint::default());
        profile.interior_exterior = InteriorExterior::Exterior;
        let interrogation = interr(serde_json::json!({
            "head-body": {"data": {"headaches": true, "body_aches": ["Limbs"]}}
        }));
        identify_pathogenic_factors(&mut profile, &ObservationData::default(), &interrogation);
        assert_eq!(profile.pathogenic_factors, vec![PathogenicFactor::Wind]);
    }

    #[test]
    fn qi_deficiency_takes_priority_over_stagnation() {
        let mut profile = blank_profile(ChiefComplaint {
            primary_concern: Some("abdominal pain".to_string()),
            ..Default::default()
        });
        let observation = obs(serde_json::json!({
            "shen": {"data": {"overall": "weak"}},
            "voice": {"data": {"weak": true}}
        }));
        assess_qi_status(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(profile.qi_status, QiStatus::Deficient);
    }

    #[test]
    fn single_stagnation_sign_suffices() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let interrogation = interr(serde_json::json!({
            "emotions": {"data": {"emotional_state": "Frustrated"}}
        }));
        assess_qi_status(&mut profile, &ObservationData::default(), &interrogation);
        assert_eq!(profile.qi_status, QiStatus::Stagnant);
    }

    #[test]
    fn blood_statuses_check_in_priority_order() {
        let mut profile = blank_profile(ChiefComplaint::default());
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "purple", "features": ["purple_spots"]}}
        }));
        assess_blood_status(&mut profile, &observation);
        assert_eq!(profile.blood_status, BloodStatus::Stagnant);

        let mut profile = blank_profile(ChiefComplaint::default());
        profile.hot_cold = HotCold::Hot;
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "dark red"}}
        }));
        assess_blood_status(&mut profile, &observation);
        assert_eq!(profile.blood_status, BloodStatus::Heat);
    }

    #[test]
    fn fluid_excess_follows_detected_dampness() {
        let mut profile = blank_profile(ChiefComplaint::default());
        profile.pathogenic_factors = vec![PathogenicFactor::Dampness];
        assess_fluid_status(
            &mut profile,
            &ObservationData::default(),
            &InterrogationData::default(),
        );
        assert_eq!(profile.fluid_status, FluidStatus::Excess);
    }

    #[test]
    fn organ_detection_reads_earlier_stage_outputs() {
        let mut profile = blank_profile(ChiefComplaint::default());
        profile.hot_cold = HotCold::Cold;
        profile.qi_status = QiStatus::Deficient;
        profile
            .reasoning_notes
            .push("Cold signs: cold extremities".to_string());
        let interrogation = interr(serde_json::json!({
            "energy-vitality": {"data": {"energy_level": "Very low"}}
        }));
        identify_affected_organs(&mut profile, &ObservationData::default(), &interrogation);
        assert_eq!(profile.affected_organs, vec![Organ::Kidney, Organ::Lung]);
    }

    #[test]
    fn chief_complaint_keywords_add_organ_pairs() {
        let mut profile = blank_profile(ChiefComplaint {
            primary_concern: Some("Digestive trouble and fatigue".to_string()),
            ..Default::default()
        });
        identify_affected_organs(
            &mut profile,
            &ObservationData::default(),
            &InterrogationData::default(),
        );
        assert_eq!(
            profile.affected_organs,
            vec![Organ::Kidney, Organ::Spleen, Organ::Stomach]
        );
    }

    #[test]
    fn completeness_counts_the_fixed_roster() {
        let cc = ChiefComplaint {
            primary_concern: Some("fatigue".to_string()),
            ..Default::default()
        };
        let mut profile = blank_profile(cc.clone());
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "pale"}, "completed": true},
            "shen": {"data": {"overall": "weak"}, "completed": true}
        }));
        let interrogation = interr(serde_json::json!({
            "energy-vitality": {"data": {"energy_level": "Low"}, "completed": true}
        }));
        assess_completeness(&mut profile, &observation, &interrogation, &cc);
        // 3 populated sections + 1 complaint part + 3 key data points
        // (tongue body color, shen, energy level).
        assert!((profile.data_completeness - 7.0 / 36.0).abs() < 1e-9);
    }

    #[test]
    fn completeness_is_monotonic_and_bounded() {
        let base_obs = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "pale"}}
        }));
        let richer_obs = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "pale"}},
            "complexion": {"data": {"primary_color": "pale"}}
        }));
        let interrogation = InterrogationData::default();
        let cc = ChiefComplaint::default();

        let mut base = blank_profile(cc.clone());
        assess_completeness(&mut base, &base_obs, &interrogation, &cc);
        let mut richer = blank_profile(cc.clone());
        assess_completeness(&mut richer, &richer_obs, &interrogation, &cc);

        assert!(richer.data_completeness >= base.data_completeness);
        assert!(base.data_completeness >= 0.0 && base.data_completeness <= 1.0);
    }

    #[test]
    fn manifestations_include_non_neutral_temperature() {
        let mut profile = blank_profile(ChiefComplaint::default());
        profile.hot_cold = HotCold::Hot;
        let observation = obs(serde_json::json!({
            "tongue": {"data": {"body_color": "red", "coating_color": "yellow"}}
        }));
        compile_key_manifestations(&mut profile, &observation, &InterrogationData::default());
        assert_eq!(
            profile.key_manifestations,
            vec!["Tongue: red", "Coating: yellow", "Temperature: hot"]
        );
    }
}
