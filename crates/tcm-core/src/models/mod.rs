pub mod analysis;
pub mod chief_complaint;
pub mod interrogation;
pub mod observation;
pub mod pattern;
pub mod profile;
pub mod section;

pub use analysis::PatternAnalysis;
pub use chief_complaint::ChiefComplaint;
pub use interrogation::InterrogationData;
pub use observation::ObservationData;
pub use pattern::{PatternMatch, PatternSummary};
pub use profile::{
    BloodStatus, EightPrinciples, ExcessDeficiency, FluidStatus, HotCold, InteriorExterior,
    Organ, PathogenicFactor, ProfileSummary, QiBloodFluids, QiStatus, TcmProfile, YinYang,
};
pub use section::{FieldMap, SectionRecord};
