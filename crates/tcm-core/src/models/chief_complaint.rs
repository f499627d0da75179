use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::fields::is_present;

/// The chief complaint as recorded at intake. All free text; the reasoning
/// engine runs simple keyword checks over `primary_concern` and passes the
/// whole record through the profile verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ChiefComplaint {
    pub western_conditions: Option<String>,
    pub primary_concern: Option<String>,
    pub recent_symptoms: Option<String>,
}

impl ChiefComplaint {
    pub fn from_json(value: serde_json::Value) -> Result<Self, CoreError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Number of its three parts that carry text.
    pub fn populated_parts(&self) -> usize {
        [
            &self.western_conditions,
            &self.primary_concern,
            &self.recent_symptoms,
        ]
        .into_iter()
        .filter(|f| is_present(f))
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_populated_parts() {
        let cc = ChiefComplaint {
            primary_concern: Some("Chronic digestive issues".to_string()),
            ..Default::default()
        };
        assert_eq!(cc.populated_parts(), 1);
        assert_eq!(ChiefComplaint::default().populated_parts(), 0);
    }
}
