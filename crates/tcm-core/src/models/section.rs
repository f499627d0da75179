use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One recorded examination section as the persistence layer hands it over:
/// the section's field values plus whether the practitioner marked the
/// section as completed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionRecord<T> {
    pub data: T,
    #[serde(default)]
    pub completed: bool,
}

impl<T> SectionRecord<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            completed: false,
        }
    }

    pub fn completed(data: T) -> Self {
        Self {
            data,
            completed: true,
        }
    }
}

/// Untyped section payload for interview sections no inference rule reads.
/// They still count toward data completeness when populated.
pub type FieldMap = BTreeMap<String, serde_json::Value>;
