use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::SymptomSeverity;

/// A symptom entry in the tracking view's local log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomLogEntry {
    pub id: Uuid,
    pub description: String,
    pub severity: SymptomSeverity,
    pub recorded_at: DateTime<Utc>,
}

impl SymptomLogEntry {
    pub fn new(description: impl Into<String>, severity: SymptomSeverity) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            severity,
            recorded_at: Utc::now(),
        }
    }
}
