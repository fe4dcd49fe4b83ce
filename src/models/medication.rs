use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medication as held by the tracking, reminder, and interaction views.
///
/// `name` is free text — it is never validated against a drug registry, and
/// the interaction screen matches it loosely (see `crate::interactions`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub last_taken: Option<DateTime<Utc>>,
    pub next_due: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Medication {
    /// New active medication with no dose history yet.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            last_taken: None,
            next_due: None,
            active: true,
        }
    }
}
