//! Medicine scan report parsing.
//!
//! The remote scan endpoint answers with markdown-ish free text along the
//! lines of `**Medicine Name:** Paracetamol **Usage:** ... **Side
//! Effects:** ... **Precautions:** ...`. This module splits out the
//! labeled segments for display. It never fails: text without the markers
//! simply produces an empty report, which the shell renders as-is.

use serde::{Deserialize, Serialize};

/// Field labels, in the order the backend emits them.
const MEDICINE_NAME: &str = "Medicine Name:";
const USAGE: &str = "Usage:";
const SIDE_EFFECTS: &str = "Side Effects:";
const PRECAUTIONS: &str = "Precautions:";

/// Labeled segments extracted from a raw scan answer.
///
/// A field is `Some` only when its marker was found and the segment is
/// non-empty after cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub medicine_name: Option<String>,
    pub usage: Option<String>,
    pub side_effects: Option<String>,
    pub precautions: Option<String>,
}

impl ScanReport {
    /// True when no labeled field was found.
    pub fn is_empty(&self) -> bool {
        self.medicine_name.is_none()
            && self.usage.is_none()
            && self.side_effects.is_none()
            && self.precautions.is_none()
    }
}

/// Split a raw scan answer into its labeled fields.
pub fn parse_scan_report(raw: &str) -> ScanReport {
    ScanReport {
        medicine_name: extract(raw, MEDICINE_NAME, Some(USAGE)),
        usage: extract(raw, USAGE, Some(SIDE_EFFECTS)),
        side_effects: extract(raw, SIDE_EFFECTS, Some(PRECAUTIONS)),
        precautions: extract(raw, PRECAUTIONS, None),
    }
}

/// Take the text between `<label>**` and the next `**<next_label>` (or the
/// end of input), trimmed and with leftover emphasis asterisks stripped.
fn extract(raw: &str, label: &str, next_label: Option<&str>) -> Option<String> {
    let marker = format!("{label}**");
    let start = raw.find(&marker)? + marker.len();
    let rest = &raw[start..];

    let segment = match next_label.map(|next| format!("**{next}")) {
        Some(stop) => match rest.find(&stop) {
            Some(end) => &rest[..end],
            None => rest,
        },
        None => rest,
    };

    let cleaned = segment.replace('*', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
