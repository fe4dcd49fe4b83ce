//! Static drug-interaction screening.
//!
//! `detect` walks the fixed table of known pairwise interactions in
//! [`table`] and reports every record whose two drugs are both present in
//! the supplied medication list. Name matching is loose on purpose:
//! bidirectional case-insensitive substring containment, so
//! "amoxicillin 500mg tablet" still hits the Amoxicillin records and
//! partial brand-name variants are tolerated.

pub mod table;

use serde::Serialize;

use crate::models::enums::InteractionSeverity;

/// A known risk between two named medications.
///
/// Records live only in the static table; severity is attached statically,
/// never computed. The severity labels gate urgent-versus-informational
/// handling downstream, so they are part of the data contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRecord {
    pub drug_a: &'static str,
    pub drug_b: &'static str,
    pub severity: InteractionSeverity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Screen a medication list against the known-interaction table.
///
/// Returns the matching records in table order; a record appears at most
/// once per query regardless of how many supplied names hit it or which
/// orientation they hit it in. Pure and total: an empty list yields an
/// empty result.
pub fn detect<S: AsRef<str>>(medication_names: &[S]) -> Vec<&'static InteractionRecord> {
    let lowered: Vec<String> = medication_names
        .iter()
        .map(|name| name.as_ref().to_lowercase())
        .collect();

    table::KNOWN_INTERACTIONS
        .iter()
        .filter(|record| {
            drug_present(&lowered, record.drug_a) && drug_present(&lowered, record.drug_b)
        })
        .collect()
}

/// True when any supplied name matches `drug` in either direction.
fn drug_present(lowered_names: &[String], drug: &str) -> bool {
    let drug = drug.to_lowercase();
    lowered_names
        .iter()
        .any(|name| name.contains(&drug) || drug.contains(name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::InteractionSeverity;

    // =================================================================
    // DETECTION
    // =================================================================

    #[test]
    fn warfarin_aspirin_is_high_severity() {
        let found = detect(&["Aspirin", "Warfarin"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].drug_a, "Warfarin");
        assert_eq!(found[0].drug_b, "Aspirin");
        assert_eq!(found[0].severity, InteractionSeverity::High);
    }

    #[test]
    fn detection_is_symmetric_in_name_order() {
        let ab = detect(&["Aspirin", "Warfarin"]);
        let ba = detect(&["Warfarin", "Aspirin"]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn dose_suffixes_are_tolerated() {
        // Supplied name contains the table drug as a substring.
        let found = detect(&["amoxicillin 500mg tablet", "warfarin"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].drug_a, "Amoxicillin");
        assert_eq!(found[0].severity, InteractionSeverity::Moderate);
    }

    #[test]
    fn partial_names_are_tolerated() {
        // Supplied name is contained within the table drug.
        let found = detect(&["simva", "grapefruit juice"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].drug_a, "Simvastatin");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let found = detect(&["METFORMIN", "alcohol"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].severity, InteractionSeverity::High);
    }

    // =================================================================
    // NO FALSE POSITIVES / TOTALITY
    // =================================================================

    #[test]
    fn single_unrelated_drug_yields_nothing() {
        assert!(detect(&["Atorvastatin"]).is_empty());
    }

    #[test]
    fn one_half_of_a_pair_is_not_enough() {
        assert!(detect(&["Warfarin"]).is_empty());
        assert!(detect(&["Ibuprofen", "Metformin"]).is_empty());
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert!(detect::<&str>(&[]).is_empty());
    }

    // =================================================================
    // ORDERING / IDEMPOTENCE
    // =================================================================

    #[test]
    fn results_follow_table_order() {
        // All five records' drugs supplied at once, shuffled.
        let meds = [
            "Grapefruit", "Aspirin", "Alcohol", "Ibuprofen",
            "Warfarin", "Simvastatin", "Metformin", "Lisinopril", "Amoxicillin",
        ];
        let found = detect(&meds);
        assert_eq!(found.len(), table::KNOWN_INTERACTIONS.len());
        let expected: Vec<&InteractionRecord> = table::KNOWN_INTERACTIONS.iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn detect_is_idempotent() {
        let meds = ["warfarin", "aspirin", "metformin", "alcohol"];
        assert_eq!(detect(&meds), detect(&meds));
    }

    #[test]
    fn duplicate_and_near_duplicate_names_do_not_double_report() {
        let found = detect(&["warfarin", "Warfarin 5mg", "aspirin", "aspirin 81mg"]);
        assert_eq!(found.len(), 1);
    }
}
