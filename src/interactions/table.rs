//! Known pairwise interaction facts.
//!
//! Five records, embedded as static data and immutable for the process
//! lifetime. Each unordered pair appears exactly once; `detect` relies on
//! that to report a pair at most once per query.

use super::InteractionRecord;
use crate::models::enums::InteractionSeverity;

pub static KNOWN_INTERACTIONS: &[InteractionRecord] = &[
    InteractionRecord {
        drug_a: "Amoxicillin",
        drug_b: "Warfarin",
        severity: InteractionSeverity::Moderate,
        description: "Amoxicillin may increase the anticoagulant effect of warfarin by altering gut bacteria that produce vitamin K, potentially leading to increased bleeding risk.",
        recommendation: "Monitor INR more frequently (every 3-5 days initially). Watch for signs of bleeding: unusual bruising, nosebleeds, dark stools. Consider dose adjustment of warfarin if necessary.",
    },
    InteractionRecord {
        drug_a: "Lisinopril",
        drug_b: "Ibuprofen",
        severity: InteractionSeverity::Moderate,
        description: "NSAIDs like ibuprofen may reduce the antihypertensive effect of ACE inhibitors by inhibiting prostaglandin synthesis and increase the risk of acute kidney injury.",
        recommendation: "Use lowest effective dose of NSAID for shortest duration. Monitor blood pressure weekly and kidney function (creatinine, BUN). Consider alternative pain management.",
    },
    InteractionRecord {
        drug_a: "Metformin",
        drug_b: "Alcohol",
        severity: InteractionSeverity::High,
        description: "Alcohol can increase the risk of lactic acidosis when combined with metformin, especially in patients with kidney or liver problems. Both can affect lactate metabolism.",
        recommendation: "Limit alcohol to 1 drink/day for women, 2 for men. Avoid binge drinking completely. Stop metformin if experiencing nausea, vomiting, stomach pain, or unusual fatigue.",
    },
    InteractionRecord {
        drug_a: "Warfarin",
        drug_b: "Aspirin",
        severity: InteractionSeverity::High,
        description: "Combining warfarin with aspirin significantly increases bleeding risk through different anticoagulant mechanisms.",
        recommendation: "Generally contraindicated unless specifically prescribed by cardiologist. Requires frequent INR monitoring and bleeding assessment.",
    },
    InteractionRecord {
        drug_a: "Simvastatin",
        drug_b: "Grapefruit",
        severity: InteractionSeverity::Moderate,
        description: "Grapefruit juice inhibits CYP3A4 enzyme, increasing simvastatin levels and risk of muscle toxicity (rhabdomyolysis).",
        recommendation: "Avoid grapefruit juice completely. Watch for muscle pain, weakness, or dark urine. Consider switching to pravastatin or rosuvastatin if needed.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_five_records() {
        assert_eq!(KNOWN_INTERACTIONS.len(), 5);
    }

    #[test]
    fn each_pair_appears_once() {
        for (i, a) in KNOWN_INTERACTIONS.iter().enumerate() {
            for b in &KNOWN_INTERACTIONS[i + 1..] {
                let same = (a.drug_a == b.drug_a && a.drug_b == b.drug_b)
                    || (a.drug_a == b.drug_b && a.drug_b == b.drug_a);
                assert!(!same, "duplicate pair: {} + {}", a.drug_a, a.drug_b);
            }
        }
    }

    #[test]
    fn high_severity_records_are_the_expected_ones() {
        let high: Vec<_> = KNOWN_INTERACTIONS
            .iter()
            .filter(|r| r.severity == InteractionSeverity::High)
            .map(|r| (r.drug_a, r.drug_b))
            .collect();
        assert_eq!(high, vec![("Metformin", "Alcohol"), ("Warfarin", "Aspirin")]);
    }

    #[test]
    fn guidance_text_is_present() {
        for record in KNOWN_INTERACTIONS {
            assert!(!record.description.is_empty());
            assert!(!record.recommendation.is_empty());
        }
    }
}
