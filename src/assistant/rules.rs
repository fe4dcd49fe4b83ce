//! Ordered rule table for the scripted assistant.
//!
//! Rules are evaluated in declaration order and the first match wins, so
//! the drug-plus-topic rules sit above the broad single-topic rules.
//! Reordering changes observable behavior and is a compatibility break.

use super::Rule;

/// Greeting seeded as the first assistant turn of every conversation.
pub const GREETING: &str = "Hello! I'm your MediSense voice assistant. I can help you with questions about your medications, dosages, side effects, and drug interactions. How can I assist you today?";

/// Returned when no rule fires.
pub const FALLBACK_RESPONSE: &str = "I understand you have a question about medications. While I can provide general information, please remember that I cannot replace professional medical advice. For specific medical concerns, always consult with your healthcare provider, pharmacist, or call emergency services if it's urgent. Is there a specific aspect of medication management I can help you with?";

/// Prompts the shell offers on the assistant page.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "What are the side effects of ibuprofen?",
    "What's the correct dosage for amoxicillin?",
    "Does lisinopril interact with other medicines?",
    "When should I take my blood pressure medication?",
    "Can I take ibuprofen with food?",
    "What should I do if I miss a dose?",
    "Are there any foods I should avoid with warfarin?",
    "How long should I take antibiotics?",
    "What are the signs of an allergic reaction?",
    "Can I drink alcohol while taking this medication?",
];

/// The keyword rules, in match order.
pub static RULES: &[Rule] = &[
    Rule {
        keywords: &[&["ibuprofen"], &["side effect"]],
        response: "Ibuprofen side effects include: Common (1-10%): stomach upset, heartburn, nausea, dizziness, headache. Serious (rare): stomach ulcers, kidney problems, increased cardiovascular risk. Take with food, maximum 1200mg/day for adults. Seek immediate care for: severe stomach pain, black stools, difficulty breathing, or chest pain.",
    },
    Rule {
        keywords: &[&["amoxicillin"], &["dosage", "dose"]],
        response: "Amoxicillin dosing: Adults: 500mg every 8 hours OR 875mg every 12 hours. Children: 20-40mg/kg/day divided into 2-3 doses. Duration: typically 7-10 days. CRITICAL: Complete full course even if feeling better. Can take with/without food. Contact doctor if: severe diarrhea, rash, or breathing difficulties occur.",
    },
    Rule {
        keywords: &[&["blood pressure"], &["medication", "medicine"]],
        response: "Blood pressure medications work best when taken consistently at the same time daily. Common types: ACE inhibitors (lisinopril), ARBs (losartan), diuretics (hydrochlorothiazide), beta-blockers (metoprolol). Monitor BP regularly, avoid sudden position changes, limit sodium intake. Never stop abruptly - consult doctor first.",
    },
    Rule {
        keywords: &[&["diabetes"], &["medication"]],
        response: "Diabetes medications include: Metformin (first-line), insulin, sulfonylureas, SGLT2 inhibitors. Take as prescribed, monitor blood sugar, maintain consistent meal timing. Signs of low blood sugar: shakiness, sweating, confusion, rapid heartbeat. Always carry glucose tablets. Regular A1C testing recommended.",
    },
    Rule {
        keywords: &[&["antibiotic"], &["resistance"]],
        response: "Antibiotic resistance occurs when bacteria adapt to survive antibiotic treatment. Prevention: Take full prescribed course, never share antibiotics, don't save leftover pills, never pressure doctors for antibiotics for viral infections. Proper use preserves effectiveness for future serious infections.",
    },
    Rule {
        keywords: &[&["generic"], &["brand"]],
        response: "Generic medications contain the same active ingredients as brand names, with identical strength, dosage, and effectiveness. FDA requires bioequivalence testing. Generics cost 80-85% less than brands. Inactive ingredients may differ, rarely affecting tolerability. Switching requires doctor approval for certain medications.",
    },
    Rule {
        keywords: &[&["lisinopril"], &["interact"]],
        response: "Lisinopril can interact with several medications including NSAIDs (like ibuprofen), potassium supplements, lithium, and certain diuretics. It may also interact with diabetes medications, causing low blood sugar. Always inform your healthcare provider about all medications and supplements you're taking. Avoid salt substitutes containing potassium unless approved by your doctor.",
    },
    Rule {
        keywords: &[&["blood pressure"], &["when"]],
        response: "Blood pressure medications like lisinopril are typically taken once daily, preferably at the same time each day. Many people take them in the morning, but your doctor may recommend evening dosing if you experience dizziness. Consistency is key - try to take it at the same time every day for best results.",
    },
    Rule {
        keywords: &[&["ibuprofen"], &["food"]],
        response: "Yes, it's recommended to take ibuprofen with food or milk to reduce stomach irritation. Taking it on an empty stomach can increase the risk of stomach upset, ulcers, and bleeding. If you must take it without food, consider taking it with a full glass of water.",
    },
    Rule {
        keywords: &[&["miss"], &["dose"]],
        response: "If you miss a dose, take it as soon as you remember, unless it's almost time for your next dose. Never double up on doses to make up for a missed one. For critical medications like blood pressure or heart medications, contact your healthcare provider for specific guidance. Setting up medication reminders can help prevent missed doses.",
    },
    Rule {
        keywords: &[&["warfarin"], &["food"]],
        response: "With warfarin, maintain consistent vitamin K intake. Foods high in vitamin K include leafy greens like spinach, kale, and broccoli. You don't need to avoid these foods, but keep your intake consistent. Avoid excessive alcohol, cranberry juice, and grapefruit juice. Always consult your doctor before making significant dietary changes.",
    },
    Rule {
        keywords: &[&["antibiotic"], &["long"]],
        response: "The duration of antibiotic treatment varies by infection type and severity, typically ranging from 3-14 days. It's crucial to complete the entire prescribed course, even if you feel better before finishing. Stopping early can lead to antibiotic resistance and infection recurrence. Never save leftover antibiotics for future use.",
    },
    Rule {
        keywords: &[&["allergic reaction"], &["sign"]],
        response: "Signs of allergic reactions to medications include skin rash, hives, itching, swelling (especially face, lips, tongue, or throat), difficulty breathing, wheezing, dizziness, or rapid heartbeat. Severe reactions (anaphylaxis) require immediate emergency care. If you experience any of these symptoms after taking medication, seek medical attention immediately.",
    },
    Rule {
        keywords: &[&["alcohol"], &["medication"]],
        response: "Alcohol can interact dangerously with many medications, including antibiotics, pain relievers, blood thinners, and antidepressants. It can increase side effects, reduce medication effectiveness, or cause dangerous reactions. Always check with your healthcare provider or pharmacist about alcohol interactions with your specific medications.",
    },
    Rule {
        keywords: &[&["dosage", "dose"]],
        response: "Medication dosages vary depending on the specific drug, your age, weight, medical condition, and other factors. Always follow the dosage instructions on your prescription label or medication package. Never exceed the recommended dose unless directed by your healthcare provider. If you're unsure about your dosage, consult your doctor or pharmacist.",
    },
    Rule {
        keywords: &[&["interact", "combination"]],
        response: "Drug interactions can be serious and potentially dangerous. Some medications can increase or decrease the effectiveness of others, or cause harmful side effects when combined. Always inform your healthcare provider about all medications, supplements, and herbal products you're taking. You can also use our drug interaction checker for preliminary screening.",
    },
    Rule {
        keywords: &[&["when"], &["take", "medication"]],
        response: "The timing of medication depends on the specific drug and your doctor's instructions. Some medications should be taken with food to reduce stomach irritation, while others work best on an empty stomach. Some are taken once daily, others multiple times. Always follow the schedule prescribed by your healthcare provider and try to take medications at the same times each day.",
    },
    Rule {
        keywords: &[&["side effect"]],
        response: "Side effects vary by medication, but common ones include nausea, dizziness, headache, and drowsiness. Most side effects are mild and temporary. However, contact your healthcare provider if you experience severe or persistent side effects. Keep a record of any side effects you experience to discuss with your doctor.",
    },
    Rule {
        keywords: &[&["storage", "store"]],
        response: "Most medications should be stored in a cool, dry place away from direct sunlight, typically at room temperature (68-77°F). Avoid storing medications in bathrooms or kitchens where humidity and temperature fluctuate. Some medications require refrigeration. Always check the label for specific storage instructions and keep medications in their original containers.",
    },
    Rule {
        keywords: &[&["expire", "expiration"]],
        response: "Never use expired medications as they may be less effective or potentially harmful. Most medications remain stable for 1-2 years past their expiration date when stored properly, but this varies by medication type. Dispose of expired medications safely through pharmacy take-back programs or follow FDA disposal guidelines.",
    },
];
