//! Built-in medical vocabulary.
//!
//! Every term starts and ends with a word character so whole-word matching applies at both
//! edges.

use super::TermCategory::{self, Condition, General, Measurement, Medication, Procedure};

/// `(term, simplified form, description, category)`
pub(crate) const BUILTIN_TERMS: &[(&str, &str, &str, TermCategory)] = &[
    // Conditions
    (
        "hypertension",
        "High blood pressure",
        "Blood pushes too hard against the walls of your blood vessels.",
        Condition,
    ),
    (
        "hypotension",
        "Low blood pressure",
        "Blood pressure is lower than normal, which can cause dizziness.",
        Condition,
    ),
    (
        "type 2 diabetes mellitus",
        "Type 2 diabetes",
        "Your body does not use insulin well, so blood sugar stays too high.",
        Condition,
    ),
    (
        "diabetes mellitus",
        "Diabetes",
        "A long-term condition where blood sugar is too high.",
        Condition,
    ),
    (
        "hyperglycemia",
        "High blood sugar",
        "Too much sugar in the blood.",
        Condition,
    ),
    (
        "hypoglycemia",
        "Low blood sugar",
        "Too little sugar in the blood. It can cause shaking, sweating or confusion.",
        Condition,
    ),
    (
        "chronic heart failure",
        "Long-term heart weakness",
        "The heart has not pumped as well as it should for a long time.",
        Condition,
    ),
    (
        "heart failure",
        "Heart weakness",
        "The heart does not pump blood as well as it should.",
        Condition,
    ),
    (
        "myocardial infarction",
        "Heart attack",
        "Blood flow to part of the heart was blocked.",
        Condition,
    ),
    (
        "COPD",
        "Long-term lung disease",
        "Chronic obstructive pulmonary disease makes it hard to breathe out.",
        Condition,
    ),
    (
        "osteoarthritis",
        "Wear-and-tear arthritis",
        "The cushioning in your joints wears down, causing pain and stiffness.",
        Condition,
    ),
    (
        "major depressive disorder",
        "Depression",
        "A lasting low mood that affects daily life.",
        Condition,
    ),
    (
        "hyperlipidemia",
        "High cholesterol",
        "Too much fat, like cholesterol, in the blood.",
        Condition,
    ),
    (
        "hyperkalemia",
        "High potassium",
        "Too much potassium in the blood, which can affect the heartbeat.",
        Condition,
    ),
    (
        "edema",
        "Swelling",
        "Fluid builds up in the body, often in the legs or feet.",
        Condition,
    ),
    (
        "dyspnea",
        "Shortness of breath",
        "Feeling like you cannot get enough air.",
        Condition,
    ),
    (
        "tachycardia",
        "Fast heartbeat",
        "The heart beats faster than normal while resting.",
        Condition,
    ),
    (
        "bradycardia",
        "Slow heartbeat",
        "The heart beats slower than normal.",
        Condition,
    ),
    (
        "diabetic retinopathy",
        "Eye damage from diabetes",
        "High blood sugar has damaged the back of the eye.",
        Condition,
    ),
    (
        "neuropathy",
        "Nerve damage",
        "Damaged nerves can cause numbness, tingling or pain, often in the feet.",
        Condition,
    ),
    (
        "nephropathy",
        "Kidney damage",
        "The kidneys are not filtering blood as well as they should.",
        Condition,
    ),
    // Medications
    (
        "Metformin",
        "Diabetes medicine (Metformin)",
        "Helps lower blood sugar. Take with food to avoid an upset stomach.",
        Medication,
    ),
    (
        "Lisinopril",
        "Blood pressure medicine (Lisinopril)",
        "Relaxes blood vessels to lower blood pressure. May cause a dry cough.",
        Medication,
    ),
    (
        "Carvedilol",
        "Heart medicine (Carvedilol)",
        "Slows the heart and lowers blood pressure. Do not stop suddenly.",
        Medication,
    ),
    (
        "Sertraline",
        "Depression medicine (Sertraline)",
        "Helps with mood. It can take 4 to 6 weeks to work fully.",
        Medication,
    ),
    (
        "Furosemide",
        "Water pill (Furosemide)",
        "Helps your body get rid of extra fluid. Take it early in the day.",
        Medication,
    ),
    (
        "diuretic",
        "Water pill",
        "A medicine that makes you pass more urine to remove extra fluid.",
        Medication,
    ),
    (
        "ACE inhibitor",
        "Blood pressure medicine",
        "Relaxes blood vessels so the heart does not work as hard.",
        Medication,
    ),
    (
        "beta blocker",
        "Heart rate medicine",
        "Slows the heartbeat and lowers blood pressure.",
        Medication,
    ),
    (
        "statin",
        "Cholesterol medicine",
        "Lowers the amount of cholesterol your body makes.",
        Medication,
    ),
    (
        "NSAIDs",
        "Anti-inflammatory pain relievers",
        "Pain medicines like ibuprofen. They can affect the kidneys and stomach.",
        Medication,
    ),
    (
        "MAOIs",
        "Older type of antidepressant",
        "Antidepressants that react badly with many other medicines and foods.",
        Medication,
    ),
    // Measurements
    (
        "A1C",
        "Average blood sugar (3 months)",
        "A blood test showing your average blood sugar over the last 3 months.",
        Measurement,
    ),
    (
        "HbA1c",
        "Average blood sugar (3 months)",
        "A blood test showing your average blood sugar over the last 3 months.",
        Measurement,
    ),
    (
        "blood glucose",
        "Blood sugar",
        "The amount of sugar in your blood right now.",
        Measurement,
    ),
    (
        "eGFR",
        "Kidney function score",
        "Shows how well your kidneys filter your blood.",
        Measurement,
    ),
    (
        "BMI",
        "Body weight score",
        "A number based on your height and weight.",
        Measurement,
    ),
    (
        "systolic",
        "Top blood pressure number",
        "The pressure when your heart beats.",
        Measurement,
    ),
    (
        "diastolic",
        "Bottom blood pressure number",
        "The pressure when your heart rests between beats.",
        Measurement,
    ),
    (
        "LDL",
        "Bad cholesterol",
        "Cholesterol that can build up in your blood vessels.",
        Measurement,
    ),
    (
        "HDL",
        "Good cholesterol",
        "Cholesterol that helps clear other cholesterol from your blood.",
        Measurement,
    ),
    // Procedures
    (
        "retinal exam",
        "Eye exam",
        "A check of the back of your eye.",
        Procedure,
    ),
    (
        "dilated eye exam",
        "Eye exam with drops",
        "Drops widen your pupils so the doctor can see the back of your eye.",
        Procedure,
    ),
    (
        "echocardiogram",
        "Heart ultrasound",
        "Uses sound waves to take moving pictures of your heart.",
        Procedure,
    ),
    (
        "electrocardiogram",
        "Heart rhythm test",
        "Records the electrical signals of your heart.",
        Procedure,
    ),
    (
        "ECG",
        "Heart rhythm test",
        "Records the electrical signals of your heart.",
        Procedure,
    ),
    (
        "colonoscopy",
        "Bowel camera exam",
        "A small camera checks the inside of your large bowel.",
        Procedure,
    ),
    // General
    (
        "chronic",
        "Long-term",
        "Lasting a long time or coming back often.",
        General,
    ),
    (
        "acute",
        "Sudden",
        "Starting quickly and usually short-lived.",
        General,
    ),
    (
        "prognosis",
        "Expected outcome",
        "What is likely to happen with your health over time.",
        General,
    ),
    (
        "contraindicated",
        "Not safe to use",
        "Should not be used because it could cause harm.",
        General,
    ),
    (
        "bilateral",
        "Both sides",
        "Affecting both the left and right side of the body.",
        General,
    ),
    (
        "prophylaxis",
        "Prevention",
        "Treatment given to stop a problem before it starts.",
        General,
    ),
    (
        "PRN",
        "As needed",
        "Take only when you need it.",
        General,
    ),
];
