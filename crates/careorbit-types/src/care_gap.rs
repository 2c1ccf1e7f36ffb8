//! Care gaps: guideline-driven actions a patient is missing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// How urgently a care gap needs attention.
///
/// Variants are declared from least to most severe so `Ord` follows urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareGapSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// A detected care gap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CareGap {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub severity: CareGapSeverity,
    pub category: String,
    pub guideline_reference: String,
    pub recommended_action: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(with = "crate::timestamp")]
    pub detected_at: NaiveDateTime,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default, with = "crate::timestamp::option")]
    pub resolved_at: Option<NaiveDateTime>,
}

/// Acknowledgement returned when a care gap is marked resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareGapResolution {
    pub status: String,
    pub gap_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_urgency() {
        assert!(CareGapSeverity::Critical > CareGapSeverity::High);
        assert!(CareGapSeverity::High > CareGapSeverity::Medium);
        assert!(CareGapSeverity::Medium > CareGapSeverity::Low);
    }

    #[test]
    fn parses_open_care_gap() {
        let json = r#"{
            "id": "gap-001",
            "patient_id": "patient-001",
            "title": "Overdue Diabetic Eye Exam",
            "description": "Last retinal exam was 18 months ago.",
            "severity": "high",
            "category": "Preventive Care",
            "guideline_reference": "HEDIS Comprehensive Diabetes Care - Eye Exam",
            "recommended_action": "Schedule dilated eye exam",
            "due_date": "2026-11-14",
            "detected_at": "2026-10-15T08:00:00.5",
            "resolved": false,
            "resolved_at": null
        }"#;

        let gap: CareGap = serde_json::from_str(json).expect("should parse care gap");
        assert_eq!(gap.severity, CareGapSeverity::High);
        assert!(!gap.resolved);
        assert!(gap.resolved_at.is_none());
    }
}
