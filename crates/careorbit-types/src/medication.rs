//! Medication records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a prescription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicationStatus {
    #[default]
    Active,
    Stopped,
    OnHold,
    Completed,
}

/// A medication as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub prescriber: String,
    pub specialty: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MedicationStatus,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub interactions: Vec<String>,
    #[serde(default)]
    pub refills_remaining: u32,
}

/// Request body for recording a new medication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicationCreate {
    pub patient_id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub prescriber: String,
    pub specialty: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub instructions: Option<String>,
}
