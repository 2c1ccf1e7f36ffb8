//! Service health and per-patient health summaries.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response of `GET /api/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub agents: BTreeMap<String, String>,
    #[serde(default)]
    pub azure_services: BTreeMap<String, String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Aggregated view of a patient's current care, computed by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub patient_id: String,
    pub overall_status: String,
    #[serde(default)]
    pub active_conditions: Vec<String>,
    pub active_medications: u32,
    pub upcoming_appointments: u32,
    pub open_care_gaps: u32,
    #[serde(default)]
    pub critical_alerts: Vec<String>,
    #[serde(with = "crate::timestamp")]
    pub last_updated: NaiveDateTime,
}
