//! Appointments across providers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Booking state of an appointment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

/// An appointment as returned by the service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub provider_name: String,
    pub specialty: String,
    pub facility: String,
    #[serde(with = "crate::timestamp")]
    pub appointment_date: NaiveDateTime,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: AppointmentStatus,
    pub reason: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub telehealth: bool,
}

/// Request body for booking an appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub patient_id: String,
    pub provider_name: String,
    pub specialty: String,
    pub facility: String,
    #[serde(with = "crate::timestamp")]
    pub appointment_date: NaiveDateTime,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    pub reason: String,
    #[serde(default)]
    pub telehealth: bool,
}

fn default_duration_minutes() -> u32 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_duration_and_telehealth() {
        let json = r#"{
            "patient_id": "patient-001",
            "provider_name": "Dr. Sarah Chen",
            "specialty": "Endocrinology",
            "facility": "Springfield Diabetes Center",
            "appointment_date": "2026-11-02T10:30:00",
            "reason": "Quarterly A1C check"
        }"#;

        let create: AppointmentCreate = serde_json::from_str(json).expect("should parse");
        assert_eq!(create.duration_minutes, 30);
        assert!(!create.telehealth);
    }

    #[test]
    fn no_show_status_round_trips_on_the_wire() {
        let parsed: AppointmentStatus = serde_json::from_str("\"no-show\"").expect("parse");
        assert_eq!(parsed, AppointmentStatus::NoShow);
    }
}
