//! Wire types for the CareOrbit REST API.
//!
//! These are plain data-transfer shapes exchanged with the remote coordination service.
//! They carry no behaviour beyond serialisation: the client forwards them unchanged and the
//! service owns every business rule (summaries, severity ordering, orchestration).
//!
//! Field names follow the service's snake_case JSON. Timestamps are naive ISO-8601
//! date-times because the service emits them without an offset; [`timestamp`] writes them
//! back in the same shape.

pub mod appointment;
pub mod care_gap;
pub mod chat;
pub mod health;
pub mod medication;
pub mod patient;
pub mod timestamp;

pub use appointment::{Appointment, AppointmentCreate, AppointmentStatus};
pub use care_gap::{CareGap, CareGapResolution, CareGapSeverity};
pub use chat::{AgentResponse, ChatMessage, ChatRequest, OrchestrationResult};
pub use health::{HealthStatus, HealthSummary};
pub use medication::{Medication, MedicationCreate, MedicationStatus};
pub use patient::{Patient, PatientCreate, PatientStatus};
