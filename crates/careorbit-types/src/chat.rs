//! Chat messages and the orchestration result returned by the chat endpoint.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::care_gap::CareGap;

/// A stored chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub patient_id: String,
    /// `user`, `assistant` or an agent role. Passed through as sent.
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub timestamp: NaiveDateTime,
    /// Opaque service-side annotations (agents used, counts).
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub patient_id: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Map<String, serde_json::Value>>,
}

impl ChatRequest {
    pub fn new(patient_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            patient_id: patient_id.into(),
            message: message.into(),
            context: None,
        }
    }
}

/// One agent's contribution to an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub agent_name: String,
    pub response: String,
    pub confidence: f64,
    #[serde(default)]
    pub actions_taken: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// The combined answer produced by the service for a chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrchestrationResult {
    pub primary_response: String,
    #[serde(default)]
    pub agent_contributions: Vec<AgentResponse>,
    #[serde(default)]
    pub care_gaps_detected: Vec<CareGap>,
    #[serde(default)]
    pub medication_alerts: Vec<String>,
    #[serde(default)]
    pub appointment_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_without_context_omits_the_field() {
        let request = ChatRequest::new("patient-001", "What are my medications?");
        let value = serde_json::to_value(&request).expect("serialise");
        assert!(value.get("context").is_none());
        assert_eq!(value["patient_id"], "patient-001");
    }

    #[test]
    fn parses_assistant_message_with_metadata() {
        let json = r#"{
            "id": "5b1c",
            "patient_id": "patient-001",
            "role": "assistant",
            "content": "You have 5 active medications.",
            "agent_name": null,
            "timestamp": "2026-10-15T12:00:00.000001",
            "metadata": {"agents_used": ["medication"], "care_gaps_mentioned": 0}
        }"#;

        let message: ChatMessage = serde_json::from_str(json).expect("should parse message");
        assert_eq!(message.role, "assistant");
        assert_eq!(message.metadata["care_gaps_mentioned"], 0);
    }

    #[test]
    fn unfamiliar_role_is_kept_as_sent() {
        let json = r#"[
            {"id": "1", "patient_id": "p", "role": "user", "content": "hi",
             "timestamp": "2026-10-15T12:00:00"},
            {"id": "2", "patient_id": "p", "role": "system", "content": "summary refreshed",
             "timestamp": "2026-10-15T12:00:01"}
        ]"#;

        let history: Vec<ChatMessage> = serde_json::from_str(json).expect("should parse history");
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].role, "system");
        assert_eq!(
            serde_json::to_value(&history[1]).expect("serialise")["role"],
            "system"
        );
    }
}
