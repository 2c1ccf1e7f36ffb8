//! HTTP client for the CareOrbit REST API.

use careorbit_types::{
    Appointment, AppointmentCreate, CareGap, CareGapResolution, ChatMessage, ChatRequest,
    HealthStatus, HealthSummary, Medication, MedicationCreate, OrchestrationResult, Patient,
    PatientCreate,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ClientConfig, ClientError, ClientResult};

/// Async client over the CareOrbit REST API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct CareOrbitClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CareOrbitClient {
    /// Creates a client for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url().clone(),
            http,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ------------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------------

    /// `GET /api/patients`
    pub async fn list_patients(&self) -> ClientResult<Vec<Patient>> {
        let url = self.endpoint(&["api", "patients"])?;
        self.send(self.http.get(url)).await
    }

    /// `GET /api/patients/{id}`
    pub async fn get_patient(&self, patient_id: &str) -> ClientResult<Patient> {
        let url = self.endpoint(&["api", "patients", patient_id])?;
        self.send(self.http.get(url)).await
    }

    /// `POST /api/patients`
    pub async fn create_patient(&self, patient: &PatientCreate) -> ClientResult<Patient> {
        let url = self.endpoint(&["api", "patients"])?;
        self.send(self.http.post(url).json(patient)).await
    }

    /// `GET /api/patients/{id}/summary`
    pub async fn patient_summary(&self, patient_id: &str) -> ClientResult<HealthSummary> {
        let url = self.endpoint(&["api", "patients", patient_id, "summary"])?;
        self.send(self.http.get(url)).await
    }

    // ------------------------------------------------------------------------
    // Medications
    // ------------------------------------------------------------------------

    /// `GET /api/patients/{id}/medications`, adding `?active_only=true` when requested.
    pub async fn medications(
        &self,
        patient_id: &str,
        active_only: bool,
    ) -> ClientResult<Vec<Medication>> {
        let url = self.endpoint(&["api", "patients", patient_id, "medications"])?;
        let request = with_flag(self.http.get(url), "active_only", active_only);
        self.send(request).await
    }

    /// `POST /api/medications`
    pub async fn create_medication(
        &self,
        medication: &MedicationCreate,
    ) -> ClientResult<Medication> {
        let url = self.endpoint(&["api", "medications"])?;
        self.send(self.http.post(url).json(medication)).await
    }

    // ------------------------------------------------------------------------
    // Appointments
    // ------------------------------------------------------------------------

    /// `GET /api/patients/{id}/appointments`, adding `?upcoming_only=true` when requested.
    pub async fn appointments(
        &self,
        patient_id: &str,
        upcoming_only: bool,
    ) -> ClientResult<Vec<Appointment>> {
        let url = self.endpoint(&["api", "patients", patient_id, "appointments"])?;
        let request = with_flag(self.http.get(url), "upcoming_only", upcoming_only);
        self.send(request).await
    }

    /// `POST /api/appointments`
    pub async fn create_appointment(
        &self,
        appointment: &AppointmentCreate,
    ) -> ClientResult<Appointment> {
        let url = self.endpoint(&["api", "appointments"])?;
        self.send(self.http.post(url).json(appointment)).await
    }

    // ------------------------------------------------------------------------
    // Care gaps
    // ------------------------------------------------------------------------

    /// `GET /api/patients/{id}/care-gaps`, adding `?include_resolved=true` when requested.
    pub async fn care_gaps(
        &self,
        patient_id: &str,
        include_resolved: bool,
    ) -> ClientResult<Vec<CareGap>> {
        let url = self.endpoint(&["api", "patients", patient_id, "care-gaps"])?;
        let request = with_flag(self.http.get(url), "include_resolved", include_resolved);
        self.send(request).await
    }

    /// `PATCH /api/care-gaps/{id}/resolve`
    pub async fn resolve_care_gap(&self, gap_id: &str) -> ClientResult<CareGapResolution> {
        let url = self.endpoint(&["api", "care-gaps", gap_id, "resolve"])?;
        self.send(self.http.request(Method::PATCH, url)).await
    }

    // ------------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------------

    /// `POST /api/chat`
    pub async fn chat(&self, request: &ChatRequest) -> ClientResult<OrchestrationResult> {
        let url = self.endpoint(&["api", "chat"])?;
        self.send(self.http.post(url).json(request)).await
    }

    /// `GET /api/patients/{id}/chat-history?limit=N`
    pub async fn chat_history(
        &self,
        patient_id: &str,
        limit: u32,
    ) -> ClientResult<Vec<ChatMessage>> {
        let url = self.endpoint(&["api", "patients", patient_id, "chat-history"])?;
        self.send(self.http.get(url).query(&[("limit", limit)])).await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = self.endpoint(&["api", "health"])?;
        self.send(self.http.get(url)).await
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!("-> {} {}", method, url);
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("<- {} {} {}", status.as_u16(), method, url);

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status.as_u16(), &body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn with_flag(builder: RequestBuilder, name: &str, enabled: bool) -> RequestBuilder {
    if enabled {
        builder.query(&[(name, "true")])
    } else {
        builder
    }
}

/// Extracts the service's `detail` field from an error body.
///
/// Non-blank string details are used verbatim; structured details (validation error lists)
/// are JSON-encoded. Anything else yields a generic message.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<serde_json::Value>,
    }

    match serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail) {
        Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => detail,
        Some(serde_json::Value::String(_) | serde_json::Value::Null) | None => {
            format!("request failed with status {status}")
        }
        Some(other) => other.to_string(),
    }
}
