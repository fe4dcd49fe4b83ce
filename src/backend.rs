//! HTTP client for the MediSense remote backend.
//!
//! One client covers the three record stores (messages, medicines,
//! symptoms) and the two AI endpoints (free-text question answering and
//! medicine image scanning). Calls are blocking and return typed errors
//! for the shell to surface as non-fatal notices; nothing here touches the
//! pure decision core.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config;

// ═══════════════════════════════════════════
// Wire types
// ═══════════════════════════════════════════

/// Payload for the message store.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub name: String,
    pub message: String,
}

/// Stored message as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredMessage {
    pub id: String,
    pub name: String,
    pub message: String,
}

/// Payload for the medicine store. Optional fields are omitted from the
/// JSON body entirely, matching what the backend expects.
#[derive(Debug, Clone, Serialize)]
pub struct NewMedicine {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

/// Stored medicine as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredMedicine {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Payload for the symptom store. Severity stays free text on the wire —
/// the store has no enum contract.
#[derive(Debug, Clone, Serialize)]
pub struct NewSymptom {
    pub description: String,
    pub severity: String,
    pub date: String,
    pub time: String,
}

/// Stored symptom as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredSymptom {
    pub id: String,
    pub description: String,
    pub severity: String,
    pub date: String,
    pub time: String,
}

/// Response from the add endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AddedRecord {
    pub id: String,
}

/// Request body for the question-answering endpoint.
#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Response body shared by the ask and scan endpoints.
#[derive(Deserialize)]
struct AnswerResponse {
    answer: String,
}

// ═══════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Cannot reach backend at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse backend response: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

// ═══════════════════════════════════════════
// Client
// ═══════════════════════════════════════════

/// Blocking client for the remote backend.
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl BackendClient {
    /// Create a client against an explicit base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client against the configured backend (env override or default).
    pub fn from_env() -> Self {
        Self::new(&config::backend_url(), config::request_timeout_secs())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/` — cheap reachability probe.
    pub fn health_check(&self) -> Result<(), BackendError> {
        let response = self
            .client
            .get(self.url("/"))
            .send()
            .map_err(|e| self.transport_error(e))?;
        self.check_status(response).map(|_| ())
    }

    // ── Record stores ───────────────────────────────────────

    pub fn add_message(&self, message: &NewMessage) -> Result<AddedRecord, BackendError> {
        self.post_json("/api/firestore/add-message", message)
    }

    pub fn list_messages(&self) -> Result<Vec<StoredMessage>, BackendError> {
        self.get_json("/api/firestore/all-messages")
    }

    pub fn add_medicine(&self, medicine: &NewMedicine) -> Result<AddedRecord, BackendError> {
        self.post_json("/api/firestore/add-medicine", medicine)
    }

    pub fn list_medicines(&self) -> Result<Vec<StoredMedicine>, BackendError> {
        self.get_json("/api/firestore/all-medicines")
    }

    pub fn add_symptom(&self, symptom: &NewSymptom) -> Result<AddedRecord, BackendError> {
        self.post_json("/api/firestore/add-symptom", symptom)
    }

    pub fn list_symptoms(&self) -> Result<Vec<StoredSymptom>, BackendError> {
        self.get_json("/api/firestore/all-symptoms")
    }

    // ── AI endpoints ────────────────────────────────────────

    /// POST `/api/ai/ask` — network-backed answer to a free-text question.
    ///
    /// This is the alternative to the local scripted assistant; the shell
    /// uses one or the other depending on the active page, never both.
    pub fn ask(&self, question: &str) -> Result<String, BackendError> {
        tracing::debug!(len = question.len(), "asking backend AI");
        let answer: AnswerResponse = self.post_json("/api/ai/ask", &AskRequest { question })?;
        Ok(answer.answer)
    }

    /// POST `/api/ai/scan` — upload a medicine image as multipart field
    /// `image`, returning the raw answer text for `scan::parse_scan_report`.
    pub fn scan(&self, image: Vec<u8>, file_name: &str) -> Result<String, BackendError> {
        tracing::debug!(bytes = image.len(), file_name, "uploading scan image");
        let part = reqwest::blocking::multipart::Part::bytes(image)
            .file_name(file_name.to_string());
        let form = reqwest::blocking::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/api/ai/scan"))
            .multipart(form)
            .send()
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response)?;

        let parsed: AnswerResponse = response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))?;
        Ok(parsed.answer)
    }

    // ── Internal ────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response)?;
        response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;
        let response = self.check_status(response)?;
        response
            .json()
            .map_err(|e| BackendError::ResponseParsing(e.to_string()))
    }

    fn check_status(
        &self,
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    fn transport_error(&self, e: reqwest::Error) -> BackendError {
        if e.is_connect() {
            BackendError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            BackendError::Timeout(self.timeout_secs)
        } else {
            BackendError::HttpClient(e.to_string())
        }
    }
}
