//! Lead persistence boundary.
//!
//! Completed wizard sessions are handed to a `LeadSink` as a structured
//! `LeadRecord`. The sink is a write-only, opaque collaborator: the
//! hosted backend implementation POSTs JSON and needs nothing back
//! beyond an acknowledgment id. One attempt per call -- the form
//! controller surfaces failures and the user retries by re-advancing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SubmissionError;
use crate::form::fields::{get_number, get_text, FieldMap};
use crate::form::FlowKind;
use crate::scoring::GuideResult;
use crate::storage::Config;

/// The structured record sent to the lead backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Client-side id, also used as the ack fallback.
    pub id: String,
    pub flow: FlowKind,
    pub child_name: String,
    pub child_age: Option<i64>,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
    /// The full answer map as entered.
    pub answers: FieldMap,
    /// Present for career-guide leads.
    pub guide: Option<GuideResult>,
    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    /// Assemble a record from a session's answers.
    pub fn new(flow: FlowKind, fields: &FieldMap, guide: Option<GuideResult>) -> Self {
        let child_age = get_number(fields, "child_age").or_else(|| {
            get_text(fields, "child_age").and_then(|s| s.trim().parse().ok())
        });
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            flow,
            child_name: get_text(fields, "child_name").unwrap_or("").trim().to_string(),
            child_age,
            parent_name: get_text(fields, "parent_name").unwrap_or("").trim().to_string(),
            parent_email: get_text(fields, "parent_email").unwrap_or("").trim().to_string(),
            parent_phone: get_text(fields, "parent_phone").unwrap_or("").trim().to_string(),
            answers: fields.clone(),
            guide,
            submitted_at: Utc::now(),
        }
    }
}

/// Acknowledgment from a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadAck {
    pub backend_id: String,
}

/// Write-only sink for completed leads.
pub trait LeadSink: Send + Sync {
    /// Unique identifier ("hosted", "memory").
    fn name(&self) -> &str;

    /// Submit one lead. A single attempt; callers decide about retries.
    fn submit(&self, lead: &LeadRecord) -> Result<LeadAck, SubmissionError>;
}

/// Shape of the hosted backend's ack body.
#[derive(Debug, Deserialize)]
struct AckBody {
    id: Option<String>,
}

/// Client for the hosted lead backend.
///
/// POSTs `LeadRecord` JSON to `{base_url}/leads` with a request
/// timeout. Owns a small tokio runtime so submissions can be driven
/// from synchronous callers (the CLI, desktop shells).
pub struct HostedBackendClient {
    base_url: Url,
    http: reqwest::Client,
    rt: tokio::runtime::Runtime,
}

impl HostedBackendClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, SubmissionError> {
        if base_url.trim().is_empty() {
            return Err(SubmissionError::NotConfigured);
        }
        let base_url = Url::parse(base_url)
            .map_err(|_| SubmissionError::InvalidEndpoint(base_url.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs.max(1)))
            .build()?;
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| SubmissionError::Runtime(e.to_string()))?;
        Ok(Self { base_url, http, rt })
    }

    /// Build from configuration; errors when the backend is disabled.
    pub fn from_config(config: &Config) -> Result<Self, SubmissionError> {
        if !config.backend.enabled {
            return Err(SubmissionError::NotConfigured);
        }
        Self::new(&config.backend.base_url, config.backend.timeout_secs)
    }

    fn leads_url(&self) -> Result<Url, SubmissionError> {
        self.base_url
            .join("leads")
            .map_err(|_| SubmissionError::InvalidEndpoint(self.base_url.to_string()))
    }
}

impl LeadSink for HostedBackendClient {
    fn name(&self) -> &str {
        "hosted"
    }

    fn submit(&self, lead: &LeadRecord) -> Result<LeadAck, SubmissionError> {
        let url = self.leads_url()?;
        let response = self
            .rt
            .block_on(async { self.http.post(url).json(lead).send().await })?;

        let status = response.status();
        if status.is_success() {
            let body: AckBody = self
                .rt
                .block_on(async { response.json().await })
                .unwrap_or(AckBody { id: None });
            Ok(LeadAck {
                backend_id: body.id.unwrap_or_else(|| lead.id.clone()),
            })
        } else {
            let message = self
                .rt
                .block_on(async { response.text().await })
                .unwrap_or_default();
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// In-memory sink for tests and dry runs. Records every submission and
/// can be primed to fail.
#[derive(Default)]
pub struct MemorySink {
    submissions: std::sync::Mutex<Vec<LeadRecord>>,
    fail_with: std::sync::Mutex<Option<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent submit fail with the given message.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.fail_with.lock().expect("sink lock") = Some(message.into());
    }

    /// Stop failing.
    pub fn recover(&self) {
        *self.fail_with.lock().expect("sink lock") = None;
    }

    pub fn submissions(&self) -> Vec<LeadRecord> {
        self.submissions.lock().expect("sink lock").clone()
    }
}

impl LeadSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn submit(&self, lead: &LeadRecord) -> Result<LeadAck, SubmissionError> {
        if let Some(message) = self.fail_with.lock().expect("sink lock").clone() {
            return Err(SubmissionError::Transport(message));
        }
        self.submissions
            .lock()
            .expect("sink lock")
            .push(lead.clone());
        Ok(LeadAck {
            backend_id: format!("memory-{}", lead.id),
        })
    }
}
