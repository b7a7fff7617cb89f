use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FlowKind;

/// Every state change in the system produces an Event.
/// Front ends render them; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    FormOpened {
        session_id: String,
        flow: FlowKind,
        total_steps: usize,
        at: DateTime<Utc>,
    },
    StepAdvanced {
        session_id: String,
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    /// Validation blocked the advance; errors stay on the session.
    StepRejected {
        session_id: String,
        step: usize,
        error_count: usize,
        at: DateTime<Utc>,
    },
    StepRetreated {
        session_id: String,
        from_step: usize,
        to_step: usize,
        at: DateTime<Utc>,
    },
    /// Final step validated and the lead was accepted by the backend.
    SubmissionAccepted {
        session_id: String,
        backend_id: String,
        venture_score: Option<u8>,
        at: DateTime<Utc>,
    },
    /// The backend rejected or could not be reached; the session stays
    /// on its last step with all field values intact.
    SubmissionFailed {
        session_id: String,
        step: usize,
        message: String,
        at: DateTime<Utc>,
    },
    LessonCompleted {
        lesson_id: String,
        percentage: u8,
        at: DateTime<Utc>,
    },
    ProgressChecked {
        percentage: u8,
        completed: usize,
        total: usize,
        next_lesson_id: Option<String>,
        at: DateTime<Utc>,
    },
}
