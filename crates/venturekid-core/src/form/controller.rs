//! Wizard state machine.
//!
//! One `FormSession` per open popup. Sessions are independent -- no
//! shared state -- and every transition happens in response to a
//! caller-driven method, never a background thread.
//!
//! ## State Transitions
//!
//! ```text
//! Step(1) <-> Step(2) <-> ... <-> Step(n) -> Result
//! ```
//!
//! `advance` is gated by the step validator; the final advance builds
//! the lead record (with the guide result for the career-guide flow)
//! and pushes it through the `LeadSink`. Submission failure keeps the
//! session on its last step with every field value intact.

use chrono::Utc;

use super::fields::{ErrorMap, FieldMap, FieldValue};
use super::flow::{FlowKind, FormFlow, StepDef};
use super::validator;
use crate::backend::{LeadRecord, LeadSink};
use crate::events::Event;
use crate::scoring::{self, GuideResult, ScoringInput};

/// Where a session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// 1-indexed wizard step.
    Step(usize),
    /// Terminal: submission accepted. The only exit is dropping the
    /// session.
    Result,
}

/// A single wizard session.
#[derive(Debug)]
pub struct FormSession {
    id: String,
    flow: FormFlow,
    stage: Stage,
    fields: FieldMap,
    errors: ErrorMap,
    submission_error: Option<String>,
    guide: Option<GuideResult>,
    backend_id: Option<String>,
}

impl FormSession {
    /// Open a session at step 1 with the flow's documented defaults.
    pub fn new(flow: FormFlow) -> Self {
        let fields = flow.defaults();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            flow,
            stage: Stage::Step(1),
            fields,
            errors: ErrorMap::new(),
            submission_error: None,
            guide: None,
            backend_id: None,
        }
    }

    pub fn enrollment() -> Self {
        Self::new(FormFlow::enrollment())
    }

    pub fn career_guide() -> Self {
        Self::new(FormFlow::career_guide())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FlowKind {
        self.flow.kind
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current 1-indexed step, or None once in `Result`.
    pub fn current_step(&self) -> Option<usize> {
        match self.stage {
            Stage::Step(n) => Some(n),
            Stage::Result => None,
        }
    }

    pub fn step_def(&self) -> Option<&StepDef> {
        self.current_step().and_then(|n| self.flow.step(n))
    }

    pub fn total_steps(&self) -> usize {
        self.flow.total_steps()
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Errors from the most recent advance attempt.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Human-readable message from the most recent failed submission.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// The computed guide, available once the final career-guide step
    /// has validated (survives a failed submission for retry).
    pub fn guide_result(&self) -> Option<&GuideResult> {
        self.guide.as_ref()
    }

    pub fn backend_id(&self) -> Option<&str> {
        self.backend_id.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Result
    }

    /// The event announcing this session, for front ends that log it.
    pub fn opened_event(&self) -> Event {
        Event::FormOpened {
            session_id: self.id.clone(),
            flow: self.flow.kind,
            total_steps: self.flow.total_steps(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Set one field. No validation runs until the next `advance`.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        if self.stage == Stage::Result {
            return;
        }
        self.fields.insert(name.to_string(), value);
    }

    /// Toggle an entry of a multi-select field: add if absent, remove
    /// if present. A non-list value is replaced by a fresh list.
    pub fn toggle_list_entry(&mut self, name: &str, value: &str) {
        if self.stage == Stage::Result {
            return;
        }
        let entry = self
            .fields
            .entry(name.to_string())
            .or_insert_with(|| FieldValue::List(vec![]));
        if !matches!(entry, FieldValue::List(_)) {
            *entry = FieldValue::List(vec![]);
        }
        if let FieldValue::List(items) = entry {
            match items.iter().position(|i| i == value) {
                Some(pos) => {
                    items.remove(pos);
                }
                None => items.push(value.to_string()),
            }
        }
    }

    /// Bulk-apply answers (answer files, restored drafts).
    pub fn apply_answers(&mut self, answers: &FieldMap) {
        for (name, value) in answers {
            self.set_field(name, value.clone());
        }
    }

    /// Step back one step. No validation; never leaves step 1. None in
    /// `Result` or on step 1.
    pub fn retreat(&mut self) -> Option<Event> {
        let Stage::Step(n) = self.stage else {
            return None;
        };
        if n <= 1 {
            return None;
        }
        self.stage = Stage::Step(n - 1);
        Some(Event::StepRetreated {
            session_id: self.id.clone(),
            from_step: n,
            to_step: n - 1,
            at: Utc::now(),
        })
    }

    /// Try to move forward.
    ///
    /// Validation failure keeps the step and records errors. On the
    /// final step a pass triggers submission through `sink`; only a
    /// successful submission reaches `Result`. Returns None once in
    /// `Result`.
    pub fn advance(&mut self, sink: &dyn LeadSink) -> Option<Event> {
        let Stage::Step(n) = self.stage else {
            return None;
        };
        self.errors = {
            let step = self.flow.step(n)?;
            validator::validate(step, &self.fields)
        };
        if !self.errors.is_empty() {
            return Some(Event::StepRejected {
                session_id: self.id.clone(),
                step: n,
                error_count: self.errors.len(),
                at: Utc::now(),
            });
        }

        if n < self.flow.total_steps() {
            self.stage = Stage::Step(n + 1);
            return Some(Event::StepAdvanced {
                session_id: self.id.clone(),
                from_step: n,
                to_step: n + 1,
                at: Utc::now(),
            });
        }

        Some(self.submit(sink, n))
    }

    /// The record this session would submit right now.
    pub fn lead_record(&self) -> LeadRecord {
        LeadRecord::new(self.flow.kind, &self.fields, self.guide.clone())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn submit(&mut self, sink: &dyn LeadSink, step: usize) -> Event {
        if self.flow.kind == FlowKind::CareerGuide && self.guide.is_none() {
            let input = ScoringInput::from_fields(&self.fields);
            self.guide = Some(scoring::score(&input));
        }

        let record = self.lead_record();
        match sink.submit(&record) {
            Ok(ack) => {
                self.submission_error = None;
                self.backend_id = Some(ack.backend_id.clone());
                self.stage = Stage::Result;
                Event::SubmissionAccepted {
                    session_id: self.id.clone(),
                    backend_id: ack.backend_id,
                    venture_score: self.guide.as_ref().map(|g| g.venture_score),
                    at: Utc::now(),
                }
            }
            Err(err) => {
                let message = err.to_string();
                self.submission_error = Some(message.clone());
                Event::SubmissionFailed {
                    session_id: self.id.clone(),
                    step,
                    message,
                    at: Utc::now(),
                }
            }
        }
    }
}
