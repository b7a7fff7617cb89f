//! Shared helpers for wizard-driving commands.

use std::path::Path;

use venturekid_core::form::fields::FieldMap;
use venturekid_core::{Event, FormSession, LeadSink, ValidationError};

/// Load an answer file: a flat JSON object of field name -> value.
pub fn load_answers(path: &Path) -> Result<FieldMap, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let fields: FieldMap = serde_json::from_str(&text)?;
    Ok(fields)
}

/// Drive a session from step 1 to the result stage, step by step, so
/// every step is validated exactly as the popup would.
///
/// Returns the produced events. Errors carry the per-field messages of
/// the first rejected step, or the submission failure message.
pub fn drive(
    session: &mut FormSession,
    sink: &dyn LeadSink,
) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let mut events = vec![session.opened_event()];

    while !session.is_complete() {
        let Some(event) = session.advance(sink) else {
            break;
        };
        match &event {
            Event::StepRejected { step, .. } => {
                let summary = session
                    .errors()
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(ValidationError::StepBlocked { step: *step, summary }.into());
            }
            Event::SubmissionFailed { message, .. } => {
                return Err(format!(
                    "submission failed: {message}\nYour answers were kept; run the command again to retry."
                )
                .into());
            }
            _ => events.push(event),
        }
    }

    Ok(events)
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
