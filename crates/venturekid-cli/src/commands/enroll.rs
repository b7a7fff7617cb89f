use std::path::PathBuf;

use clap::Subcommand;
use venturekid_core::{AppContext, FormFlow, FormSession, MemorySink};

use super::common;

#[derive(Subcommand)]
pub enum EnrollAction {
    /// Print the enrollment steps and their rules
    Questions,
    /// Validate an answer file and submit the lead
    Submit {
        /// JSON file of field name -> value
        #[arg(long)]
        answers: PathBuf,
        /// Validate and print the lead without contacting the backend
        #[arg(long)]
        dry_run: bool,
    },
}

pub fn run(action: EnrollAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        EnrollAction::Questions => {
            common::print_json(&FormFlow::enrollment().steps)?;
        }
        EnrollAction::Submit { answers, dry_run } => {
            let mut session = FormSession::enrollment();
            session.apply_answers(&common::load_answers(&answers)?);

            if dry_run {
                let sink = MemorySink::new();
                common::drive(&mut session, &sink)?;
                eprintln!("dry run: lead validated, nothing submitted");
                common::print_json(&session.lead_record())?;
            } else {
                let ctx = AppContext::init()?;
                let sink = ctx.lead_sink()?;
                let events = common::drive(&mut session, sink.as_ref())?;
                ctx.db()
                    .record_lead(&session.lead_record(), session.backend_id())?;
                common::print_json(&events)?;
            }
        }
    }
    Ok(())
}
