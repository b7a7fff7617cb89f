use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;
use venturekid_core::charts::{self, GuideCharts};
use venturekid_core::scoring::{ScoringInput, APTITUDE_QUESTIONS};
use venturekid_core::{AppContext, FormFlow, FormSession, GuideResult, MemorySink};

use super::common;

#[derive(Subcommand)]
pub enum GuideAction {
    /// Print the career-guide steps and brain teasers
    Questions,
    /// Run the wizard over an answer file and print the guide
    Score {
        /// JSON file of field name -> value
        #[arg(long)]
        answers: PathBuf,
        /// Include chart series in the output
        #[arg(long)]
        charts: bool,
        /// Also submit the lead to the configured backend
        #[arg(long)]
        submit: bool,
    },
}

#[derive(Serialize)]
struct QuestionsOutput {
    steps: Vec<venturekid_core::form::StepDef>,
    brain_teasers: Vec<venturekid_core::scoring::AptitudeQuestion>,
}

#[derive(Serialize)]
struct ScoreOutput {
    guide: GuideResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    charts: Option<GuideCharts>,
}

pub fn run(action: GuideAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GuideAction::Questions => {
            common::print_json(&QuestionsOutput {
                steps: FormFlow::career_guide().steps,
                brain_teasers: APTITUDE_QUESTIONS.to_vec(),
            })?;
        }
        GuideAction::Score {
            answers,
            charts: with_charts,
            submit,
        } => {
            let mut session = FormSession::career_guide();
            session.apply_answers(&common::load_answers(&answers)?);

            if submit {
                let ctx = AppContext::init()?;
                let sink = ctx.lead_sink()?;
                common::drive(&mut session, sink.as_ref())?;
                ctx.db()
                    .record_lead(&session.lead_record(), session.backend_id())?;
            } else {
                let sink = MemorySink::new();
                common::drive(&mut session, &sink)?;
            }

            let guide = session
                .guide_result()
                .cloned()
                .ok_or("no guide was generated")?;
            let charts = with_charts.then(|| {
                let input = ScoringInput::from_fields(session.fields());
                charts::guide_charts(&input)
            });
            common::print_json(&ScoreOutput { guide, charts })?;
        }
    }
    Ok(())
}
