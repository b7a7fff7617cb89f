use clap::Subcommand;
use serde::Serialize;
use venturekid_core::charts::{self, BarPoint};
use venturekid_core::{AppContext, DashboardStats};

use super::common;

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Overall progress and per-section breakdown
    Show {
        /// Print the raw JSON instead of the summary lines
        #[arg(long)]
        json: bool,
    },
    /// Mark a lesson complete
    Complete { lesson_id: String },
    /// Print the next incomplete lesson
    Next,
}

#[derive(Serialize)]
struct ShowOutput {
    dashboard: DashboardStats,
    /// Per-section bars as the dashboard renders them (decoration is
    /// cosmetic only; the dashboard numbers above are authoritative).
    section_bars: Vec<BarPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    activity_sparkline: Option<Vec<u8>>,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppContext::init()?;

    match action {
        ProgressAction::Show { json } => {
            let dashboard = ctx.dashboard()?;
            if json {
                let mut section_bars = charts::section_bars(&dashboard.by_section);
                let charts_cfg = &ctx.config().charts;
                let mut activity_sparkline = None;
                if charts_cfg.cosmetic_decoration {
                    charts::decorate_bars(&mut section_bars, charts_cfg.seed);
                    activity_sparkline = Some(charts::cosmetic_sparkline(charts_cfg.seed, 14));
                }
                common::print_json(&ShowOutput {
                    dashboard,
                    section_bars,
                    activity_sparkline,
                })?;
            } else {
                println!(
                    "{}% complete ({} of {} lessons)",
                    dashboard.overall.percentage,
                    dashboard.overall.completed,
                    dashboard.overall.total
                );
                for section in &dashboard.by_section {
                    println!(
                        "  {}: {}% ({}/{})",
                        section.title, section.percentage, section.completed, section.total
                    );
                }
                match &dashboard.overall.next_lesson {
                    Some(next) => println!("next up: {} ({})", next.title, next.lesson_id),
                    None => println!("all lessons complete!"),
                }
            }
        }
        ProgressAction::Complete { lesson_id } => {
            if !ctx.catalog().contains_lesson(&lesson_id) {
                eprintln!("note: '{lesson_id}' is not in the current catalog");
            }
            match ctx.complete_lesson(&lesson_id)? {
                Some(event) => common::print_json(&event)?,
                None => println!("'{lesson_id}' was already complete"),
            }
        }
        ProgressAction::Next => {
            let snapshot = ctx.progress()?;
            match snapshot.next_lesson {
                Some(next) => common::print_json(&next)?,
                None => println!("All lessons complete!"),
            }
        }
    }
    Ok(())
}
