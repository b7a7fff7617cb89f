use serde::Serialize;
use venturekid_core::storage::StoreStats;
use venturekid_core::{AppContext, ProgressSnapshot};

use super::common;

#[derive(Serialize)]
struct StatsOutput {
    store: StoreStats,
    progress: ProgressSnapshot,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppContext::init()?;
    let output = StatsOutput {
        store: ctx.store_stats()?,
        progress: ctx.progress()?,
    };
    common::print_json(&output)
}
