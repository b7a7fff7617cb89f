//! Application context.
//!
//! Constructed once at startup and passed explicitly to whatever needs
//! it -- there is no global state. Owns the configuration, the local
//! database, and the resolved course catalog.

use crate::backend::{HostedBackendClient, LeadSink};
use crate::catalog::{self, CourseCatalog};
use crate::error::CoreError;
use crate::events::Event;
use crate::progress::{ProgressSnapshot, ProgressTracker};
use crate::stats::{dashboard_stats, DashboardStats};
use crate::storage::{Config, Database, StoreStats};

pub struct AppContext {
    config: Config,
    db: Database,
    catalog: CourseCatalog,
}

impl AppContext {
    /// Load config, open the local database, and resolve the catalog.
    pub fn init() -> Result<Self, CoreError> {
        let config = Config::load_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self, CoreError> {
        let db = Database::open()?;
        let catalog = catalog::resolve(&config);
        Ok(Self { config, db, catalog })
    }

    /// A context over an in-memory database (tests, dry runs).
    pub fn ephemeral(config: Config) -> Result<Self, CoreError> {
        let db = Database::open_memory()?;
        let catalog = catalog::resolve(&config);
        Ok(Self { config, db, catalog })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// The configured lead sink.
    pub fn lead_sink(&self) -> Result<Box<dyn LeadSink>, CoreError> {
        let client = HostedBackendClient::from_config(&self.config)?;
        Ok(Box::new(client))
    }

    /// Progress tracker over the catalog and the stored completion set.
    pub fn tracker(&self) -> Result<ProgressTracker, CoreError> {
        let set = self.db.completion_set()?;
        Ok(ProgressTracker::new(self.catalog.clone(), set))
    }

    pub fn progress(&self) -> Result<ProgressSnapshot, CoreError> {
        Ok(self.tracker()?.snapshot())
    }

    pub fn dashboard(&self) -> Result<DashboardStats, CoreError> {
        let set = self.db.completion_set()?;
        Ok(dashboard_stats(&self.catalog, &set))
    }

    pub fn store_stats(&self) -> Result<StoreStats, CoreError> {
        Ok(self.db.stats()?)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Persist a lesson completion and report the new progress. None
    /// when the lesson was already complete.
    pub fn complete_lesson(&self, lesson_id: &str) -> Result<Option<Event>, CoreError> {
        if !self.db.mark_lesson_complete(lesson_id)? {
            return Ok(None);
        }
        let snapshot = self.progress()?;
        Ok(Some(Event::LessonCompleted {
            lesson_id: lesson_id.to_string(),
            percentage: snapshot.percentage,
            at: chrono::Utc::now(),
        }))
    }
}
