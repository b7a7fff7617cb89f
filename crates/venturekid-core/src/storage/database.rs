//! SQLite-based local storage.
//!
//! Provides persistent storage for:
//! - Submitted leads (a local log of what went to the backend)
//! - The learner's completed lessons
//! - Summary statistics for the dashboard

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::backend::LeadRecord;
use crate::error::DatabaseError;
use crate::form::FlowKind;
use crate::progress::CompletionSet;

/// Summary counters for the dashboard and the `stats` command.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreStats {
    pub total_leads: u64,
    pub enrollment_leads: u64,
    pub guide_leads: u64,
    pub lessons_completed: u64,
}

/// SQLite database at `~/.config/venturekid/venturekid.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database in the data directory, creating the schema if
    /// needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, DatabaseError> {
        let dir = data_dir().map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;
        Self::open_at(dir.join("venturekid.db"))
    }

    /// Open the database at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests, dry runs).
    pub fn open_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS leads (
                id           TEXT PRIMARY KEY,
                flow         TEXT NOT NULL,
                child_name   TEXT NOT NULL DEFAULT '',
                parent_email TEXT NOT NULL DEFAULT '',
                payload      TEXT NOT NULL,
                venture_score INTEGER,
                backend_id   TEXT,
                submitted_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS completions (
                lesson_id    TEXT PRIMARY KEY,
                completed_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_leads_flow ON leads(flow);
            CREATE INDEX IF NOT EXISTS idx_leads_submitted_at ON leads(submitted_at);",
        )?;
        Ok(())
    }

    // ── Leads ────────────────────────────────────────────────────────

    /// Record a submitted lead, with the backend's ack id when there
    /// was one.
    ///
    /// # Errors
    /// Returns an error if the insert fails or the payload cannot be
    /// serialized.
    pub fn record_lead(
        &self,
        lead: &LeadRecord,
        backend_id: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let payload =
            serde_json::to_string(lead).map_err(|e| DatabaseError::Payload(e.to_string()))?;
        let flow = lead.flow.label();
        let venture_score = lead.guide.as_ref().map(|g| g.venture_score);
        self.conn.execute(
            "INSERT OR REPLACE INTO leads
                (id, flow, child_name, parent_email, payload, venture_score, backend_id, submitted_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                lead.id,
                flow,
                lead.child_name,
                lead.parent_email,
                payload,
                venture_score,
                backend_id,
                lead.submitted_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Load a recorded lead by id.
    pub fn lead(&self, id: &str) -> Result<Option<LeadRecord>, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT payload FROM leads WHERE id = ?1")?;
        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => {
                let payload: String = row.get(0)?;
                let lead = serde_json::from_str(&payload)
                    .map_err(|e| DatabaseError::Payload(e.to_string()))?;
                Ok(Some(lead))
            }
            None => Ok(None),
        }
    }

    // ── Completions ──────────────────────────────────────────────────

    /// Mark a lesson complete. Returns true when newly recorded.
    pub fn mark_lesson_complete(&self, lesson_id: &str) -> Result<bool, DatabaseError> {
        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO completions (lesson_id, completed_at)
             VALUES (?1, ?2)",
            params![lesson_id, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(changed > 0)
    }

    /// Load the full completion set.
    pub fn completion_set(&self) -> Result<CompletionSet, DatabaseError> {
        let mut stmt = self.conn.prepare("SELECT lesson_id FROM completions")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut ids = Vec::new();
        for row in rows {
            ids.push(row?);
        }
        Ok(ids.into_iter().collect())
    }

    // ── Stats ────────────────────────────────────────────────────────

    pub fn stats(&self) -> Result<StoreStats, DatabaseError> {
        let mut stats = StoreStats::default();

        let mut stmt = self
            .conn
            .prepare("SELECT flow, COUNT(*) FROM leads GROUP BY flow")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, u64>(1)?))
        })?;
        for row in rows {
            let (flow, count) = row?;
            stats.total_leads += count;
            if flow == FlowKind::Enrollment.label() {
                stats.enrollment_leads += count;
            } else if flow == FlowKind::CareerGuide.label() {
                stats.guide_leads += count;
            }
        }

        stats.lessons_completed =
            self.conn
                .query_row("SELECT COUNT(*) FROM completions", [], |row| row.get(0))?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::{FieldMap, FieldValue};

    fn sample_lead(flow: FlowKind) -> LeadRecord {
        let mut fields = FieldMap::new();
        fields.insert("child_name".into(), FieldValue::text("Ada"));
        fields.insert("parent_email".into(), FieldValue::text("sam@example.com"));
        LeadRecord::new(flow, &fields, None)
    }

    #[test]
    fn lead_round_trip() {
        let db = Database::open_memory().unwrap();
        let lead = sample_lead(FlowKind::Enrollment);
        db.record_lead(&lead, Some("backend-1")).unwrap();

        let loaded = db.lead(&lead.id).unwrap().unwrap();
        assert_eq!(loaded.child_name, "Ada");
        assert_eq!(loaded.parent_email, "sam@example.com");
        assert!(db.lead("missing").unwrap().is_none());
    }

    #[test]
    fn completions_grow_idempotently() {
        let db = Database::open_memory().unwrap();
        assert!(db.mark_lesson_complete("l1").unwrap());
        assert!(!db.mark_lesson_complete("l1").unwrap());
        assert!(db.mark_lesson_complete("l2").unwrap());

        let set = db.completion_set().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("l1"));
    }

    #[test]
    fn stats_count_by_flow() {
        let db = Database::open_memory().unwrap();
        db.record_lead(&sample_lead(FlowKind::Enrollment), None)
            .unwrap();
        db.record_lead(&sample_lead(FlowKind::CareerGuide), None)
            .unwrap();
        db.record_lead(&sample_lead(FlowKind::CareerGuide), None)
            .unwrap();
        db.mark_lesson_complete("l1").unwrap();

        let stats = db.stats().unwrap();
        assert_eq!(stats.total_leads, 3);
        assert_eq!(stats.enrollment_leads, 1);
        assert_eq!(stats.guide_leads, 2);
        assert_eq!(stats.lessons_completed, 1);
    }
}
