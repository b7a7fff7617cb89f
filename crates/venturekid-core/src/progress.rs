//! Course progress tracking.
//!
//! A `CompletionSet` is the learner-owned record of finished lessons;
//! it only grows. Progress is always computed against a catalog:
//! percentage of catalog lessons completed plus a pointer to the next
//! incomplete lesson in traversal order.

use std::collections::BTreeSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::CourseCatalog;
use crate::events::Event;

/// The set of completed lesson ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, lesson_id: &str) -> bool {
        self.0.contains(lesson_id)
    }

    /// Record a lesson as complete. Returns true when the id was newly
    /// added. There is no reverse operation.
    pub fn mark_complete(&mut self, lesson_id: &str) -> bool {
        self.0.insert(lesson_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl FromIterator<String> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Pointer to one lesson within the catalog hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRef {
    pub section_id: String,
    pub module_id: String,
    pub lesson_id: String,
    pub title: String,
}

/// Overall progress at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// 0-100, rounded.
    pub percentage: u8,
    /// Completed lessons that exist in the catalog.
    pub completed: usize,
    /// Total lessons in the catalog.
    pub total: usize,
    /// First incomplete lesson in traversal order; None when done.
    pub next_lesson: Option<LessonRef>,
}

/// Compute progress for a completion set against a catalog.
///
/// Only ids present in the catalog count toward the percentage. An
/// empty catalog yields 0% and no next lesson.
pub fn compute_progress(catalog: &CourseCatalog, set: &CompletionSet) -> ProgressSnapshot {
    let total = catalog.lesson_count();
    if total == 0 {
        return ProgressSnapshot {
            percentage: 0,
            completed: 0,
            total: 0,
            next_lesson: None,
        };
    }

    let mut completed = 0;
    let mut next_lesson = None;
    for (section, module, lesson) in catalog.lessons() {
        if set.contains(&lesson.id) {
            completed += 1;
        } else if next_lesson.is_none() {
            next_lesson = Some(LessonRef {
                section_id: section.id.clone(),
                module_id: module.id.clone(),
                lesson_id: lesson.id.clone(),
                title: lesson.title.clone(),
            });
        }
    }

    let percentage = ((completed as f64 / total as f64) * 100.0).round() as u8;
    ProgressSnapshot {
        percentage,
        completed,
        total,
        next_lesson,
    }
}

/// Catalog plus completion set, with event-producing mutation.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    catalog: CourseCatalog,
    set: CompletionSet,
}

impl ProgressTracker {
    pub fn new(catalog: CourseCatalog, set: CompletionSet) -> Self {
        Self { catalog, set }
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    pub fn completion_set(&self) -> &CompletionSet {
        &self.set
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        compute_progress(&self.catalog, &self.set)
    }

    /// Mark a lesson complete and report the new percentage. Idempotent
    /// on repeat completion (returns None the second time).
    pub fn mark_complete(&mut self, lesson_id: &str) -> Option<Event> {
        if !self.set.mark_complete(lesson_id) {
            return None;
        }
        let snapshot = self.snapshot();
        Some(Event::LessonCompleted {
            lesson_id: lesson_id.to_string(),
            percentage: snapshot.percentage,
            at: Utc::now(),
        })
    }

    /// The snapshot as an event, for dashboards that log polls.
    pub fn progress_event(&self) -> Event {
        let snapshot = self.snapshot();
        Event::ProgressChecked {
            percentage: snapshot.percentage,
            completed: snapshot.completed,
            total: snapshot.total,
            next_lesson_id: snapshot.next_lesson.map(|l| l.lesson_id),
            at: Utc::now(),
        }
    }
}
