//! Dashboard analytics over catalog and completion data.
//!
//! Shapes the numbers the learner dashboard charts consume: overall
//! progress, per-section completion, and a per-content-kind breakdown.

use serde::{Deserialize, Serialize};

use crate::catalog::{ContentKind, CourseCatalog};
use crate::progress::{compute_progress, CompletionSet, ProgressSnapshot};

/// Completion within one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    pub section_id: String,
    pub title: String,
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Completion per lesson content kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: ContentKind,
    pub completed: usize,
    pub total: usize,
}

/// Everything the dashboard's analytics view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub overall: ProgressSnapshot,
    pub by_section: Vec<SectionProgress>,
    /// Kinds present in the catalog, in canonical order.
    pub by_kind: Vec<KindCount>,
}

fn pct(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Build the dashboard analytics for a catalog and completion set.
pub fn dashboard_stats(catalog: &CourseCatalog, set: &CompletionSet) -> DashboardStats {
    let by_section = catalog
        .sections
        .iter()
        .map(|section| {
            let mut completed = 0;
            let mut total = 0;
            for module in &section.modules {
                for lesson in &module.lessons {
                    total += 1;
                    if set.contains(&lesson.id) {
                        completed += 1;
                    }
                }
            }
            SectionProgress {
                section_id: section.id.clone(),
                title: section.title.clone(),
                completed,
                total,
                percentage: pct(completed, total),
            }
        })
        .collect();

    let by_kind = ContentKind::ALL
        .iter()
        .filter_map(|kind| {
            let mut completed = 0;
            let mut total = 0;
            for (_, _, lesson) in catalog.lessons() {
                if lesson.kind == *kind {
                    total += 1;
                    if set.contains(&lesson.id) {
                        completed += 1;
                    }
                }
            }
            (total > 0).then_some(KindCount {
                kind: *kind,
                completed,
                total,
            })
        })
        .collect();

    DashboardStats {
        overall: compute_progress(catalog, set),
        by_section,
        by_kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_breakdown() {
        let catalog = CourseCatalog::builtin();
        let mut set = CompletionSet::new();
        set.mark_complete("spark-what-is-an-entrepreneur");
        set.mark_complete("spark-spot-a-problem");

        let stats = dashboard_stats(&catalog, &set);
        assert_eq!(stats.overall.completed, 2);
        assert_eq!(stats.by_section.len(), 3);

        let spark = &stats.by_section[0];
        assert_eq!(spark.section_id, "spark");
        assert_eq!(spark.completed, 2);
        assert_eq!(spark.total, 5);
        assert_eq!(spark.percentage, 40);

        // Only kinds present in the catalog appear.
        assert!(stats.by_kind.iter().all(|k| k.total > 0));
        let video = stats
            .by_kind
            .iter()
            .find(|k| k.kind == ContentKind::Video)
            .unwrap();
        assert_eq!(video.completed, 1);
    }

    #[test]
    fn empty_catalog_has_empty_breakdowns() {
        let stats = dashboard_stats(&CourseCatalog::default(), &CompletionSet::new());
        assert_eq!(stats.overall.percentage, 0);
        assert!(stats.by_section.is_empty());
        assert!(stats.by_kind.is_empty());
    }
}
