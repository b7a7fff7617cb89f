//! Progress over a database-backed completion set.

use venturekid_core::progress::compute_progress;
use venturekid_core::stats::dashboard_stats;
use venturekid_core::{CourseCatalog, Database};

#[test]
fn completions_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("venturekid.db");

    {
        let db = Database::open_at(&path).unwrap();
        assert!(db.mark_lesson_complete("spark-what-is-an-entrepreneur").unwrap());
        assert!(db.mark_lesson_complete("spark-spot-a-problem").unwrap());
    }

    let db = Database::open_at(&path).unwrap();
    let set = db.completion_set().unwrap();
    assert_eq!(set.len(), 2);

    let catalog = CourseCatalog::builtin();
    let snapshot = compute_progress(&catalog, &set);
    assert_eq!(snapshot.completed, 2);
    assert_eq!(snapshot.total, 11);
    assert_eq!(snapshot.percentage, 18); // round(2/11 * 100)
    assert_eq!(
        snapshot.next_lesson.unwrap().lesson_id,
        "spark-idea-journal"
    );
}

#[test]
fn dashboard_reflects_database_state() {
    let db = Database::open_memory().unwrap();
    for (_, _, lesson) in CourseCatalog::builtin().lessons() {
        db.mark_lesson_complete(&lesson.id).unwrap();
    }

    let set = db.completion_set().unwrap();
    let catalog = CourseCatalog::builtin();
    let stats = dashboard_stats(&catalog, &set);

    assert_eq!(stats.overall.percentage, 100);
    assert!(stats.overall.next_lesson.is_none());
    assert!(stats.by_section.iter().all(|s| s.percentage == 100));
    assert!(stats.by_kind.iter().all(|k| k.completed == k.total));
}
