//! End-to-end wizard tests: a full career-guide session and a full
//! enrollment session, driven against the in-memory lead sink.

use venturekid_core::form::fields::FieldMap;
use venturekid_core::{Event, FieldValue, FlowKind, FormSession, MemorySink, Stage};

fn career_guide_answers() -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("child_name".into(), FieldValue::text("Ada"));
    fields.insert("child_age".into(), FieldValue::Number(11));
    fields.insert("parent_name".into(), FieldValue::text("Sam Rivera"));
    fields.insert("parent_email".into(), FieldValue::text("sam@example.com"));
    fields.insert("parent_phone".into(), FieldValue::text("+1 (555) 123-4567"));
    fields.insert(
        "interests".into(),
        FieldValue::List(vec!["selling".into(), "technology".into()]),
    );
    fields.insert("leadership".into(), FieldValue::Number(5));
    fields.insert("confidence".into(), FieldValue::Number(5));
    fields.insert("communication".into(), FieldValue::Number(5));
    fields.insert("problem_solving".into(), FieldValue::Number(5));
    fields.insert("creativity".into(), FieldValue::Number(2));
    fields.insert("has_sold_created".into(), FieldValue::Flag(true));
    fields.insert("excited_for_company".into(), FieldValue::Flag(true));
    fields.insert(
        "novelty_preference".into(),
        FieldValue::text("loves_new_things"),
    );
    fields.insert("aptitude_1".into(), FieldValue::text("c"));
    fields.insert("aptitude_2".into(), FieldValue::text("b"));
    fields.insert("aptitude_3".into(), FieldValue::text("a"));
    fields.insert("aptitude_4".into(), FieldValue::text("d"));
    fields.insert("dream_job".into(), FieldValue::text("toy shop owner"));
    fields
}

#[test]
fn career_guide_walkthrough_produces_guide_and_lead() {
    let mut session = FormSession::career_guide();
    let sink = MemorySink::new();
    session.apply_answers(&career_guide_answers());

    for step in 1..10 {
        let event = session.advance(&sink).expect("step event");
        match event {
            Event::StepAdvanced { from_step, to_step, .. } => {
                assert_eq!(from_step, step);
                assert_eq!(to_step, step + 1);
            }
            other => panic!("unexpected event at step {step}: {other:?}"),
        }
    }

    let event = session.advance(&sink).expect("submission event");
    let Event::SubmissionAccepted { venture_score, .. } = event else {
        panic!("expected acceptance, got {event:?}");
    };
    assert_eq!(venture_score, Some(100));
    assert_eq!(session.stage(), Stage::Result);

    let guide = session.guide_result().expect("guide");
    assert_eq!(guide.venture_score, 100);
    assert_eq!(guide.aptitude_score, Some(100));
    assert_eq!(guide.top_careers[0], "Shop Owner");
    assert!(guide.skills_to_develop.contains(&"Creativity".to_string()));
    assert!(guide.overview.contains("Ada"));

    let submissions = sink.submissions();
    assert_eq!(submissions.len(), 1);
    let lead = &submissions[0];
    assert_eq!(lead.flow, FlowKind::CareerGuide);
    assert_eq!(lead.child_name, "Ada");
    assert_eq!(lead.child_age, Some(11));
    let embedded = lead.guide.as_ref().expect("embedded guide");
    assert_eq!(embedded.venture_score, 100);
}

#[test]
fn career_guide_blocks_on_missing_interests() {
    let mut session = FormSession::career_guide();
    let sink = MemorySink::new();
    let mut answers = career_guide_answers();
    answers.insert("interests".into(), FieldValue::List(vec![]));
    session.apply_answers(&answers);

    session.advance(&sink);
    session.advance(&sink);
    assert_eq!(session.current_step(), Some(3));

    let event = session.advance(&sink).unwrap();
    assert!(matches!(event, Event::StepRejected { step: 3, .. }));
    assert_eq!(session.current_step(), Some(3));
    assert!(session.errors().contains_key("interests"));

    // Fixing the field unblocks the step.
    session.toggle_list_entry("interests", "games");
    let event = session.advance(&sink).unwrap();
    assert!(matches!(event, Event::StepAdvanced { .. }));
}

#[test]
fn failed_submission_is_retryable_without_losing_answers() {
    let mut session = FormSession::career_guide();
    let sink = MemorySink::new();
    session.apply_answers(&career_guide_answers());

    for _ in 1..10 {
        session.advance(&sink);
    }
    assert_eq!(session.current_step(), Some(10));

    sink.fail_with("503 from the lead service");
    let event = session.advance(&sink).unwrap();
    assert!(matches!(event, Event::SubmissionFailed { step: 10, .. }));
    assert_eq!(session.current_step(), Some(10));
    assert!(session
        .submission_error()
        .unwrap()
        .contains("lead service"));
    assert_eq!(
        session.fields()["child_name"],
        FieldValue::text("Ada"),
        "answers survive the failure"
    );
    assert!(sink.submissions().is_empty());

    sink.recover();
    let event = session.advance(&sink).unwrap();
    assert!(matches!(event, Event::SubmissionAccepted { .. }));
    assert_eq!(sink.submissions().len(), 1);
    assert!(session.submission_error().is_none());
}

#[test]
fn enrollment_walkthrough() {
    let mut session = FormSession::enrollment();
    let sink = MemorySink::new();

    let mut answers = FieldMap::new();
    answers.insert("child_name".into(), FieldValue::text("Noor"));
    answers.insert("child_age".into(), FieldValue::Number(9));
    answers.insert("parent_name".into(), FieldValue::text("Rafael"));
    answers.insert("parent_email".into(), FieldValue::text("rafael@example.com"));
    answers.insert("parent_phone".into(), FieldValue::text("(555) 987-6543 x"));
    answers.insert("course".into(), FieldValue::text("Young Founders 101"));
    answers.insert("consent".into(), FieldValue::Flag(true));
    session.apply_answers(&answers);

    // The phone is malformed: step 2 must reject it.
    session.advance(&sink);
    let event = session.advance(&sink).unwrap();
    assert!(matches!(event, Event::StepRejected { step: 2, .. }));

    session.set_field("parent_phone", FieldValue::text("(555) 987-6543"));
    for _ in 0..3 {
        let event = session.advance(&sink).unwrap();
        assert!(matches!(event, Event::StepAdvanced { .. }));
    }
    let event = session.advance(&sink).unwrap();
    let Event::SubmissionAccepted { venture_score, .. } = event else {
        panic!("expected acceptance, got {event:?}");
    };
    // Enrollment leads carry no guide.
    assert_eq!(venture_score, None);
    assert!(session.guide_result().is_none());
    assert_eq!(sink.submissions()[0].flow, FlowKind::Enrollment);
}
