//! Wizard flow definitions.
//!
//! A flow is an ordered list of steps, each carrying the validation
//! rules for its fields. Two flows ship with the crate: the five-step
//! Enrollment popup and the ten-step Career Guide popup.

use serde::{Deserialize, Serialize};

use super::fields::{FieldMap, FieldValue};
use crate::scoring::TRAITS;

/// Which lead-capture popup a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    Enrollment,
    CareerGuide,
}

impl FlowKind {
    pub fn label(&self) -> &'static str {
        match self {
            FlowKind::Enrollment => "enrollment",
            FlowKind::CareerGuide => "career_guide",
        }
    }
}

/// How a single field is checked when the user tries to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Present and non-blank after trimming.
    Required,
    /// Required, and shaped like `local@domain.tld`.
    Email,
    /// Required, and at least ten digits/symbols from `+()- ` and 0-9.
    Phone,
    /// Multi-select with at least one entry.
    NonEmptyList,
    /// Boolean that must be checked (consent).
    MustBeTrue,
}

/// Validation rule for one field of one step.
#[derive(Debug, Clone, Serialize)]
pub struct FieldRule {
    pub field: &'static str,
    /// Shown in error messages ("Child's name is required").
    pub label: &'static str,
    pub kind: RuleKind,
}

impl FieldRule {
    fn new(field: &'static str, label: &'static str, kind: RuleKind) -> Self {
        Self { field, label, kind }
    }
}

/// One step of a wizard flow.
#[derive(Debug, Clone, Serialize)]
pub struct StepDef {
    /// 1-indexed position within the flow.
    pub index: usize,
    pub title: &'static str,
    /// Short helper text shown under the title.
    pub blurb: &'static str,
    /// Rules checked on advance. Steps with no rules always validate.
    pub rules: Vec<FieldRule>,
}

/// A complete wizard flow definition.
#[derive(Debug, Clone, Serialize)]
pub struct FormFlow {
    pub kind: FlowKind,
    pub steps: Vec<StepDef>,
}

impl FormFlow {
    /// The five-step enrollment popup.
    pub fn enrollment() -> Self {
        Self {
            kind: FlowKind::Enrollment,
            steps: vec![
                StepDef {
                    index: 1,
                    title: "Your young founder",
                    blurb: "Tell us who will be learning",
                    rules: vec![
                        FieldRule::new("child_name", "Child's name", RuleKind::Required),
                        FieldRule::new("child_age", "Child's age", RuleKind::Required),
                    ],
                },
                StepDef {
                    index: 2,
                    title: "Parent or guardian",
                    blurb: "We only use this to set up the account",
                    rules: vec![
                        FieldRule::new("parent_name", "Your name", RuleKind::Required),
                        FieldRule::new("parent_email", "Email address", RuleKind::Email),
                        FieldRule::new("parent_phone", "Phone number", RuleKind::Phone),
                    ],
                },
                StepDef {
                    index: 3,
                    title: "Pick a course",
                    blurb: "You can switch tracks any time",
                    rules: vec![FieldRule::new("course", "Course", RuleKind::Required)],
                },
                StepDef {
                    index: 4,
                    title: "Program details",
                    blurb: "Live classes, projects, and a final demo day",
                    rules: vec![],
                },
                StepDef {
                    index: 5,
                    title: "One last thing",
                    blurb: "A parent or guardian must agree to the terms",
                    rules: vec![FieldRule::new("consent", "Consent", RuleKind::MustBeTrue)],
                },
            ],
        }
    }

    /// The ten-step career guide popup. The terminal result view is not
    /// a step; it is reached only after a successful submission.
    pub fn career_guide() -> Self {
        Self {
            kind: FlowKind::CareerGuide,
            steps: vec![
                StepDef {
                    index: 1,
                    title: "About your child",
                    blurb: "The guide is personalised to them",
                    rules: vec![
                        FieldRule::new("child_name", "Child's name", RuleKind::Required),
                        FieldRule::new("child_age", "Child's age", RuleKind::Required),
                    ],
                },
                StepDef {
                    index: 2,
                    title: "How can we reach you",
                    blurb: "The finished guide is sent to this address",
                    rules: vec![
                        FieldRule::new("parent_name", "Your name", RuleKind::Required),
                        FieldRule::new("parent_email", "Email address", RuleKind::Email),
                        FieldRule::new("parent_phone", "Phone number", RuleKind::Phone),
                    ],
                },
                StepDef {
                    index: 3,
                    title: "What sparks their interest",
                    blurb: "Pick as many as you like",
                    rules: vec![FieldRule::new(
                        "interests",
                        "Interests",
                        RuleKind::NonEmptyList,
                    )],
                },
                StepDef {
                    index: 4,
                    title: "Leading and believing",
                    blurb: "Rate from 1 (rarely) to 5 (all the time)",
                    rules: vec![
                        FieldRule::new("leadership", "Leadership rating", RuleKind::Required),
                        FieldRule::new("confidence", "Confidence rating", RuleKind::Required),
                    ],
                },
                StepDef {
                    index: 5,
                    title: "Talking and solving",
                    blurb: "Rate from 1 (rarely) to 5 (all the time)",
                    rules: vec![
                        FieldRule::new(
                            "communication",
                            "Communication rating",
                            RuleKind::Required,
                        ),
                        FieldRule::new(
                            "problem_solving",
                            "Problem-solving rating",
                            RuleKind::Required,
                        ),
                    ],
                },
                StepDef {
                    index: 6,
                    title: "Curiosity and grit",
                    blurb: "Rate from 1 (rarely) to 5 (all the time)",
                    rules: vec![
                        FieldRule::new("creativity", "Creativity rating", RuleKind::Required),
                        FieldRule::new("curiosity", "Curiosity rating", RuleKind::Required),
                        FieldRule::new("persistence", "Persistence rating", RuleKind::Required),
                        FieldRule::new("teamwork", "Teamwork rating", RuleKind::Required),
                    ],
                },
                StepDef {
                    index: 7,
                    title: "Little ventures so far",
                    blurb: "Lemonade stands count",
                    rules: vec![],
                },
                StepDef {
                    index: 8,
                    title: "New things or routines",
                    blurb: "How do they react to the unfamiliar?",
                    rules: vec![FieldRule::new(
                        "novelty_preference",
                        "Novelty preference",
                        RuleKind::Required,
                    )],
                },
                StepDef {
                    index: 9,
                    title: "Quick brain teasers",
                    blurb: "Optional -- skip any the child doesn't want to try",
                    rules: vec![],
                },
                StepDef {
                    index: 10,
                    title: "Dreams and notes",
                    blurb: "Anything else we should know?",
                    rules: vec![],
                },
            ],
        }
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Look up a step by its 1-indexed position.
    pub fn step(&self, index: usize) -> Option<&StepDef> {
        if index == 0 {
            return None;
        }
        self.steps.get(index - 1)
    }

    /// The documented initial field values for this flow: empty text,
    /// empty lists, unchecked flags, and the neutral 3 for Likert
    /// ratings.
    pub fn defaults(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        let text_fields: &[&str] = match self.kind {
            FlowKind::Enrollment => &[
                "child_name",
                "child_age",
                "parent_name",
                "parent_email",
                "parent_phone",
                "course",
                "schedule_preference",
            ],
            FlowKind::CareerGuide => &[
                "child_name",
                "child_age",
                "parent_name",
                "parent_email",
                "parent_phone",
                "novelty_preference",
                "favorite_subject",
                "aptitude_1",
                "aptitude_2",
                "aptitude_3",
                "aptitude_4",
                "dream_job",
                "extra_notes",
            ],
        };
        for name in text_fields {
            fields.insert((*name).to_string(), FieldValue::text(""));
        }
        match self.kind {
            FlowKind::Enrollment => {
                fields.insert("consent".into(), FieldValue::Flag(false));
            }
            FlowKind::CareerGuide => {
                fields.insert("interests".into(), FieldValue::List(vec![]));
                fields.insert("has_sold_created".into(), FieldValue::Flag(false));
                fields.insert("excited_for_company".into(), FieldValue::Flag(false));
                for spec in TRAITS.iter() {
                    fields.insert(spec.key.to_string(), FieldValue::Number(3));
                }
            }
        }
        fields
    }
}
