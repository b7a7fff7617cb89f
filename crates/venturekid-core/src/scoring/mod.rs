//! Guide scoring engine.
//!
//! Pure functions that reduce a completed career-guide session into a
//! `GuideResult`: the entrepreneurial potential score, the optional
//! aptitude score, career matches, skill gaps, and the narrative text.
//! Deterministic -- identical input always yields identical output, and
//! nothing here performs I/O. Cosmetic chart decoration lives in
//! `crate::charts` and never feeds back into these numbers.

pub mod aptitude;
mod careers;
mod narrative;

pub use aptitude::{AptitudeQuestion, APTITUDE_QUESTIONS};

use serde::{Deserialize, Serialize};

use crate::form::fields::{get_flag, get_list, get_number, get_text, likert, FieldMap};

/// One of the eight personality traits the guide rates.
#[derive(Debug, Clone, Copy)]
pub struct TraitSpec {
    /// Field name in the wizard ("leadership").
    pub key: &'static str,
    /// Display label ("Leadership").
    pub label: &'static str,
    /// Points per Likert unit in the venture score.
    pub multiplier: u32,
}

/// The eight rated traits, in display order. The first four are the
/// headline traits and carry the heaviest weights.
pub static TRAITS: [TraitSpec; 8] = [
    TraitSpec { key: "leadership", label: "Leadership", multiplier: 4 },
    TraitSpec { key: "confidence", label: "Confidence", multiplier: 4 },
    TraitSpec { key: "communication", label: "Communication", multiplier: 3 },
    TraitSpec { key: "problem_solving", label: "Problem solving", multiplier: 3 },
    TraitSpec { key: "creativity", label: "Creativity", multiplier: 2 },
    TraitSpec { key: "curiosity", label: "Curiosity", multiplier: 2 },
    TraitSpec { key: "persistence", label: "Persistence", multiplier: 2 },
    TraitSpec { key: "teamwork", label: "Teamwork", multiplier: 2 },
];

/// Fixed bonus for each interest tag present in the answers.
pub const INTEREST_WEIGHTS: [(&str, u32); 9] = [
    ("selling", 20),
    ("business", 20),
    ("building", 15),
    ("inventing", 15),
    ("technology", 10),
    ("science", 10),
    ("art", 10),
    ("games", 10),
    ("helping", 10),
];

/// Bonus for each of the two venture-history flags.
pub const HISTORY_BONUS: u32 = 15;

/// Bonus when the answers signal eagerness for novelty.
pub const NOVELTY_BONUS: u32 = 10;

/// Likert ratings strictly below this land in `skills_to_develop`.
pub const SKILL_GAP_THRESHOLD: u8 = 4;

/// Free-text fragments that count as a novelty signal.
const NOVELTY_KEYWORDS: [&str; 5] = ["new", "invent", "start", "create", "explore"];

/// Likert ratings (1-5) for the eight traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRatings {
    pub leadership: u8,
    pub confidence: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub creativity: u8,
    pub curiosity: u8,
    pub persistence: u8,
    pub teamwork: u8,
}

impl TraitRatings {
    /// All traits at the neutral mid-scale 3.
    pub fn neutral() -> Self {
        Self {
            leadership: 3,
            confidence: 3,
            communication: 3,
            problem_solving: 3,
            creativity: 3,
            curiosity: 3,
            persistence: 3,
            teamwork: 3,
        }
    }

    pub fn get(&self, key: &str) -> u8 {
        match key {
            "leadership" => self.leadership,
            "confidence" => self.confidence,
            "communication" => self.communication,
            "problem_solving" => self.problem_solving,
            "creativity" => self.creativity,
            "curiosity" => self.curiosity,
            "persistence" => self.persistence,
            "teamwork" => self.teamwork,
            _ => 0,
        }
    }

    pub fn set(&mut self, key: &str, value: u8) {
        let value = likert(value as i64);
        match key {
            "leadership" => self.leadership = value,
            "confidence" => self.confidence = value,
            "communication" => self.communication = value,
            "problem_solving" => self.problem_solving = value,
            "creativity" => self.creativity = value,
            "curiosity" => self.curiosity = value,
            "persistence" => self.persistence = value,
            "teamwork" => self.teamwork = value,
            _ => {}
        }
    }

    /// (spec, rating) pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static TraitSpec, u8)> + '_ {
        TRAITS.iter().map(move |spec| (spec, self.get(spec.key)))
    }
}

impl Default for TraitRatings {
    fn default() -> Self {
        Self::neutral()
    }
}

/// How the child reacts to unfamiliar things.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoveltyPreference {
    LovesNewThings,
    #[default]
    Mixed,
    PrefersRoutine,
}

impl NoveltyPreference {
    /// Tolerant parse from the wizard's text field; unknown -> Mixed.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "loves_new_things" | "loves new things" => NoveltyPreference::LovesNewThings,
            "prefers_routine" | "prefers routine" => NoveltyPreference::PrefersRoutine,
            _ => NoveltyPreference::Mixed,
        }
    }
}

/// Read-only view over a completed session's fields, holding exactly
/// what the scoring engine needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringInput {
    pub child_name: String,
    pub interests: Vec<String>,
    pub ratings: TraitRatings,
    pub has_sold_created: bool,
    pub excited_for_company: bool,
    pub novelty: NoveltyPreference,
    pub favorite_subject: String,
    pub dream_job: String,
    /// Chosen choice ids for the four brain teasers; None = skipped.
    pub aptitude_answers: [Option<String>; 4],
}

impl ScoringInput {
    /// Build from a session's field map. Missing fields fall back to
    /// the flow defaults, so a partially-filled map still scores.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let mut ratings = TraitRatings::neutral();
        for spec in TRAITS.iter() {
            if let Some(n) = get_number(fields, spec.key) {
                ratings.set(spec.key, likert(n));
            }
        }

        let aptitude_answers = std::array::from_fn(|i| {
            get_text(fields, &format!("aptitude_{}", i + 1))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase)
        });

        Self {
            child_name: get_text(fields, "child_name").unwrap_or("").trim().to_string(),
            interests: get_list(fields, "interests")
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect(),
            ratings,
            has_sold_created: get_flag(fields, "has_sold_created"),
            excited_for_company: get_flag(fields, "excited_for_company"),
            novelty: NoveltyPreference::parse(get_text(fields, "novelty_preference").unwrap_or("")),
            favorite_subject: get_text(fields, "favorite_subject").unwrap_or("").to_string(),
            dream_job: get_text(fields, "dream_job").unwrap_or("").to_string(),
            aptitude_answers,
        }
    }

    fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|i| i == tag)
    }

    fn novelty_signal(&self) -> bool {
        if self.novelty == NoveltyPreference::LovesNewThings {
            return true;
        }
        let text = format!("{} {}", self.favorite_subject, self.dream_job).to_lowercase();
        NOVELTY_KEYWORDS.iter().any(|kw| text.contains(kw))
    }
}

/// One named contribution to the venture score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub label: String,
    pub points: u32,
}

/// The finished guide: scores, matches, gaps, and narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideResult {
    /// Entrepreneurial potential, 0-100.
    pub venture_score: u8,
    /// Brain-teaser score, 0-100; None when no teaser was answered.
    pub aptitude_score: Option<u8>,
    /// Up to three career matches, strongest first.
    pub top_careers: Vec<String>,
    /// Traits rated below the gap threshold, in display order.
    pub skills_to_develop: Vec<String>,
    pub overview: String,
    pub personality_insight: String,
    pub encouragement: String,
    /// Named contributions behind `venture_score`, before clamping.
    pub breakdown: Vec<ScoreTerm>,
}

/// Score a completed guide session.
///
/// The venture score is a clamped weighted sum: interest-tag bonuses,
/// trait ratings times their multipliers, the two history bonuses, and
/// the novelty bonus. Monotonic non-decreasing in every positive input.
pub fn score(input: &ScoringInput) -> GuideResult {
    let mut breakdown = Vec::new();
    let mut total: u32 = 0;

    for (tag, points) in INTEREST_WEIGHTS.iter() {
        if input.has_interest(tag) {
            breakdown.push(ScoreTerm {
                label: format!("Interest: {tag}"),
                points: *points,
            });
            total += points;
        }
    }

    for (spec, rating) in input.ratings.entries() {
        let points = spec.multiplier * u32::from(rating);
        breakdown.push(ScoreTerm {
            label: spec.label.to_string(),
            points,
        });
        total += points;
    }

    if input.has_sold_created {
        breakdown.push(ScoreTerm {
            label: "Already sold or created something".to_string(),
            points: HISTORY_BONUS,
        });
        total += HISTORY_BONUS;
    }
    if input.excited_for_company {
        breakdown.push(ScoreTerm {
            label: "Excited to start a company".to_string(),
            points: HISTORY_BONUS,
        });
        total += HISTORY_BONUS;
    }
    if input.novelty_signal() {
        breakdown.push(ScoreTerm {
            label: "Loves new things".to_string(),
            points: NOVELTY_BONUS,
        });
        total += NOVELTY_BONUS;
    }

    let venture_score = total.min(100) as u8;
    let aptitude_score = aptitude::score_answers(&input.aptitude_answers);

    let skills_to_develop = input
        .ratings
        .entries()
        .filter(|(_, rating)| *rating < SKILL_GAP_THRESHOLD)
        .map(|(spec, _)| spec.label.to_string())
        .collect();

    GuideResult {
        venture_score,
        aptitude_score,
        top_careers: careers::suggest(input),
        skills_to_develop,
        overview: narrative::overview(input, venture_score),
        personality_insight: narrative::personality_insight(input),
        encouragement: narrative::encouragement(input, venture_score),
        breakdown,
    }
}
