//! Narrative text for the finished guide.
//!
//! Template interpolation over the strongest interests and traits.
//! No generative backend is involved; if one exists it sits behind the
//! lead backend and is out of scope here.

use super::ScoringInput;

fn display_name(input: &ScoringInput) -> &str {
    if input.child_name.is_empty() {
        "Your child"
    } else {
        &input.child_name
    }
}

fn potential_level(score: u8) -> &'static str {
    match score {
        80..=100 => "exceptional",
        60..=79 => "strong",
        40..=59 => "growing",
        _ => "budding",
    }
}

/// The two highest-rated traits, display order breaking ties.
fn top_traits(input: &ScoringInput) -> Vec<&'static str> {
    let mut entries: Vec<_> = input.ratings.entries().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.iter().take(2).map(|(spec, _)| spec.label).collect()
}

pub fn overview(input: &ScoringInput, venture_score: u8) -> String {
    let name = display_name(input);
    let level = potential_level(venture_score);
    if input.interests.is_empty() {
        format!(
            "{name} shows {level} entrepreneurial potential with a score of \
             {venture_score} out of 100. As their interests take shape, so will \
             their first venture ideas."
        )
    } else {
        let interests = input
            .interests
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{name} shows {level} entrepreneurial potential with a score of \
             {venture_score} out of 100. Their interest in {interests} points \
             toward hands-on ventures they can start right now."
        )
    }
}

pub fn personality_insight(input: &ScoringInput) -> String {
    let name = display_name(input);
    let tops = top_traits(input);
    let strengths = tops.join(" and ").to_lowercase();
    let gaps: Vec<&str> = input
        .ratings
        .entries()
        .filter(|(_, r)| *r < super::SKILL_GAP_THRESHOLD)
        .map(|(spec, _)| spec.label)
        .collect();
    if gaps.is_empty() {
        format!(
            "{name}'s standout strengths are {strengths} -- the foundation every \
             young founder builds on."
        )
    } else {
        format!(
            "{name}'s standout strengths are {strengths}. Practising {} will \
             round out their founder toolkit.",
            gaps.join(", ").to_lowercase()
        )
    }
}

pub fn encouragement(input: &ScoringInput, venture_score: u8) -> String {
    let name = display_name(input);
    if input.has_sold_created || venture_score >= 80 {
        format!(
            "{name} has already taken the hardest step: starting. Every big \
             company began as someone's small experiment."
        )
    } else {
        format!(
            "Every big company started as a small idea. {name}'s next lemonade \
             stand, bake sale, or craft table is where the journey begins."
        )
    }
}
