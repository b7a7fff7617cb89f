//! Career match suggestions.
//!
//! A fixed mapping from interest tags and strong traits to
//! kid-friendly career ideas. Deterministic: table order breaks ties.

use super::ScoringInput;

/// Interest tag -> career idea, in priority order.
const INTEREST_CAREERS: [(&str, &str); 9] = [
    ("selling", "Shop Owner"),
    ("business", "Young Founder"),
    ("building", "Engineer"),
    ("inventing", "Inventor"),
    ("technology", "App Creator"),
    ("science", "Scientist"),
    ("art", "Creative Director"),
    ("games", "Game Designer"),
    ("helping", "Community Leader"),
];

/// Trait key -> career idea, used when interests alone fill fewer than
/// three slots. A trait counts when rated 4 or above.
const TRAIT_CAREERS: [(&str, &str); 4] = [
    ("leadership", "Team Leader"),
    ("creativity", "Designer"),
    ("communication", "Storyteller"),
    ("problem_solving", "Product Builder"),
];

const MAX_CAREERS: usize = 3;

/// Up to three career matches for the given input, strongest first.
/// Always returns at least one entry.
pub fn suggest(input: &ScoringInput) -> Vec<String> {
    let mut careers: Vec<String> = Vec::new();

    for (tag, career) in INTEREST_CAREERS.iter() {
        if careers.len() == MAX_CAREERS {
            break;
        }
        if input.interests.iter().any(|i| i == tag) && !careers.iter().any(|c| c == career) {
            careers.push((*career).to_string());
        }
    }

    for (key, career) in TRAIT_CAREERS.iter() {
        if careers.len() == MAX_CAREERS {
            break;
        }
        if input.ratings.get(key) >= 4 && !careers.iter().any(|c| c == career) {
            careers.push((*career).to_string());
        }
    }

    if careers.is_empty() {
        careers.push("Young Founder".to_string());
    }
    careers
}
