//! The optional four-question brain-teaser quiz.
//!
//! Answers are compared exactly against a fixed key; the score is only
//! computed when at least one question was attempted.

use serde::Serialize;

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize)]
pub struct AptitudeQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    /// (choice id, display text) pairs.
    pub choices: [(&'static str, &'static str); 4],
    /// Correct choice id.
    pub answer: &'static str,
}

pub const APTITUDE_QUESTIONS: [AptitudeQuestion; 4] = [
    AptitudeQuestion {
        id: "aptitude_1",
        prompt: "What number comes next: 2, 4, 8, 16, ...?",
        choices: [("a", "18"), ("b", "24"), ("c", "32"), ("d", "34")],
        answer: "c",
    },
    AptitudeQuestion {
        id: "aptitude_2",
        prompt: "Apple is to fruit as carrot is to ...?",
        choices: [
            ("a", "dessert"),
            ("b", "vegetable"),
            ("c", "drink"),
            ("d", "animal"),
        ],
        answer: "b",
    },
    AptitudeQuestion {
        id: "aptitude_3",
        prompt: "Which shape has exactly three sides?",
        choices: [
            ("a", "triangle"),
            ("b", "square"),
            ("c", "circle"),
            ("d", "hexagon"),
        ],
        answer: "a",
    },
    AptitudeQuestion {
        id: "aptitude_4",
        prompt: "All bloops are razzies. All razzies are lazzies. Are all bloops lazzies?",
        choices: [
            ("a", "no"),
            ("b", "only some"),
            ("c", "cannot tell"),
            ("d", "yes"),
        ],
        answer: "d",
    },
];

/// Score the four answers against the key.
///
/// Returns `round(correct / 4 * 100)`, or None when every question was
/// skipped. Comparison is by choice id, case-insensitive.
pub fn score_answers(answers: &[Option<String>; 4]) -> Option<u8> {
    if answers.iter().all(Option::is_none) {
        return None;
    }
    let correct = APTITUDE_QUESTIONS
        .iter()
        .zip(answers.iter())
        .filter(|(q, a)| {
            a.as_deref()
                .map(|a| a.trim().eq_ignore_ascii_case(q.answer))
                .unwrap_or(false)
        })
        .count();
    let total = APTITUDE_QUESTIONS.len();
    Some(((correct as f64 / total as f64) * 100.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(ids: [Option<&str>; 4]) -> [Option<String>; 4] {
        ids.map(|a| a.map(str::to_string))
    }

    #[test]
    fn all_correct_scores_100() {
        let a = answers([Some("c"), Some("b"), Some("a"), Some("d")]);
        assert_eq!(score_answers(&a), Some(100));
    }

    #[test]
    fn half_correct_scores_50() {
        let a = answers([Some("c"), Some("b"), Some("b"), Some("a")]);
        assert_eq!(score_answers(&a), Some(50));
    }

    #[test]
    fn unanswered_quiz_has_no_score() {
        assert_eq!(score_answers(&answers([None, None, None, None])), None);
    }

    #[test]
    fn partially_answered_quiz_scores_over_all_four() {
        // One attempt, and it is correct: still 1 of 4.
        let a = answers([Some("c"), None, None, None]);
        assert_eq!(score_answers(&a), Some(25));
    }

    #[test]
    fn comparison_ignores_case_and_padding() {
        let a = answers([Some(" C "), Some("B"), Some("a"), Some("D")]);
        assert_eq!(score_answers(&a), Some(100));
    }

    #[test]
    fn question_answers_are_valid_choice_ids() {
        for q in APTITUDE_QUESTIONS.iter() {
            assert!(q.choices.iter().any(|(id, _)| *id == q.answer), "{}", q.id);
        }
    }
}
