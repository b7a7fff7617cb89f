//! Presentation-layer chart data.
//!
//! Shapes guide results and dashboard stats into radar/pie/bar series.
//! Cosmetic decoration (seeded jitter, activity sparklines) lives here
//! and ONLY here: nothing in this module feeds back into scoring or
//! progress numbers.

use rand::Rng;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::scoring::{ScoringInput, INTEREST_WEIGHTS};
use crate::stats::SectionProgress;

/// One axis of the trait radar, valued 1-5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: u8,
}

/// One slice of the interest pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub share_pct: f64,
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPoint {
    pub label: String,
    pub value: f64,
}

/// Chart bundle for the guide result view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideCharts {
    pub trait_radar: Vec<RadarPoint>,
    pub interest_pie: Vec<PieSlice>,
}

/// Radar series over the eight rated traits, in display order.
pub fn trait_radar(input: &ScoringInput) -> Vec<RadarPoint> {
    input
        .ratings
        .entries()
        .map(|(spec, rating)| RadarPoint {
            label: spec.label.to_string(),
            value: rating,
        })
        .collect()
}

/// Pie series over the selected interests: known tags in table order,
/// equal shares. An empty selection renders a single "Exploring" slice.
pub fn interest_pie(interests: &[String]) -> Vec<PieSlice> {
    let selected: Vec<&str> = INTEREST_WEIGHTS
        .iter()
        .map(|(tag, _)| *tag)
        .filter(|tag| interests.iter().any(|i| i == tag))
        .collect();

    if selected.is_empty() {
        return vec![PieSlice {
            label: "Exploring".to_string(),
            share_pct: 100.0,
        }];
    }

    let share = 100.0 / selected.len() as f64;
    selected
        .iter()
        .map(|tag| PieSlice {
            label: (*tag).to_string(),
            share_pct: share,
        })
        .collect()
}

/// Bar series over per-section completion percentages.
pub fn section_bars(sections: &[SectionProgress]) -> Vec<BarPoint> {
    sections
        .iter()
        .map(|s| BarPoint {
            label: s.title.clone(),
            value: f64::from(s.percentage),
        })
        .collect()
}

pub fn guide_charts(input: &ScoringInput) -> GuideCharts {
    GuideCharts {
        trait_radar: trait_radar(input),
        interest_pie: interest_pie(&input.interests),
    }
}

/// Purely cosmetic "recent activity" sparkline: deterministic for a
/// given seed, values 1-9. Decoration for empty dashboards.
pub fn cosmetic_sparkline(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = Pcg64::new(u128::from(seed), 0xa02bdbf7bb3c0a7);
    (0..len).map(|_| rng.gen_range(1..=9)).collect()
}

/// Add a little cosmetic wiggle to bar heights so flat demo charts
/// don't look dead. Clamped to [0, 100]; same seed, same wiggle.
pub fn decorate_bars(bars: &mut [BarPoint], seed: u64) {
    let mut rng = Pcg64::new(u128::from(seed), 0xa02bdbf7bb3c0a7);
    for bar in bars {
        let wiggle: f64 = rng.gen_range(-2.5..=2.5);
        bar.value = (bar.value + wiggle).clamp(0.0, 100.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{NoveltyPreference, TraitRatings};

    fn input() -> ScoringInput {
        ScoringInput {
            child_name: "Ada".into(),
            interests: vec!["selling".into(), "art".into()],
            ratings: TraitRatings::neutral(),
            has_sold_created: false,
            excited_for_company: false,
            novelty: NoveltyPreference::Mixed,
            favorite_subject: String::new(),
            dream_job: String::new(),
            aptitude_answers: [None, None, None, None],
        }
    }

    #[test]
    fn radar_covers_all_traits() {
        let radar = trait_radar(&input());
        assert_eq!(radar.len(), 8);
        assert_eq!(radar[0].label, "Leadership");
        assert!(radar.iter().all(|p| (1..=5).contains(&p.value)));
    }

    #[test]
    fn pie_shares_sum_to_100() {
        let pie = interest_pie(&input().interests);
        assert_eq!(pie.len(), 2);
        let sum: f64 = pie.iter().map(|s| s.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_interests_render_placeholder_slice() {
        let pie = interest_pie(&[]);
        assert_eq!(pie.len(), 1);
        assert_eq!(pie[0].label, "Exploring");
    }

    #[test]
    fn sparkline_is_deterministic_per_seed() {
        assert_eq!(cosmetic_sparkline(7, 12), cosmetic_sparkline(7, 12));
        assert_ne!(cosmetic_sparkline(7, 12), cosmetic_sparkline(8, 12));
    }

    #[test]
    fn decoration_never_touches_scores() {
        // The decorated copy drifts; the scoring input and its result
        // stay byte-identical.
        let input = input();
        let before = crate::scoring::score(&input);

        let mut bars = vec![
            BarPoint {
                label: "Spark".into(),
                value: 40.0,
            },
            BarPoint {
                label: "Build".into(),
                value: 0.0,
            },
        ];
        decorate_bars(&mut bars, 99);
        assert!(bars.iter().all(|b| (0.0..=100.0).contains(&b.value)));

        let after = crate::scoring::score(&input);
        assert_eq!(before, after);
    }
}
