//! Ranking and recommendation lookup.
//!
//! Categories are sorted by score with a stable descending sort, so ties
//! outside the top two keep catalog order. An exact tie at the top is
//! broken toward the category with the higher max-possible total, giving
//! credit to the profile with more unused headroom.

pub mod clusters;

use crate::catalog::questions::Category;
use crate::catalog::traits::Pathway;
use crate::score::{CategoryScore, PathwayScore};
use std::cmp::Ordering;

/// Top two categories, in ranked order.
pub fn rank_categories(scores: &[CategoryScore]) -> (Category, Category) {
    let mut ranked: Vec<&CategoryScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut top = ranked[0];
    let mut second = ranked[1];
    if top.score == second.score && second.max_possible > top.max_possible {
        std::mem::swap(&mut top, &mut second);
    }
    (top.category, second.category)
}

/// The two-letter profile code, in ranked order.
pub fn profile_code(top: Category, second: Category) -> String {
    format!("{}{}", top.letter(), second.letter())
}

/// Highest-scoring pathway; ties resolve to catalog order.
pub fn top_pathway(scores: &[PathwayScore]) -> Pathway {
    let mut best = &scores[0];
    for entry in &scores[1..] {
        if entry.score > best.score {
            best = entry;
        }
    }
    best.pathway
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(values: [(f32, f32); 5]) -> Vec<CategoryScore> {
        Category::ALL
            .iter()
            .zip(values)
            .map(|(category, (score, max_possible))| CategoryScore {
                category: *category,
                score,
                max_possible,
            })
            .collect()
    }

    #[test]
    fn highest_score_wins() {
        let scores = board([(3.0, 8.5), (7.0, 9.0), (1.0, 9.0), (5.0, 9.5), (2.0, 9.5)]);
        let (top, second) = rank_categories(&scores);
        assert_eq!(top, Category::Natural);
        assert_eq!(second, Category::Social);
        assert_eq!(profile_code(top, second), "NS");
    }

    #[test]
    fn exact_tie_prefers_higher_max_possible() {
        let scores = board([(6.0, 8.5), (6.0, 9.0), (1.0, 9.0), (0.0, 9.5), (0.0, 9.5)]);
        let (top, second) = rank_categories(&scores);
        assert_eq!(top, Category::Natural, "9.0 headroom beats 8.5");
        assert_eq!(second, Category::Analytical);
    }

    #[test]
    fn tie_with_equal_headroom_keeps_input_order() {
        let scores = board([(0.0, 8.5), (0.0, 9.0), (1.0, 9.0), (6.0, 9.5), (6.0, 9.5)]);
        let (top, second) = rank_categories(&scores);
        assert_eq!(top, Category::Social);
        assert_eq!(second, Category::Practical);
    }

    #[test]
    fn near_tie_is_not_broken() {
        let scores = board([(6.1, 8.5), (6.0, 9.0), (0.0, 9.0), (0.0, 9.5), (0.0, 9.5)]);
        let (top, _) = rank_categories(&scores);
        assert_eq!(top, Category::Analytical, "tie-break needs exact equality");
    }

    #[test]
    fn top_pathway_is_stable_on_ties() {
        let scores: Vec<PathwayScore> = Pathway::ALL
            .iter()
            .map(|pathway| PathwayScore {
                pathway: *pathway,
                score: 5.0,
            })
            .collect();
        assert_eq!(top_pathway(&scores), Pathway::StemTech);
    }
}
