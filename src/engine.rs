//! Per-submission pipeline: score, gate, classify, package.
//!
//! Everything here is pure over its inputs; nothing outlives one call and
//! no state is shared between submissions.

use crate::catalog::questions::NON_MEDICAL_SIGNAL_QUESTION;
use crate::classify;
use crate::classify::clusters;
use crate::score;
use crate::types::answer::{AnswerSheet, Choice, TraitSheet};
use crate::types::config::Policy;
use crate::types::outcome::{Engagement, Outcome, ScoreEntry};
use chrono::Utc;
use tracing::debug;

pub fn evaluate_quiz(sheet: &AnswerSheet, policy: &Policy) -> Outcome {
    let scores = score::score_quiz(sheet);
    let engaged = scores.engagement_total >= policy.quiz_threshold;
    debug!(
        total = scores.engagement_total,
        threshold = policy.quiz_threshold,
        engaged,
        "quiz engagement"
    );

    let category_scores = scores
        .per_category
        .iter()
        .map(|entry| ScoreEntry {
            name: entry.category.name().to_string(),
            score: entry.score,
        })
        .collect();
    let engagement = Engagement {
        total: scores.engagement_total,
        threshold: policy.quiz_threshold,
        engaged,
    };

    if !engaged {
        return Outcome {
            generated_at: Utc::now(),
            category_scores,
            engagement,
            top_code: None,
            recommendation: None,
        };
    }

    let (top, second) = classify::rank_categories(&scores.per_category);
    let code = classify::profile_code(top, second);
    let force_non_medical = sheet.get(NON_MEDICAL_SIGNAL_QUESTION) == Choice::First;
    let recommendation = clusters::quiz_record(top, second, force_non_medical);
    debug!(code = %code, cluster = %recommendation.cluster, "quiz classified");

    Outcome {
        generated_at: Utc::now(),
        category_scores,
        engagement,
        top_code: Some(code),
        recommendation: Some(recommendation),
    }
}

pub fn evaluate_traits(sheet: &TraitSheet, policy: &Policy) -> Outcome {
    let scores = score::score_traits(sheet);
    let engaged = scores.engagement_total >= policy.trait_threshold;
    debug!(
        total = scores.engagement_total,
        threshold = policy.trait_threshold,
        engaged,
        "trait engagement"
    );

    let category_scores = scores
        .per_pathway
        .iter()
        .map(|entry| ScoreEntry {
            name: entry.pathway.name().to_string(),
            score: entry.score,
        })
        .collect();
    let engagement = Engagement {
        total: scores.engagement_total as f32,
        threshold: policy.trait_threshold as f32,
        engaged,
    };

    if !engaged {
        return Outcome {
            generated_at: Utc::now(),
            category_scores,
            engagement,
            top_code: None,
            recommendation: Some(clusters::exploratory_record()),
        };
    }

    let top = classify::top_pathway(&scores.per_pathway);
    let recommendation = clusters::pathway_record(top);
    debug!(pathway = top.name(), "traits classified");

    Outcome {
        generated_at: Utc::now(),
        category_scores,
        engagement,
        top_code: Some(top.name().to_string()),
        recommendation: Some(recommendation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::questions::QUESTIONS;

    fn all_answers(choice: Choice) -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        for question in &QUESTIONS {
            sheet.set(question.id, choice);
        }
        sheet
    }

    #[test]
    fn all_option_one_is_inconclusive() {
        let outcome = evaluate_quiz(&all_answers(Choice::First), &Policy::default());
        assert!(!outcome.engagement.engaged);
        assert!(outcome.top_code.is_none());
        assert!(outcome.recommendation.is_none());
        assert_eq!(outcome.engagement.total, 45.5);
    }

    #[test]
    fn all_option_two_is_engaged_with_maximal_scores() {
        let outcome = evaluate_quiz(&all_answers(Choice::Second), &Policy::default());
        assert!(outcome.engagement.engaged);
        assert_eq!(outcome.engagement.total, 91.0);
        assert!(outcome.recommendation.is_some());
        // S and P share the top score 9.5 with equal headroom
        assert_eq!(outcome.top_code.as_deref(), Some("SP"));
    }

    #[test]
    fn override_forces_environmental_over_health() {
        // option 2 everywhere in A and N, question 7 flipped to option 1;
        // enough signal elsewhere to clear the gate
        let mut sheet = all_answers(Choice::First);
        for question in &QUESTIONS {
            if matches!(question.id, 1..=12) {
                sheet.set(question.id, Choice::Second);
            }
        }
        sheet.set(7, Choice::First);

        let outcome = evaluate_quiz(&sheet, &Policy::default());
        assert!(outcome.engagement.engaged);
        let code = outcome.top_code.as_deref().expect("should classify");
        assert!(code == "AN" || code == "NA");
        let recommendation = outcome.recommendation.expect("should recommend");
        assert_eq!(recommendation.cluster, "BIO (Environmental & Research)");
    }

    #[test]
    fn without_the_override_the_bio_pair_maps_to_health() {
        let mut sheet = all_answers(Choice::First);
        for question in &QUESTIONS {
            if matches!(question.id, 1..=12) {
                sheet.set(question.id, Choice::Second);
            }
        }

        let outcome = evaluate_quiz(&sheet, &Policy::default());
        let recommendation = outcome.recommendation.expect("should recommend");
        assert_eq!(recommendation.cluster, "BIO (Health Sciences)");
    }

    #[test]
    fn minimum_sliders_fall_back_to_exploratory() {
        let sheet = TraitSheet::from_list("1,1,1,1,1,1,1,1,1,1,1,1,1").expect("should parse");
        let outcome = evaluate_traits(&sheet, &Policy::default());
        assert!(!outcome.engagement.engaged);
        assert_eq!(outcome.engagement.total, 13.0);
        assert!(outcome.top_code.is_none());
        let recommendation = outcome.recommendation.expect("fallback record");
        assert_eq!(recommendation.cluster, "Exploratory Electives");
    }

    #[test]
    fn maximum_sliders_are_engaged() {
        let sheet = TraitSheet::from_list("10,10,10,10,10,10,10,10,10,10,10,10,10")
            .expect("should parse");
        let outcome = evaluate_traits(&sheet, &Policy::default());
        assert!(outcome.engagement.engaged);
        assert_eq!(outcome.engagement.total, 130.0);
    }

    #[test]
    fn worked_example_lands_on_stem() {
        let sheet = TraitSheet::from_list("8,9,8,5,5,5,8,8,5,5,5,5,5").expect("should parse");
        let outcome = evaluate_traits(&sheet, &Policy::default());
        assert!(outcome.engagement.engaged);
        assert_eq!(outcome.engagement.total, 81.0);
        assert_eq!(outcome.top_code.as_deref(), Some("STEM & Tech"));
        let recommendation = outcome.recommendation.expect("should recommend");
        assert!(recommendation
            .courses
            .iter()
            .any(|course| course.contains("Computer Science 11/12")));
    }

    #[test]
    fn health_penalty_changes_the_winner() {
        // helping and medical profile that would lead without the penalty
        let mut sheet = TraitSheet::new();
        sheet.set(crate::catalog::traits::TraitKind::Helping, 10).expect("set");
        sheet.set(crate::catalog::traits::TraitKind::Science, 9).expect("set");
        sheet.set(crate::catalog::traits::TraitKind::Medical, 2).expect("set");

        let outcome = evaluate_traits(&sheet, &Policy::default());
        assert!(outcome.engagement.engaged);
        assert_ne!(outcome.top_code.as_deref(), Some("Health & Human Services"));
    }

    #[test]
    fn threshold_is_a_policy_knob() {
        let policy = Policy {
            quiz_threshold: 40.0,
            ..Policy::default()
        };
        let outcome = evaluate_quiz(&all_answers(Choice::First), &policy);
        assert!(outcome.engagement.engaged, "45.5 clears a 40.0 threshold");
    }
}
