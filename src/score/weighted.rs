//! Weighted scoring for the forced-choice quiz.
//!
//! Two totals come out of one pass over the catalog. Category scores count
//! a question's weight only when option 2 was chosen, so they stay within
//! the catalog's per-category maxima and the tie-break invariant
//! `max_possible >= score` always holds. The engagement total counts the
//! raw response code times the weight (0, 1x or 2x), which is the 0-91
//! scale the fixed threshold was tuned against.

use crate::catalog::questions::{Category, QUESTIONS};
use crate::types::answer::{AnswerSheet, Choice};

#[derive(Debug, Clone, Copy)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f32,
    pub max_possible: f32,
}

#[derive(Debug, Clone)]
pub struct QuizScores {
    /// One entry per category, in catalog order.
    pub per_category: Vec<CategoryScore>,
    pub engagement_total: f32,
}

pub fn score_quiz(sheet: &AnswerSheet) -> QuizScores {
    let mut totals = [0.0f32; Category::ALL.len()];
    let mut engagement_total = 0.0f32;

    for question in &QUESTIONS {
        let choice = sheet.get(question.id);
        if choice == Choice::Second {
            totals[question.category as usize] += question.weight;
        }
        engagement_total += f32::from(choice.code()) * question.weight;
    }

    let per_category = Category::ALL
        .iter()
        .map(|category| CategoryScore {
            category: *category,
            score: totals[*category as usize],
            max_possible: category.max_possible(),
        })
        .collect();

    QuizScores {
        per_category,
        engagement_total,
    }
}
