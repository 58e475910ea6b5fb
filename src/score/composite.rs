//! Composite scoring for the trait-slider variant.
//!
//! Five pathways average their trait subsets; Active Living is the sports
//! trait scaled by a fixed factor. One adjustment runs before ranking: high
//! science curiosity without medical interest pulls Health & Human Services
//! down, so a science-only profile does not land on the health pathway.

use crate::catalog::traits::{Pathway, TraitKind, ACTIVE_LIVING_FACTOR};
use crate::types::answer::TraitSheet;

/// Science slider must exceed this for the health penalty to arm.
pub const SCIENCE_CURIOSITY_MIN: u8 = 7;
/// Medical slider must sit below this for the health penalty to arm.
pub const MEDICAL_INTEREST_MAX: u8 = 4;
/// Amount subtracted from Health & Human Services when the rule fires.
pub const HEALTH_PENALTY: f32 = 3.0;

#[derive(Debug, Clone, Copy)]
pub struct PathwayScore {
    pub pathway: Pathway,
    pub score: f32,
}

#[derive(Debug, Clone)]
pub struct TraitScores {
    /// One entry per pathway, in catalog order.
    pub per_pathway: Vec<PathwayScore>,
    pub engagement_total: u32,
}

pub fn score_traits(sheet: &TraitSheet) -> TraitScores {
    let per_pathway = Pathway::ALL
        .iter()
        .map(|pathway| PathwayScore {
            pathway: *pathway,
            score: pathway_score(sheet, *pathway),
        })
        .collect();

    TraitScores {
        per_pathway,
        engagement_total: sheet.total(),
    }
}

fn pathway_score(sheet: &TraitSheet, pathway: Pathway) -> f32 {
    let base = match pathway {
        Pathway::ActiveLiving => f32::from(sheet.get(TraitKind::Sports)) * ACTIVE_LIVING_FACTOR,
        _ => {
            let traits = pathway.traits();
            let sum: f32 = traits
                .iter()
                .map(|kind| f32::from(sheet.get(*kind)))
                .sum();
            sum / traits.len() as f32
        }
    };

    if pathway == Pathway::HealthHuman
        && sheet.get(TraitKind::Science) > SCIENCE_CURIOSITY_MIN
        && sheet.get(TraitKind::Medical) < MEDICAL_INTEREST_MAX
    {
        (base - HEALTH_PENALTY).max(0.0)
    } else {
        base
    }
}
