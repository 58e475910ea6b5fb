//! The slider-variant trait list and pathway compositions.
//!
//! Thirteen 1-10 sliders feed six pathway scores. Subsets overlap on
//! purpose: building counts toward both Creative Arts and Trades, science
//! toward both STEM and Health. Active Living is a single trait scaled by
//! 1.2 instead of averaged, weighting intensity of interest over breadth.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TraitKind {
    Mechanical,
    Coding,
    Math,
    Art,
    Music,
    Writing,
    Science,
    Building,
    Sports,
    Helping,
    Medical,
    Leadership,
    Outdoors,
}

impl TraitKind {
    pub const ALL: [TraitKind; 13] = [
        TraitKind::Mechanical,
        TraitKind::Coding,
        TraitKind::Math,
        TraitKind::Art,
        TraitKind::Music,
        TraitKind::Writing,
        TraitKind::Science,
        TraitKind::Building,
        TraitKind::Sports,
        TraitKind::Helping,
        TraitKind::Medical,
        TraitKind::Leadership,
        TraitKind::Outdoors,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TraitKind::Mechanical => "mechanical",
            TraitKind::Coding => "coding",
            TraitKind::Math => "math",
            TraitKind::Art => "art",
            TraitKind::Music => "music",
            TraitKind::Writing => "writing",
            TraitKind::Science => "science",
            TraitKind::Building => "building",
            TraitKind::Sports => "sports",
            TraitKind::Helping => "helping",
            TraitKind::Medical => "medical",
            TraitKind::Leadership => "leadership",
            TraitKind::Outdoors => "outdoors",
        }
    }

    pub fn from_name(name: &str) -> Option<TraitKind> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn prompt(self) -> &'static str {
        match self {
            TraitKind::Mechanical => "I like figuring out how machines and engines work.",
            TraitKind::Coding => "I enjoy writing code or automating things on a computer.",
            TraitKind::Math => "I find math problems satisfying to solve.",
            TraitKind::Art => "I like drawing, painting, or visual design.",
            TraitKind::Music => "I play, produce, or think a lot about music.",
            TraitKind::Writing => "I enjoy writing stories, scripts, or posts.",
            TraitKind::Science => "I'm curious about experiments and how nature works.",
            TraitKind::Building => "I like building physical things with my hands.",
            TraitKind::Sports => "I'm happiest when I'm moving, training, or competing.",
            TraitKind::Helping => "I like helping people work through their problems.",
            TraitKind::Medical => "The human body, medicine, and health interest me.",
            TraitKind::Leadership => "I step up to organize groups and make plans happen.",
            TraitKind::Outdoors => "I'd rather be outside than at a desk.",
        }
    }
}

/// Default slider position, the neutral midpoint.
pub const DEFAULT_TRAIT_VALUE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Pathway {
    StemTech,
    CreativeArts,
    TradesTech,
    HealthHuman,
    BusinessLeadership,
    ActiveLiving,
}

impl Pathway {
    pub const ALL: [Pathway; 6] = [
        Pathway::StemTech,
        Pathway::CreativeArts,
        Pathway::TradesTech,
        Pathway::HealthHuman,
        Pathway::BusinessLeadership,
        Pathway::ActiveLiving,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pathway::StemTech => "STEM & Tech",
            Pathway::CreativeArts => "Creative Arts",
            Pathway::TradesTech => "Trades & Technology",
            Pathway::HealthHuman => "Health & Human Services",
            Pathway::BusinessLeadership => "Business & Leadership",
            Pathway::ActiveLiving => "Active Living",
        }
    }

    /// Trait subset averaged for this pathway. Active Living is not a mean;
    /// the scorer special-cases it as sports scaled by 1.2.
    pub fn traits(self) -> &'static [TraitKind] {
        match self {
            Pathway::StemTech => &[
                TraitKind::Math,
                TraitKind::Coding,
                TraitKind::Science,
                TraitKind::Mechanical,
            ],
            Pathway::CreativeArts => &[
                TraitKind::Art,
                TraitKind::Music,
                TraitKind::Writing,
                TraitKind::Building,
            ],
            Pathway::TradesTech => &[
                TraitKind::Building,
                TraitKind::Mechanical,
                TraitKind::Outdoors,
            ],
            Pathway::HealthHuman => &[
                TraitKind::Medical,
                TraitKind::Helping,
                TraitKind::Science,
            ],
            Pathway::BusinessLeadership => &[
                TraitKind::Leadership,
                TraitKind::Writing,
                TraitKind::Math,
            ],
            Pathway::ActiveLiving => &[TraitKind::Sports],
        }
    }
}

/// Multiplier for the single-trait Active Living pathway.
pub const ACTIVE_LIVING_FACTOR: f32 = 1.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_names_round_trip() {
        for kind in TraitKind::ALL {
            assert_eq!(TraitKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(TraitKind::from_name("robotics"), None);
    }

    #[test]
    fn every_trait_feeds_at_least_one_pathway() {
        for kind in TraitKind::ALL {
            let used = Pathway::ALL
                .iter()
                .any(|pathway| pathway.traits().contains(&kind));
            assert!(used, "trait {} is orphaned", kind.name());
        }
    }

    #[test]
    fn overlapping_subsets_are_intentional() {
        assert!(Pathway::CreativeArts.traits().contains(&TraitKind::Building));
        assert!(Pathway::TradesTech.traits().contains(&TraitKind::Building));
        assert!(Pathway::StemTech.traits().contains(&TraitKind::Science));
        assert!(Pathway::HealthHuman.traits().contains(&TraitKind::Science));
    }
}
