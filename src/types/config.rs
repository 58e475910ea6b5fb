use crate::error::CompassError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CompassConfig {
    pub engagement: Option<EngagementConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngagementConfig {
    pub quiz_threshold: Option<f32>,
    pub trait_threshold: Option<u32>,
}

/// Resolved policy constants. The thresholds are heuristics, not derived
/// cutoffs, and the two variants' scales are deliberately not reconciled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub quiz_threshold: f32,
    pub trait_threshold: u32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            quiz_threshold: 48.0,
            trait_threshold: 48,
        }
    }
}

impl CompassConfig {
    pub fn policy(&self) -> Policy {
        let defaults = Policy::default();
        match &self.engagement {
            Some(engagement) => Policy {
                quiz_threshold: engagement.quiz_threshold.unwrap_or(defaults.quiz_threshold),
                trait_threshold: engagement
                    .trait_threshold
                    .unwrap_or(defaults.trait_threshold),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), CompassError> {
        if let Some(engagement) = &self.engagement {
            if let Some(quiz_threshold) = engagement.quiz_threshold {
                if !(0.0..=100.0).contains(&quiz_threshold) {
                    return Err(CompassError::ConfigParse(
                        "engagement.quiz_threshold must be between 0 and 100".to_string(),
                    ));
                }
            }
            if let Some(trait_threshold) = engagement.trait_threshold {
                if trait_threshold > 130 {
                    return Err(CompassError::ConfigParse(
                        "engagement.trait_threshold must not exceed 130".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
