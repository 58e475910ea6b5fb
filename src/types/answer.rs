use crate::catalog::questions::QUESTIONS;
use crate::catalog::traits::{TraitKind, DEFAULT_TRAIT_VALUE};
use crate::error::{CompassError, Result};
use std::collections::BTreeMap;

/// One response to a forced-choice question. Missing answers read as
/// `Unanswered` and contribute nothing; that is a silent default, not a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice {
    #[default]
    Unanswered,
    First,
    Second,
}

impl Choice {
    pub fn from_code(code: u8) -> Option<Choice> {
        match code {
            0 => Some(Choice::Unanswered),
            1 => Some(Choice::First),
            2 => Some(Choice::Second),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Choice::Unanswered => 0,
            Choice::First => 1,
            Choice::Second => 2,
        }
    }
}

/// Raw answers for one quiz submission, keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    answers: BTreeMap<u32, Choice>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: u32, choice: Choice) {
        self.answers.insert(id, choice);
    }

    pub fn get(&self, id: u32) -> Choice {
        self.answers.get(&id).copied().unwrap_or_default()
    }

    /// Parse a compact answer string: one digit (0, 1 or 2) per question,
    /// in catalog order.
    pub fn from_compact(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.chars().count() != QUESTIONS.len() {
            return Err(CompassError::AnswerParse(format!(
                "expected {} answer digits, found {}",
                QUESTIONS.len(),
                trimmed.chars().count()
            )));
        }
        let mut sheet = AnswerSheet::new();
        for (question, ch) in QUESTIONS.iter().zip(trimmed.chars()) {
            let code = ch
                .to_digit(10)
                .and_then(|digit| Choice::from_code(digit as u8))
                .ok_or_else(|| {
                    CompassError::AnswerParse(format!(
                        "question {}: '{}' is not a response code (0, 1 or 2)",
                        question.id, ch
                    ))
                })?;
            sheet.set(question.id, code);
        }
        Ok(sheet)
    }

    /// Parse a JSON object mapping question id to response code, e.g.
    /// `{"1": 2, "7": 1}`. Ids outside the catalog are ignored; they belong
    /// to no category. Missing ids stay unanswered.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: BTreeMap<u32, u8> = serde_json::from_str(text)?;
        let mut sheet = AnswerSheet::new();
        for (id, code) in raw {
            let choice = Choice::from_code(code).ok_or_else(|| {
                CompassError::AnswerParse(format!(
                    "question {id}: {code} is not a response code (0, 1 or 2)"
                ))
            })?;
            sheet.set(id, choice);
        }
        Ok(sheet)
    }
}

/// Slider positions for one trait submission. Every trait always has a
/// value; sliders the respondent never touched sit at the neutral midpoint.
#[derive(Debug, Clone)]
pub struct TraitSheet {
    values: [u8; TraitKind::ALL.len()],
}

impl Default for TraitSheet {
    fn default() -> Self {
        Self {
            values: [DEFAULT_TRAIT_VALUE; TraitKind::ALL.len()],
        }
    }
}

impl TraitSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: TraitKind) -> u8 {
        self.values[kind as usize]
    }

    pub fn set(&mut self, kind: TraitKind, value: u8) -> Result<()> {
        if !(1..=10).contains(&value) {
            return Err(CompassError::TraitParse(format!(
                "{}: {} is outside the slider range 1-10",
                kind.name(),
                value
            )));
        }
        self.values[kind as usize] = value;
        Ok(())
    }

    /// Parse a comma-separated value list in trait catalog order.
    pub fn from_list(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != TraitKind::ALL.len() {
            return Err(CompassError::TraitParse(format!(
                "expected {} trait values, found {}",
                TraitKind::ALL.len(),
                parts.len()
            )));
        }
        let mut sheet = TraitSheet::new();
        for (kind, part) in TraitKind::ALL.iter().zip(parts) {
            let value: u8 = part.parse().map_err(|_| {
                CompassError::TraitParse(format!("{}: '{}' is not an integer", kind.name(), part))
            })?;
            sheet.set(*kind, value)?;
        }
        Ok(sheet)
    }

    /// Parse a JSON object mapping trait name to value, e.g.
    /// `{"coding": 9, "math": 8}`. Unknown names are rejected; a typo would
    /// otherwise silently leave the intended trait at its default.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: BTreeMap<String, u8> = serde_json::from_str(text)?;
        let mut sheet = TraitSheet::new();
        for (name, value) in raw {
            let kind = TraitKind::from_name(&name).ok_or_else(|| {
                CompassError::TraitParse(format!("unknown trait name: {name}"))
            })?;
            sheet.set(kind, value)?;
        }
        Ok(sheet)
    }

    /// Sum of all raw slider values, the engagement-gate input.
    pub fn total(&self) -> u32 {
        self.values.iter().map(|value| u32::from(*value)).sum()
    }
}
