pub mod json;
pub mod md;

use crate::catalog::questions::{QuestionItem, QUESTIONS};
use crate::catalog::traits::TraitKind;
use crate::error::CompassError;
use crate::types::outcome::Outcome;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, CompassError> {
    match format {
        OutputFormat::Json => json::to_json(outcome).map_err(CompassError::Json),
        OutputFormat::Md => Ok(md::to_markdown(outcome)),
    }
}

#[derive(Serialize)]
struct TraitView {
    name: &'static str,
    prompt: &'static str,
}

#[derive(Serialize)]
struct CatalogView {
    questions: &'static [QuestionItem],
    traits: Vec<TraitView>,
}

pub fn render_catalog(format: OutputFormat) -> Result<String, CompassError> {
    match format {
        OutputFormat::Json => {
            let view = CatalogView {
                questions: &QUESTIONS,
                traits: TraitKind::ALL
                    .iter()
                    .map(|kind| TraitView {
                        name: kind.name(),
                        prompt: kind.prompt(),
                    })
                    .collect(),
            };
            serde_json::to_string_pretty(&view).map_err(CompassError::Json)
        }
        OutputFormat::Md => Ok(md::catalog_to_markdown()),
    }
}
