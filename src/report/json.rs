use crate::types::outcome::Outcome;

pub fn to_json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}
