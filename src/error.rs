use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompassError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("answer input error: {0}")]
    AnswerParse(String),

    #[error("trait input error: {0}")]
    TraitParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CompassError>;
