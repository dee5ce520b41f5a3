use thiserror::Error;
use vigil_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("score {score} is outside [{min}, {max}]")]
    ScoreOutOfRange { score: u32, min: u32, max: u32 },

    #[error("invalid bands: {0}")]
    InvalidBands(String),

    #[error("{subscale} rating {value} is outside [{min}, {max}]")]
    InvalidSubscale {
        subscale: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("invalid vital sign {field}: {value}")]
    InvalidVital { field: String, value: f64 },

    #[error("invalid lab value {field}: {value}")]
    InvalidLab { field: String, value: f64 },

    #[error("invalid risk factor {field}: {message}")]
    InvalidFactor { field: String, message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}
