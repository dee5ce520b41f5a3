use jiff::civil::Date;
use thiserror::Error;
use vigil_core::error::CoreError;

#[derive(Debug, Error)]
pub enum CareGapError {
    #[error("invalid age: {0}")]
    InvalidAge(u32),

    #[error("'{key}' date {date} is after today ({today})")]
    FutureDate { key: String, date: Date, today: Date },

    #[error("invalid keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("date arithmetic failed: {0}")]
    Date(#[from] jiff::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
