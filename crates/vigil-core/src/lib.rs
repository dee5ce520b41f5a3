//! vigil-core
//!
//! Pure domain vocabulary for the clinical decision support engine: the
//! structured clinical inputs the scorers consume, the score and care-gap
//! result shapes they produce, the injectable clock and engine config.
//! No scoring logic lives here.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
