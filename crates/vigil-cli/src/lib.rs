//! vigil-cli library root.
//!
//! Config loading and request dispatch live here so integration tests can
//! drive them without spawning the `vigil-eval` binary.

pub mod config;
pub mod request;
