//! Error types for the tablature engine
//!
//! Only catastrophic conditions surface as errors; recoverable problems
//! (malformed CSV rows, unmappable notes) degrade results instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("tuning has no strings")]
    EmptyTuning,

    #[error("unrecognized pitch name: '{0}'")]
    UnknownPitch(String),

    #[error("invalid scale: {0}")]
    InvalidScale(String),
}
