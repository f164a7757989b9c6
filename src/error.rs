//! Configuration errors
//!
//! The simulation itself never fails: invalid intents degrade to no-ops.
//! Only loading a [`crate::Tuning`] can go wrong.

use thiserror::Error;

/// Errors raised while loading or validating gameplay tuning.
#[derive(Error, Debug)]
pub enum TuningError {
    /// Tuning file could not be read.
    #[error("failed to read tuning: {0}")]
    Io(#[from] std::io::Error),

    /// Tuning JSON was malformed.
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tuning value is outside its allowed range.
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

pub type TuningResult<T> = Result<T, TuningError>;
