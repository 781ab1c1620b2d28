//! # Trainer Errors
//!
//! Errors raised by the terminal front-end.

use prim_core::PrimError;
use thiserror::Error;

/// Errors that can occur in the trainer binary.
///
/// Core errors are wrapped unchanged so callers can still match on them.
#[derive(Debug, Error)]
pub enum TrainerError {
    /// A structural error from the engine.
    #[error(transparent)]
    Core(#[from] PrimError),

    /// The graph file is unreadable or inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// The play loop could not parse a command line.
    #[error("Bad command: {0}")]
    Command(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrainerError {
    /// True for errors the play loop reports and recovers from.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Core(_) | Self::Command(_))
    }
}
