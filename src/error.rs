//! Error types shared by every pattern module.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Every failure a demo can report. Invalid discriminators and out-of-range
/// values surface here immediately; nothing is defaulted or retried.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("vehicle '{tag}' does not exist")]
    UnknownVehicle { tag: String },

    #[error("value {value} for '{field}' is out of range (min: {min}, max: {max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("value {value} for '{field}' is out of range (min: {min}, max: {max})")]
    OutOfRangeFloat {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("'{tag}' is not a valid {kind}")]
    InvalidTag { kind: &'static str, tag: String },

    #[error("failed to read data: {0}")]
    Io(#[from] io::Error),

    #[error("data is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("generator already returned")]
    GeneratorExhausted,

    #[error("can't send '{message}' to a generator that has not started")]
    GeneratorNotStarted { message: String },
}

impl PatternError {
    pub fn unknown_vehicle(tag: impl Into<String>) -> Self {
        Self::UnknownVehicle { tag: tag.into() }
    }

    pub fn invalid_tag(kind: &'static str, tag: impl Into<String>) -> Self {
        Self::InvalidTag {
            kind,
            tag: tag.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
