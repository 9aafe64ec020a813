//! Typed records and validated values.

use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};

/// `user` and `password` are required; the rest may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

impl Credentials {
    /// Missing required keys are rejected here, not later.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

pub fn authenticate(credentials: &Credentials) -> bool {
    !credentials.user.is_empty() && !credentials.password.is_empty()
}

/// An integer known to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = PatternError;

    fn try_from(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(PatternError::OutOfRange {
                field: "score",
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Score(value as u8))
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> i64 {
        i64::from(score.0)
    }
}

/// Takes a `Score`, so validation already happened at the boundary.
pub fn record_score(score: Score) -> String {
    tracing::info!(score = score.value(), "score recorded");
    format!("recorded score {}", score.value())
}
