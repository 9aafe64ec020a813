//! Exhaustiveness, divergence and narrowing dynamic data.

use crate::error::{PatternError, Result};
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl FromStr for Color {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(PatternError::invalid_tag("color", other)),
        }
    }
}

/// No wildcard arm: adding a `Color` variant breaks the build here.
pub fn paint(color: Color) -> &'static str {
    match color {
        Color::Red => "painting red",
        Color::Green => "painting green",
        Color::Blue => "painting blue",
    }
}

/// Never returns; usable wherever any type is expected.
pub fn abort(message: &str) -> ! {
    panic!("{message}")
}

/// Strings come back as-is, everything else is rendered.
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    LoggedIn(String),
    LoggedOut,
    Ignored(Value),
}

pub fn process_event(event: &Value) -> EventOutcome {
    match event.get("type").and_then(Value::as_str) {
        Some("login") => match event.get("user") {
            Some(Value::String(user)) => EventOutcome::LoggedIn(user.to_uppercase()),
            // A login without a string user narrows to nothing useful.
            _ => EventOutcome::Ignored(event.clone()),
        },
        Some("logout") => EventOutcome::LoggedOut,
        _ => {
            let kind = event.get("type").cloned().unwrap_or(Value::Null);
            tracing::debug!(%kind, "ignored event");
            EventOutcome::Ignored(kind)
        }
    }
}
