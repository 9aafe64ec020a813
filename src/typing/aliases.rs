//! Constants, aliases, newtypes and literal-like enums.

use crate::error::{PatternError, Result};
use std::fmt;
use std::str::FromStr;

pub const MAX_ITEMS: usize = 10;
pub const PI: f64 = std::f64::consts::PI;

/// An alias documents intent but is interchangeable with `String`.
pub type HexStr = String;

/// A newtype is a distinct type: a bare `u64` will not type-check here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user#{}", self.0)
    }
}

pub fn describe_user(id: UserId) -> String {
    format!("looking up {id}")
}

/// `None` for an empty name.
pub fn find_user(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// The only modes `open_path` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoMode {
    #[default]
    Read,
    Write,
    Append,
    ReadBinary,
    WriteBinary,
}

impl IoMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IoMode::Read => "r",
            IoMode::Write => "w",
            IoMode::Append => "a",
            IoMode::ReadBinary => "rb",
            IoMode::WriteBinary => "wb",
        }
    }
}

impl FromStr for IoMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "r" => Ok(IoMode::Read),
            "w" => Ok(IoMode::Write),
            "a" => Ok(IoMode::Append),
            "rb" => Ok(IoMode::ReadBinary),
            "wb" => Ok(IoMode::WriteBinary),
            other => Err(PatternError::invalid_tag("I/O mode", other)),
        }
    }
}

pub fn open_path(path: &str, mode: IoMode) -> String {
    format!("open {path} with mode '{}'", mode.as_str())
}

/// Associated constants belong to the type, not to any instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
}

impl ServerConfig {
    pub const DEFAULT_TIMEOUT: u32 = 30;

    pub fn new(host: impl Into<String>) -> Self {
        ServerConfig { host: host.into() }
    }
}

/// Only string literals (`&'static str`) may reach the query runner, so a
/// query cannot be assembled from runtime input.
pub fn run_sql(query: &'static str) -> String {
    format!("executing: {query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_user_returns_none_for_empty() {
        assert_eq!(find_user("joao").map(|u| u.to_uppercase()), Some("JOAO".into()));
        assert_eq!(find_user(""), None);
    }

    #[test]
    fn test_io_mode_parses_only_known_literals() {
        assert_eq!("rb".parse::<IoMode>().unwrap(), IoMode::ReadBinary);
        assert_eq!(IoMode::default(), IoMode::Read);
        assert!(matches!(
            "x".parse::<IoMode>(),
            Err(PatternError::InvalidTag { kind: "I/O mode", .. })
        ));
        assert_eq!(open_path("/tmp/a", IoMode::Append), "open /tmp/a with mode 'a'");
    }

    #[test]
    fn test_newtype_and_alias() {
        let hex: HexStr = "076a9c7b".to_string();
        let plain: String = hex;
        assert_eq!(plain.len(), 8);
        assert_eq!(describe_user(UserId(3243434312)), "looking up user#3243434312");
    }

    #[test]
    fn test_associated_const() {
        let config = ServerConfig::new("localhost");
        assert_eq!(config.host, "localhost");
        assert_eq!(ServerConfig::DEFAULT_TIMEOUT, 30);
        assert!(MAX_ITEMS > 0);
    }
}
