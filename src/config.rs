//! Demo settings read from an optional TOML file.
//!
//! ```toml
//! rides = 5
//! seed = 42
//! ```

use crate::error::{PatternError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// How many random vehicle requests the factory demos make.
    pub rides: usize,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rides: 10,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Load from `$PATTERNS_CONFIG`, falling back to `patterns.toml`.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .map_err(|err| PatternError::Config(format!("{}: {err}", path.display()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|err| PatternError::Config(err.to_string()))?;
        if config.rides == 0 {
            return Err(PatternError::Config("rides must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DemoConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 7").unwrap();

        let config = DemoConfig::load_from(file.path()).unwrap();
        assert_eq!(config.rides, 10);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rides = \"lots\"").unwrap();

        assert!(matches!(
            DemoConfig::load_from(file.path()),
            Err(PatternError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key_and_zero_rides_rejected() {
        assert!(DemoConfig::parse("colour = 1").is_err());
        assert!(DemoConfig::parse("rides = 0").is_err());
    }

    #[test]
    fn test_seed_makes_rng_reproducible() {
        let config = DemoConfig::parse("seed = 42").unwrap();
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
