use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputProvider;

/// Parameters for a single lottery run. Immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryConfig {
    /// Starting balance of every player, in whole currency units.
    pub player_balance: u32,
    /// Price of one ticket, in whole currency units.
    pub ticket_price: u32,
    /// Minimum total player count, primary player included.
    pub min_players: u32,
    /// Maximum total player count, primary player included.
    pub max_players: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("min_players ({min}) exceeds max_players ({max})")]
    PlayerRange { min: u32, max: u32 },

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            player_balance: 10,
            ticket_price: 1,
            min_players: 10,
            max_players: 15,
        }
    }
}

impl LotteryConfig {
    pub fn new(
        player_balance: u32,
        ticket_price: u32,
        min_players: u32,
        max_players: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            player_balance,
            ticket_price,
            min_players,
            max_players,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("player_balance", self.player_balance),
            ("ticket_price", self.ticket_price),
            ("min_players", self.min_players),
            ("max_players", self.max_players),
        ] {
            if value == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        if self.min_players > self.max_players {
            return Err(ConfigError::PlayerRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Ask for every field through `input`. Invalid answers fall back to the
    /// field default, so the result is always usable.
    pub fn prompt(input: &mut dyn InputProvider, bounds: &ConfigBounds) -> Self {
        let player_balance = bounds.player_balance.ask(
            input,
            "Enter the starting balance for each player",
        );
        let ticket_price = bounds.ticket_price.ask(input, "Enter the ticket price");
        let min_players = bounds
            .min_players
            .ask(input, "Enter the minimum number of players");
        let mut max_players = bounds
            .max_players
            .ask(input, "Enter the maximum number of players");

        if max_players < min_players {
            tracing::warn!(
                min_players,
                max_players,
                "maximum player count below minimum, raising it to the minimum"
            );
            max_players = min_players;
        }

        Self {
            player_balance,
            ticket_price,
            min_players,
            max_players,
        }
    }
}

/// Accepted range and fallback for one prompted config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBounds {
    pub default: u32,
    pub min: u32,
    pub max: u32,
}

impl FieldBounds {
    pub const fn new(default: u32, min: u32, max: u32) -> Self {
        Self { default, min, max }
    }

    fn ask(&self, input: &mut dyn InputProvider, label: &str) -> u32 {
        let prompt = format!("{label} ({} default): ", self.default);
        input.get_validated_int(&prompt, self.default, self.min, self.max)
    }
}

/// Bounds used when the config is entered interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBounds {
    pub player_balance: FieldBounds,
    pub ticket_price: FieldBounds,
    pub min_players: FieldBounds,
    pub max_players: FieldBounds,
}

impl Default for ConfigBounds {
    fn default() -> Self {
        Self {
            player_balance: FieldBounds::new(10, 1, 100),
            ticket_price: FieldBounds::new(1, 1, 10),
            min_players: FieldBounds::new(10, 2, 50),
            max_players: FieldBounds::new(15, 10, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::input::{DefaultInput, ScriptedInput};

    #[test]
    fn default_config_is_valid() {
        assert!(LotteryConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_field_rejected() {
        let err = LotteryConfig::new(10, 0, 2, 5).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "ticket_price" }));
    }

    #[test]
    fn inverted_player_range_rejected() {
        let err = LotteryConfig::new(10, 1, 8, 4).unwrap_err();
        assert!(matches!(err, ConfigError::PlayerRange { min: 8, max: 4 }));
        assert_eq!(err.to_string(), "min_players (8) exceeds max_players (4)");
    }

    #[test]
    fn equal_min_and_max_accepted() {
        let config = LotteryConfig::new(5, 2, 3, 3).unwrap();
        assert_eq!(config.min_players, config.max_players);
    }

    #[test]
    fn prompt_with_no_answers_uses_defaults() {
        let config = LotteryConfig::prompt(&mut DefaultInput, &ConfigBounds::default());
        assert_eq!(config, LotteryConfig::default());
    }

    #[test]
    fn prompt_takes_valid_answers_and_defaults_bad_ones() {
        let mut input = ScriptedInput::new(["50", "abc", "20", "500"]);
        let config = LotteryConfig::prompt(&mut input, &ConfigBounds::default());
        assert_eq!(config.player_balance, 50);
        assert_eq!(config.ticket_price, 1);
        assert_eq!(config.min_players, 20);
        assert_eq!(config.max_players, 20, "default 15 is raised to min 20");
    }

    #[test]
    fn prompt_raises_max_below_min() {
        let mut input = ScriptedInput::new(["10", "1", "40", "12"]);
        let config = LotteryConfig::prompt(&mut input, &ConfigBounds::default());
        assert_eq!(config.min_players, 40);
        assert_eq!(config.max_players, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"player_balance": 20, "ticket_price": 2, "min_players": 3, "max_players": 6}}"#
        )
        .unwrap();
        let config = LotteryConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, LotteryConfig::new(20, 2, 3, 6).unwrap());
    }

    #[test]
    fn json_file_is_validated() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"player_balance": 20, "ticket_price": 2, "min_players": 9, "max_players": 6}}"#
        )
        .unwrap();
        let err = LotteryConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PlayerRange { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = LotteryConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LotteryConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
