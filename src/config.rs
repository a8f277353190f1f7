//! Startup configuration: board shape and house rules, read from TOML.
//!
//! ```toml
//! [board]
//! long_side = 6
//! short_side = 3
//!
//! [rules]
//! num_puppets = 4
//! clear_exit = false
//! ```
//!
//! Missing keys fall back to the defaults of [`BoardShape`] and [`GameRules`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{board::BoardShape, game::GameRules};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardShape,
    pub rules: GameRules,
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.board, BoardShape::new(6, 3));
        assert_eq!(config.rules.num_players, 4);
        assert_eq!(config.rules.num_puppets, 4);
        assert!(config.rules.jump_in_house);
        assert!(config.rules.clear_exit);
        assert!(config.rules.six_force_exit);
        assert!(!config.rules.cross_junction);
        assert!(!config.rules.backwards_attack);
    }

    #[test]
    fn test_partial_override() {
        let config = GameConfig::from_toml_str(
            r#"
            [board]
            long_side = 5

            [rules]
            clear_exit = false
            num_puppets = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.board, BoardShape::new(5, 3));
        assert!(!config.rules.clear_exit);
        assert_eq!(config.rules.num_puppets, 3);
        assert!(config.rules.six_force_exit);
    }

    #[test]
    fn test_non_integer_side_is_rejected() {
        let err = GameConfig::from_toml_str("[board]\nlong_side = 5.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_oversized_board_fails_startup() {
        let config = GameConfig::from_toml_str("[board]\nlong_side = 2147483647\n").unwrap();
        assert_eq!(config.board.long_side, i32::MAX);
        let err = crate::GameSession::from_config(&config).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
