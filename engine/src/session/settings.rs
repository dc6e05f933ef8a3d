use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Pvp,
    Ai,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Pvp => write!(f, "pvp"),
            GameMode::Ai => write!(f, "ai"),
        }
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "ai" => Ok(GameMode::Ai),
            other => Err(format!("Unknown mode '{}', expected pvp or ai", other)),
        }
    }
}

/// Choices applied by every new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub mode: GameMode,
    pub first_player: Player,
}

impl SessionSettings {
    pub fn new(mode: GameMode, first_player: Player) -> Self {
        Self { mode, first_player }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_case_insensitively() {
        assert_eq!("AI".parse::<GameMode>(), Ok(GameMode::Ai));
        assert_eq!("pvp".parse::<GameMode>(), Ok(GameMode::Pvp));
        assert!("online".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_default_settings_are_pvp_with_x_first() {
        let settings = SessionSettings::default();
        assert_eq!(settings.mode, GameMode::Pvp);
        assert_eq!(settings.first_player, Player::X);
    }
}
