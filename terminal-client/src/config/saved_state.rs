use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::{GameMode, Player, ScoreTally, SessionSettings};

const CONFIG_FILE_NAME: &str = "tictactoe_client_state.yaml";
pub const MAX_AI_DELAY_MS: u64 = 5000;

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, SavedState, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

/// Flat record kept between runs.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SavedState {
    pub score_x: u32,
    pub score_o: u32,
    pub score_d: u32,
    pub mode: GameMode,
    pub first: Player,
    pub ai_delay_ms: u64,
}

impl SavedState {
    pub fn scores(&self) -> ScoreTally {
        ScoreTally::new(self.score_x, self.score_o, self.score_d)
    }

    pub fn settings(&self) -> SessionSettings {
        SessionSettings::new(self.mode, self.first)
    }

    pub fn update(&mut self, scores: ScoreTally, settings: SessionSettings) {
        self.score_x = scores.x;
        self.score_o = scores.o;
        self.score_d = scores.draws;
        self.mode = settings.mode;
        self.first = settings.first_player;
    }
}

impl Validate for SavedState {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!(
                "ai_delay_ms must not exceed {} (got {})",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            score_x: 0,
            score_o: 0,
            score_d: 0,
            mode: GameMode::Pvp,
            first: Player::X,
            ai_delay_ms: 250,
        }
    }
}
