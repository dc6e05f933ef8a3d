use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameMode, ScoreTally, SessionSettings};
    use crate::tictactoe::Player;

    #[test]
    fn test_settings_use_flat_lowercase_names() {
        let settings = SessionSettings::new(GameMode::Ai, Player::O);
        let yaml = YamlConfigSerializer::new().serialize(&settings).unwrap();

        assert!(yaml.contains("mode: ai"));
        assert!(yaml.contains("first_player: O"));
    }

    #[test]
    fn test_tally_reads_back() {
        let serializer = YamlConfigSerializer::new();
        let tally: ScoreTally = serializer.deserialize("x: 3\no: 1\ndraws: 5\n").unwrap();
        assert_eq!(tally, ScoreTally::new(3, 1, 5));
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<ScoreTally, String> = serializer.deserialize("x: [not a number");
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }
}
