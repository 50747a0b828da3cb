use std::path::Path;

use serde::{Deserialize, Serialize};
use tictacgo_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictacgo_common::games::tictacgo::Player;

pub const CONFIG_FILE_NAME: &str = "tictacgo.yaml";
pub const MAX_DIMENSION: usize = 20;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    /// `player_one` starts.
    Host,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Validate for BoardConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.width > MAX_DIMENSION {
            return Err(format!("board.width must be between 1 and {}", MAX_DIMENSION));
        }
        if self.height == 0 || self.height > MAX_DIMENSION {
            return Err(format!("board.height must be between 1 and {}", MAX_DIMENSION));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub symbol: String,
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        Player::new(self.name.trim(), self.symbol.as_str())
    }
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("player name must not be empty".to_string());
        }
        let mut chars = self.symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && c != '|' => Ok(()),
            _ => Err(format!(
                "symbol {:?} of {} must be a single visible character other than '|'",
                self.symbol, self.name
            )),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub board: BoardConfig,
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub clear_screen: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        self.player_one.validate()?;
        self.player_two.validate()?;

        if self.player_one.symbol == self.player_two.symbol {
            return Err("the two players must use different symbols".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig { width: 3, height: 3 },
            player_one: PlayerConfig {
                name: "Alice".to_string(),
                symbol: "o".to_string(),
            },
            player_two: PlayerConfig {
                name: "Bob".to_string(),
                symbol: "x".to_string(),
            },
            first_player: FirstPlayerMode::Host,
            clear_screen: true,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tictacgo_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictacgo_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        assert!(serialized.contains("first_player: host"));
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_manager() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        assert_eq!(manager.get_config().unwrap(), Config::default());

        let mut config = Config::default();
        config.board.width = 5;
        config.first_player = FirstPlayerMode::Random;
        manager.set_config(&config).unwrap();

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let content = FileContentConfigProvider::new(file_path.clone())
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("width: 5"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_flags_default_when_missing_from_yaml() {
        let yaml = "board:\n  width: 4\n  height: 3\nplayer_one:\n  name: Ann\n  symbol: a\nplayer_two:\n  name: Ben\n  symbol: b\nfirst_player: random\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert!(!config.clear_screen);
        assert!(!config.verbose);
        assert_eq!(config.first_player, FirstPlayerMode::Random);
    }

    #[test]
    fn test_board_dimensions_are_bounded() {
        let mut config = Config::default();
        config.board.width = 0;
        assert!(config.validate().is_err());

        config.board.width = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());

        config.board.width = MAX_DIMENSION;
        config.board.height = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_validation() {
        let mut config = Config::default();
        config.player_two.symbol = "o".to_string();
        assert_eq!(
            config.validate(),
            Err("the two players must use different symbols".to_string())
        );

        let mut config = Config::default();
        config.player_one.symbol = "ox".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.player_one.symbol = "|".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.player_two.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_player_trims_name() {
        let player = PlayerConfig {
            name: "  Ann ".to_string(),
            symbol: "a".to_string(),
        }
        .to_player();
        assert_eq!(player, Player::new("Ann", "a"));
    }
}
