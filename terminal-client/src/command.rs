use tictactoe_engine::{GameMode, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    PlaceMark(usize),
    NewGame {
        mode: Option<GameMode>,
        first: Option<Player>,
    },
    ResetScores,
    Help,
    Quit,
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9                  place your mark (cells numbered left to right, top to bottom)
  new [pvp|ai] [x|o]   start a new game, optionally changing mode and first player
  reset                reset the score tally
  help                 show this text
  quit                 exit";

/// Returns `None` for blank input.
pub fn parse_command(line: &str) -> Option<ClientCommand> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_ascii_lowercase();

    let command = match head.as_str() {
        "new" | "n" => parse_new_game(words),
        "reset" => ClientCommand::ResetScores,
        "help" | "h" | "?" => ClientCommand::Help,
        "quit" | "exit" | "q" => ClientCommand::Quit,
        cell => match cell.parse::<usize>() {
            Ok(number @ 1..=9) => ClientCommand::PlaceMark(number - 1),
            _ => ClientCommand::Invalid(format!("Unknown command '{}'. Type 'help'.", line.trim())),
        },
    };

    Some(command)
}

fn parse_new_game<'a>(words: impl Iterator<Item = &'a str>) -> ClientCommand {
    let mut mode = None;
    let mut first = None;

    for word in words {
        if let Ok(parsed) = word.parse::<GameMode>() {
            mode = Some(parsed);
        } else if let Ok(parsed) = word.parse::<Player>() {
            first = Some(parsed);
        } else {
            return ClientCommand::Invalid(format!(
                "Unknown option '{}' for new: expected pvp, ai, x or o",
                word
            ));
        }
    }

    ClientCommand::NewGame { mode, first }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_zero_based_cells() {
        assert_eq!(parse_command("1"), Some(ClientCommand::PlaceMark(0)));
        assert_eq!(parse_command(" 9 "), Some(ClientCommand::PlaceMark(8)));
    }

    #[test]
    fn test_out_of_range_digits_are_invalid() {
        assert!(matches!(parse_command("0"), Some(ClientCommand::Invalid(_))));
        assert!(matches!(parse_command("10"), Some(ClientCommand::Invalid(_))));
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_new_game_options_in_any_order() {
        assert_eq!(
            parse_command("new o ai"),
            Some(ClientCommand::NewGame {
                mode: Some(GameMode::Ai),
                first: Some(Player::O)
            })
        );
        assert_eq!(
            parse_command("NEW"),
            Some(ClientCommand::NewGame {
                mode: None,
                first: None
            })
        );
    }

    #[test]
    fn test_new_game_rejects_unknown_option() {
        assert!(matches!(parse_command("new online"), Some(ClientCommand::Invalid(_))));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("reset"), Some(ClientCommand::ResetScores));
        assert_eq!(parse_command("?"), Some(ClientCommand::Help));
        assert_eq!(parse_command("quit"), Some(ClientCommand::Quit));
    }
}
