use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::game::Tally;

/// Which quiz the team picker drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizMode {
    /// Name a player's teams in order; the team picker only looks teams up.
    #[default]
    Player,
    /// Name every player of the picked team.
    Team,
}

/// Input that names neither quiz mode.
#[derive(Debug, Error)]
#[error("unknown quiz mode `{0}` (expected `player` or `team`)")]
pub struct ParseModeError(String);

impl FromStr for QuizMode {
    type Err = ParseModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "player" => Ok(QuizMode::Player),
            "team" => Ok(QuizMode::Team),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizMode::Player => "player",
            QuizMode::Team => "team",
        })
    }
}

/// Mutually exclusive screens of the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Welcome,
    PlayerTest,
    Profile,
    TeamTest,
}

/// Everything the quiz remembers between interactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub mode: QuizMode,
    pub screen: Screen,
    /// Player being quizzed on the player-test screen.
    pub current_player: Option<String>,
    pub current_profile: Option<String>,
    /// Team being quizzed on the team-test screen.
    pub current_team: Option<String>,
    /// Player-mode quizzes only.
    pub tally: Tally,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!("Player".parse::<QuizMode>().unwrap(), QuizMode::Player);
        assert_eq!(" team ".parse::<QuizMode>().unwrap(), QuizMode::Team);
        assert!("league".parse::<QuizMode>().is_err());
    }

    #[test]
    fn fresh_session_starts_on_welcome_in_player_mode() {
        let session = Session::default();
        assert_eq!(session.mode, QuizMode::Player);
        assert_eq!(session.screen, Screen::Welcome);
        assert_eq!(session.tally, Tally::default());
    }
}
