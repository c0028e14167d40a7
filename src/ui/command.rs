use rand::Rng;
use thiserror::Error;

use crate::ui::{
    controller::{Submission, UiController, UiError},
    session::{ParseModeError, QuizMode, Screen},
    view::ViewPort,
};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  players             list every player
  teams               show the team picker with player counts
  mode <player|team>  choose what picking a team does
  test <name>         quiz a player's teams in order
  random              quiz a random player
  profile <name>      show a player's profile and story
  team <CODE>         look a team up (player mode) or quiz it (team mode)
  answer a, b, c      submit comma-separated answers to the current quiz
  hint                show the story of the player being quizzed
  reveal              reveal every player of the current team
  reset               clear the answers of the current quiz
  home                back to the welcome screen
  help                show this help
  quit                leave the quiz";

/// One line of input in the interactive quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Players,
    Teams,
    Mode(QuizMode),
    Test(String),
    Random,
    Profile(String),
    Team(String),
    Answer(Vec<String>),
    Hint,
    Reveal,
    Reset,
    Home,
    Help,
    Quit,
}

/// Reasons an input line is not a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error(transparent)]
    Mode(#[from] ParseModeError),
}

/// What the input loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; the command word is case-insensitive.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let required = |command: &'static str, argument: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command, argument })
            } else {
                Ok(rest.to_owned())
            }
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "players" => Ok(Command::Players),
            "teams" => Ok(Command::Teams),
            "mode" => Ok(Command::Mode(required("mode", "mode")?.parse()?)),
            "test" => required("test", "player name").map(Command::Test),
            "random" => Ok(Command::Random),
            "profile" => required("profile", "player name").map(Command::Profile),
            "team" => required("team", "team code").map(|code| Command::Team(code.to_uppercase())),
            "answer" => Ok(Command::Answer(
                rest.split(',').map(|answer| answer.trim().to_owned()).collect(),
            )),
            "hint" => Ok(Command::Hint),
            "reveal" => Ok(Command::Reveal),
            "reset" => Ok(Command::Reset),
            "home" => Ok(Command::Home),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }

    /// Run the command against the controller.
    pub fn dispatch<V, R>(
        self,
        controller: &mut UiController<V>,
        rng: &mut R,
    ) -> Result<Flow, UiError>
    where
        V: ViewPort,
        R: Rng + ?Sized,
    {
        match self {
            Command::Players => controller.render_player_list(),
            Command::Teams => controller.render_team_picker(),
            Command::Mode(mode) => controller.set_mode(mode),
            Command::Test(name) => controller.select_player(&name)?,
            Command::Random => {
                controller.select_random_player(rng)?;
            }
            Command::Profile(name) => controller.view_profile(&name)?,
            Command::Team(code) => controller.handle_team_selection(&code)?,
            Command::Answer(answers) => {
                let _: Submission = controller.submit(answers.as_slice())?;
            }
            Command::Hint => controller.show_hint()?,
            Command::Reveal => {
                controller.reveal_team_answers()?;
            }
            Command::Reset => match controller.session().screen {
                Screen::TeamTest => controller.reset_team_test()?,
                _ => controller.reset_test()?,
            },
            Command::Home => controller.show_welcome(),
            Command::Help => return Ok(Flow::Help),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        game::{PlayerCard, PlayerCatalog, Tally},
        ui::terminal::TerminalView,
    };

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("  players ").unwrap(), Command::Players);
        assert_eq!(
            Command::parse("test   Jeff Green").unwrap(),
            Command::Test("Jeff Green".into())
        );
        assert_eq!(Command::parse("TEAM okc").unwrap(), Command::Team("OKC".into()));
        assert_eq!(Command::parse("mode team").unwrap(), Command::Mode(QuizMode::Team));
        assert_eq!(
            Command::parse("answer bos, okc ,,phx").unwrap(),
            Command::Answer(vec!["bos".into(), "okc".into(), String::new(), "phx".into()])
        );
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Command::parse("   "), Err(CommandError::Empty)));
        assert!(matches!(Command::parse("dunk"), Err(CommandError::Unknown(word)) if word == "dunk"));
        assert!(matches!(
            Command::parse("profile"),
            Err(CommandError::MissingArgument { command: "profile", .. })
        ));
        assert!(matches!(Command::parse("mode league"), Err(CommandError::Mode(_))));
    }

    fn controller() -> UiController<TerminalView<Vec<u8>>> {
        let mut catalog = PlayerCatalog::new();
        catalog.insert(
            "Jeff Green",
            PlayerCard {
                key_word: "Green Giant".into(),
                teams: vec!["BOS".into(), "OKC".into()],
                story: "A (BOS) leprechaun. An (OKC) storm.".into(),
            },
        );
        let mut controller = UiController::new(catalog, TerminalView::new(Vec::new()));
        controller.initialize();
        controller
    }

    #[test]
    fn dispatch_drives_a_player_quiz() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(1);

        for line in ["test Jeff Green", "answer bos, okc"] {
            let flow = Command::parse(line).unwrap().dispatch(&mut controller, &mut rng);
            assert_eq!(flow, Ok(Flow::Continue));
        }
        assert_eq!(controller.session().tally, Tally { correct: 1, total: 1 });

        let output = String::from_utf8(controller.into_view().into_inner()).unwrap();
        assert!(output.contains("Perfect! 2/2 (100%)"));
    }

    #[test]
    fn reset_follows_the_active_screen() {
        let mut controller = controller();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            Command::Reset.dispatch(&mut controller, &mut rng),
            Err(UiError::NoPlayerSelected)
        );

        Command::Mode(QuizMode::Team).dispatch(&mut controller, &mut rng).unwrap();
        Command::Team("BOS".into()).dispatch(&mut controller, &mut rng).unwrap();
        assert_eq!(Command::Reset.dispatch(&mut controller, &mut rng), Ok(Flow::Continue));
        assert_eq!(Command::Quit.dispatch(&mut controller, &mut rng), Ok(Flow::Quit));
    }
}
