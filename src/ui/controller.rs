use rand::{Rng, seq::IndexedRandom};
use thiserror::Error;
use tracing::debug;

use crate::{
    game::{
        AnswerCheck, PlayerCard, PlayerCatalog, TeamAnswerCheck, TeamLookupEntry,
        check_player_answers, extract_story_segment,
        teams::{TEAMS, team_name},
    },
    ui::{
        session::{QuizMode, Screen, Session},
        view::{
            PlayerTestView, ProfileView, StorySegmentView, TeamOption, TeamTestView, ViewPort,
        },
    },
};

/// Reasons a quiz interaction is refused; the session is left as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("player `{0}` not found")]
    UnknownPlayer(String),
    #[error("unknown team code `{0}`")]
    UnknownTeam(String),
    #[error("no player quiz in progress")]
    NoPlayerSelected,
    #[error("no team quiz in progress")]
    NoTeamSelected,
    #[error("no quiz to submit answers to")]
    NoActiveQuiz,
    #[error("the player catalog is empty")]
    EmptyCatalog,
}

/// Result of submitting answers on whichever quiz screen is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Player(AnswerCheck),
    Team(TeamAnswerCheck),
}

/// Drives the quiz screens over a cached catalog.
pub struct UiController<V> {
    catalog: PlayerCatalog,
    session: Session,
    view: V,
}

impl<V: ViewPort> UiController<V> {
    /// Controller on the welcome screen with an empty score.
    pub fn new(catalog: PlayerCatalog, view: V) -> Self {
        Self {
            catalog,
            session: Session::default(),
            view,
        }
    }

    /// Current quiz session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Players loaded at startup.
    pub fn catalog(&self) -> &PlayerCatalog {
        &self.catalog
    }

    /// View the screens are drawn on.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Give the view back, dropping the session.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Render the navigation and land on the welcome screen in player mode.
    pub fn initialize(&mut self) {
        debug!(players = self.catalog.len(), "initializing quiz");
        self.render_player_list();
        self.render_team_picker();
        self.set_mode(QuizMode::Player);
        self.show_welcome();
    }

    /// Draw the navigation list of player names.
    pub fn render_player_list(&mut self) {
        let names: Vec<&str> = self.catalog.names().collect();
        self.view.render_player_list(&names);
    }

    /// Draw every team with its player count.
    pub fn render_team_picker(&mut self) {
        let counts = self.catalog.team_counts();
        let options: Vec<TeamOption> = TEAMS
            .iter()
            .map(|&(code, name)| TeamOption {
                code,
                name,
                players: counts.get(code).copied().unwrap_or_default(),
            })
            .collect();
        self.view.render_team_picker(&options);
    }

    /// Switch what the team picker does; any previous lookup is cleared.
    pub fn set_mode(&mut self, mode: QuizMode) {
        self.session.mode = mode;
        self.view.show_mode(mode);
        self.view.clear_team_lookup();
    }

    /// Go back to the welcome screen.
    pub fn show_welcome(&mut self) {
        self.switch_screen(Screen::Welcome);
    }

    /// Start a player quiz: one empty slot per team of the player.
    pub fn select_player(&mut self, name: &str) -> Result<(), UiError> {
        let card = self.card(name)?;
        let test = PlayerTestView {
            name: name.to_owned(),
            key_word: card.key_word.clone(),
            team_count: card.teams.len(),
        };

        self.session.current_player = Some(name.to_owned());
        self.session.current_team = None;
        self.view.render_player_test(&test);
        self.view.hide_hint();
        self.view.clear_answers();
        self.view.clear_result();
        self.switch_screen(Screen::PlayerTest);
        Ok(())
    }

    /// Quiz a uniformly chosen player and return its name.
    pub fn select_random_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, UiError> {
        let names: Vec<String> = self.catalog.names().map(str::to_owned).collect();
        let name = names.choose(rng).cloned().ok_or(UiError::EmptyCatalog)?;
        self.select_player(&name)?;
        Ok(name)
    }

    /// Show a player's key word, teams and story.
    pub fn view_profile(&mut self, name: &str) -> Result<(), UiError> {
        let card = self.card(name)?;
        let profile = ProfileView {
            name: name.to_owned(),
            key_word: card.key_word.clone(),
            teams: card
                .teams
                .iter()
                .map(|code| {
                    let display = team_name(code).map_or_else(|| code.clone(), str::to_owned);
                    (code.clone(), display)
                })
                .collect(),
            story: card.story.clone(),
        };

        self.session.current_profile = Some(name.to_owned());
        self.view.render_profile(&profile);
        self.switch_screen(Screen::Profile);
        Ok(())
    }

    /// Reveal the full story of the player being quizzed.
    pub fn show_hint(&mut self) -> Result<(), UiError> {
        let story = self.current_player_card()?.story.clone();
        self.view.show_hint(&story);
        Ok(())
    }

    /// Clear the answers and result of the player quiz.
    pub fn reset_test(&mut self) -> Result<(), UiError> {
        self.current_player_card()?;
        self.view.clear_answers();
        self.view.clear_result();
        self.view.hide_hint();
        Ok(())
    }

    /// Grade the current player quiz and record it in the running tally.
    pub fn submit_player_answers<S: AsRef<str>>(
        &mut self,
        answers: &[S],
    ) -> Result<AnswerCheck, UiError> {
        let check = check_player_answers(self.current_player_card()?, answers);

        self.session.tally.record(&check);
        self.view.mark_answers(&check.results);
        self.view.show_result(&check, &check.summary());
        self.view.show_score(self.session.tally);
        Ok(check)
    }

    /// Team picker action: look the team up in player mode, quiz it in team mode.
    pub fn handle_team_selection(&mut self, code: &str) -> Result<(), UiError> {
        match self.session.mode {
            QuizMode::Player => {
                self.lookup_team(code);
                Ok(())
            }
            QuizMode::Team => self.start_team_test(code),
        }
    }

    /// List the players of a team with their story segments.
    pub fn lookup_team(&mut self, code: &str) -> Vec<TeamLookupEntry> {
        if code.is_empty() {
            self.view.clear_team_lookup();
            return Vec::new();
        }

        let entries = self.catalog.lookup_team(code);
        self.view.render_team_lookup(code, &entries);
        entries
    }

    /// Start a team quiz with one empty slot per player of the team.
    pub fn start_team_test(&mut self, code: &str) -> Result<(), UiError> {
        let display = team_name(code).ok_or_else(|| UiError::UnknownTeam(code.to_owned()))?;
        let test = TeamTestView {
            code: code.to_owned(),
            team_name: display.to_owned(),
            player_count: self.catalog.players_for_team(code).len(),
        };

        self.session.current_team = Some(code.to_owned());
        self.session.current_player = None;
        self.view.render_team_test(&test);
        self.view.clear_answers();
        self.view.clear_result();
        self.view.show_story_segments(&[]);
        self.switch_screen(Screen::TeamTest);
        Ok(())
    }

    /// Grade the current team quiz; the score tally is left alone.
    pub fn submit_team_answers<S: AsRef<str>>(
        &mut self,
        answers: &[S],
    ) -> Result<TeamAnswerCheck, UiError> {
        let code = self.current_team()?;
        let outcome = self.catalog.check_team_answers(&code, answers);

        self.view.mark_answers(&outcome.check.results);
        self.view.show_result(&outcome.check, &outcome.check.summary());
        let segments = self.story_segments(&code, &outcome.matched);
        self.view.show_story_segments(&segments);
        Ok(outcome)
    }

    /// Fill in every player of the current team and show all their segments.
    pub fn reveal_team_answers(&mut self) -> Result<Vec<String>, UiError> {
        let code = self.current_team()?;
        let players = self.catalog.players_for_team(&code);
        let check = AnswerCheck::from_results(vec![true; players.len()]);

        self.view.fill_answers(&players);
        self.view.mark_answers(&check.results);
        self.view.show_result(
            &check,
            &format!("Answers revealed! {}/{} (100%)", check.total, check.total),
        );
        let segments = self.story_segments(&code, &players);
        self.view.show_story_segments(&segments);
        Ok(players)
    }

    /// Clear the answers, result and segments of the team quiz.
    pub fn reset_team_test(&mut self) -> Result<(), UiError> {
        self.current_team()?;
        self.view.clear_answers();
        self.view.clear_result();
        self.view.show_story_segments(&[]);
        Ok(())
    }

    /// Submit answers to the quiz on screen (the Enter key of the quiz).
    pub fn submit<S: AsRef<str>>(&mut self, answers: &[S]) -> Result<Submission, UiError> {
        match self.session.screen {
            Screen::PlayerTest if self.session.current_player.is_some() => {
                self.submit_player_answers(answers).map(Submission::Player)
            }
            Screen::TeamTest if self.session.current_team.is_some() => {
                self.submit_team_answers(answers).map(Submission::Team)
            }
            _ => Err(UiError::NoActiveQuiz),
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.session.screen = screen;
        self.view.show_screen(screen);
    }

    fn card(&self, name: &str) -> Result<&PlayerCard, UiError> {
        self.catalog
            .get(name)
            .ok_or_else(|| UiError::UnknownPlayer(name.to_owned()))
    }

    fn current_player_card(&self) -> Result<&PlayerCard, UiError> {
        let name = self
            .session
            .current_player
            .as_deref()
            .ok_or(UiError::NoPlayerSelected)?;
        self.card(name)
    }

    fn current_team(&self) -> Result<String, UiError> {
        self.session
            .current_team
            .clone()
            .ok_or(UiError::NoTeamSelected)
    }

    fn story_segments(&self, code: &str, players: &[String]) -> Vec<StorySegmentView> {
        players
            .iter()
            .filter_map(|name| {
                let card = self.catalog.get(name)?;
                Some(StorySegmentView {
                    player: name.clone(),
                    key_word: card.key_word.clone(),
                    segment: extract_story_segment(&card.story, code),
                })
            })
            .collect()
    }
}
