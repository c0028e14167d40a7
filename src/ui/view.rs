use crate::{
    game::{AnswerCheck, Tally, TeamLookupEntry},
    ui::session::{QuizMode, Screen},
};

/// Entry of the team picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOption {
    pub code: &'static str,
    pub name: &'static str,
    pub players: usize,
}

/// Player quiz header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTestView {
    pub name: String,
    pub key_word: String,
    pub team_count: usize,
}

/// Player profile with team display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub key_word: String,
    /// `(code, display name)` in career order; unknown codes reuse the code as name.
    pub teams: Vec<(String, String)>,
    pub story: String,
}

/// Team quiz header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTestView {
    pub code: String,
    pub team_name: String,
    pub player_count: usize,
}

/// Story part revealed for one player of a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySegmentView {
    pub player: String,
    pub key_word: String,
    pub segment: String,
}

/// Rendering surface of the quiz; the controller never touches output directly.
pub trait ViewPort {
    fn show_screen(&mut self, screen: Screen);
    fn show_mode(&mut self, mode: QuizMode);
    fn render_player_list(&mut self, names: &[&str]);
    fn render_team_picker(&mut self, options: &[TeamOption]);
    fn render_team_lookup(&mut self, code: &str, entries: &[TeamLookupEntry]);
    fn clear_team_lookup(&mut self);
    fn render_player_test(&mut self, test: &PlayerTestView);
    fn render_profile(&mut self, profile: &ProfileView);
    fn render_team_test(&mut self, test: &TeamTestView);
    /// Flag each answer slot of the current quiz as correct or not.
    fn mark_answers(&mut self, results: &[bool]);
    /// Overwrite the answer slots, e.g. when revealing a team.
    fn fill_answers(&mut self, answers: &[String]);
    fn clear_answers(&mut self);
    fn show_result(&mut self, check: &AnswerCheck, text: &str);
    fn clear_result(&mut self);
    fn show_score(&mut self, tally: Tally);
    fn show_hint(&mut self, story: &str);
    fn hide_hint(&mut self);
    fn show_story_segments(&mut self, segments: &[StorySegmentView]);
}
