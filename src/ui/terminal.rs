use std::{fmt, io::Write};

use tracing::warn;

use crate::{
    game::{AnswerCheck, Tally, TeamLookupEntry},
    ui::{
        session::{QuizMode, Screen},
        view::{PlayerTestView, ProfileView, StorySegmentView, TeamOption, TeamTestView, ViewPort},
    },
};

/// Line-oriented [`ViewPort`] writing plain text to any writer.
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    /// View writing plain text to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print free text, e.g. help or error messages from the input loop.
    pub fn message(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!(error = %err, "failed to write quiz output");
        }
    }
}

impl<W: Write> ViewPort for TerminalView<W> {
    fn show_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Welcome => self.line(format_args!(
                "Welcome! Pick a player with `test <name>` or `random`, or a team with `team <CODE>`."
            )),
            Screen::PlayerTest | Screen::Profile | Screen::TeamTest => {}
        }
    }

    fn show_mode(&mut self, mode: QuizMode) {
        self.line(format_args!("Mode: {mode}"));
    }

    fn render_player_list(&mut self, names: &[&str]) {
        self.line(format_args!("Players ({}):", names.len()));
        for name in names {
            self.line(format_args!("  {name}"));
        }
    }

    fn render_team_picker(&mut self, options: &[TeamOption]) {
        self.line(format_args!("Teams:"));
        for option in options {
            self.line(format_args!(
                "  {} {} ({})",
                option.code, option.name, option.players
            ));
        }
    }

    fn render_team_lookup(&mut self, code: &str, entries: &[TeamLookupEntry]) {
        if entries.is_empty() {
            self.line(format_args!("No players found for {code}."));
            return;
        }
        self.line(format_args!("Players who played for {code}:"));
        for entry in entries {
            self.line(format_args!(
                "  {} [{}] team {} of {}",
                entry.name, entry.theme, entry.position, entry.total_teams
            ));
            self.line(format_args!("    {}", entry.story_segment));
        }
    }

    fn clear_team_lookup(&mut self) {}

    fn render_player_test(&mut self, test: &PlayerTestView) {
        self.line(format_args!("{} [{}]", test.name, test.key_word));
        self.line(format_args!(
            "Name the {} team codes in career order: `answer CODE, CODE, ...`",
            test.team_count
        ));
    }

    fn render_profile(&mut self, profile: &ProfileView) {
        self.line(format_args!("{} [{}]", profile.name, profile.key_word));
        for (position, (code, name)) in profile.teams.iter().enumerate() {
            self.line(format_args!("  {}. {code} {name}", position + 1));
        }
        self.line(format_args!("{}", profile.story));
    }

    fn render_team_test(&mut self, test: &TeamTestView) {
        self.line(format_args!("{} ({})", test.team_name, test.code));
        self.line(format_args!(
            "Name the {} players of this team: `answer Name, Name, ...`",
            test.player_count
        ));
    }

    fn mark_answers(&mut self, results: &[bool]) {
        let marks: Vec<&str> = results
            .iter()
            .map(|ok| if *ok { "ok" } else { "x" })
            .collect();
        self.line(format_args!("[{}]", marks.join(" ")));
    }

    fn fill_answers(&mut self, answers: &[String]) {
        for (slot, answer) in answers.iter().enumerate() {
            self.line(format_args!("  {}. {answer}", slot + 1));
        }
    }

    fn clear_answers(&mut self) {}

    fn show_result(&mut self, _check: &AnswerCheck, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn clear_result(&mut self) {}

    fn show_score(&mut self, tally: Tally) {
        self.line(format_args!("{tally}"));
    }

    fn show_hint(&mut self, story: &str) {
        self.line(format_args!("Hint: {story}"));
    }

    fn hide_hint(&mut self) {}

    fn show_story_segments(&mut self, segments: &[StorySegmentView]) {
        for segment in segments {
            self.line(format_args!(
                "  {} [{}]: {}",
                segment.player, segment.key_word, segment.segment
            ));
        }
    }
}
