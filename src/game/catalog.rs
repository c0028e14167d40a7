use indexmap::IndexMap;
use serde::Deserialize;

use super::{scoring::AnswerCheck, story::extract_story_segment, teams::TEAMS};

/// Quiz-facing view of a player, keyed by name in [`PlayerCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCard {
    /// Mnemonic theme shown with the player.
    pub key_word: String,
    /// Team codes in career order.
    pub teams: Vec<String>,
    /// Story marking each team as `(CODE)`.
    pub story: String,
}

/// Cached copy of the player map served by `GET /api/players`.
///
/// Iteration follows insertion order, which is name order when the catalog
/// comes from the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PlayerCatalog {
    players: IndexMap<String, PlayerCard>,
}

/// One row of a team lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLookupEntry {
    /// Player name.
    pub name: String,
    /// The player's key word.
    pub theme: String,
    /// 1-based position of the team in the player's career.
    pub position: usize,
    /// Number of teams in the player's career.
    pub total_teams: usize,
    /// Sentence of the story that mentions this team.
    pub story_segment: String,
}

/// Outcome of a team quiz, with the canonical names that were matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamAnswerCheck {
    /// Per-slot grading.
    pub check: AnswerCheck,
    /// Correctly named players, in submission order.
    pub matched: Vec<String>,
}

impl PlayerCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a player, keeping its first insertion position.
    pub fn insert(&mut self, name: impl Into<String>, card: PlayerCard) {
        self.players.insert(name.into(), card);
    }

    /// Card of the player with exactly this name.
    pub fn get(&self, name: &str) -> Option<&PlayerCard> {
        self.players.get(name)
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the catalog holds no player.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    /// Players with their cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerCard)> {
        self.players.iter().map(|(name, card)| (name.as_str(), card))
    }

    /// Sorted names of the players who played for `code`.
    pub fn players_for_team(&self, code: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .iter()
            .filter(|(_, card)| card.teams.iter().any(|team| team == code))
            .map(|(name, _)| name.to_owned())
            .collect();
        names.sort();
        names
    }

    /// Number of players per known team, zero included, in [`TEAMS`] order.
    ///
    /// A player counts once per team even when the code repeats in their career.
    pub fn team_counts(&self) -> IndexMap<&'static str, usize> {
        let mut counts: IndexMap<&'static str, usize> =
            TEAMS.iter().map(|(code, _)| (*code, 0)).collect();

        for (_, card) in self.iter() {
            for (position, team) in card.teams.iter().enumerate() {
                if card.teams[..position].contains(team) {
                    continue;
                }
                if let Some(count) = counts.get_mut(team.as_str()) {
                    *count += 1;
                }
            }
        }

        counts
    }

    /// Describe every player who played for `code`, in catalog order.
    pub fn lookup_team(&self, code: &str) -> Vec<TeamLookupEntry> {
        self.iter()
            .filter_map(|(name, card)| {
                let index = card.teams.iter().position(|team| team == code)?;
                Some(TeamLookupEntry {
                    name: name.to_owned(),
                    theme: card.key_word.clone(),
                    position: index + 1,
                    total_teams: card.teams.len(),
                    story_segment: extract_story_segment(&card.story, code),
                })
            })
            .collect()
    }

    /// Grade a team quiz: one slot per player of the team.
    ///
    /// Each answer is matched case-insensitively against the players not yet
    /// matched, so naming the same player twice only scores once.
    pub fn check_team_answers<S: AsRef<str>>(&self, code: &str, answers: &[S]) -> TeamAnswerCheck {
        let expected = self.players_for_team(code);
        let lowered: Vec<String> = expected.iter().map(|name| name.to_lowercase()).collect();
        let mut consumed = vec![false; expected.len()];
        let mut results = Vec::with_capacity(expected.len());
        let mut matched = Vec::new();

        for slot in 0..expected.len() {
            let answer = answers
                .get(slot)
                .map(|answer| answer.as_ref().trim().to_lowercase())
                .unwrap_or_default();

            let hit = (!answer.is_empty())
                .then(|| {
                    lowered
                        .iter()
                        .enumerate()
                        .position(|(index, name)| !consumed[index] && *name == answer)
                })
                .flatten();

            match hit {
                Some(index) => {
                    consumed[index] = true;
                    matched.push(expected[index].clone());
                    results.push(true);
                }
                None => results.push(false),
            }
        }

        TeamAnswerCheck {
            check: AnswerCheck::from_results(results),
            matched,
        }
    }
}

impl FromIterator<(String, PlayerCard)> for PlayerCatalog {
    fn from_iter<I: IntoIterator<Item = (String, PlayerCard)>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

/// Grade a player quiz: slot `i` must name `player.teams[i]`, case-insensitively.
pub fn check_player_answers<S: AsRef<str>>(player: &PlayerCard, answers: &[S]) -> AnswerCheck {
    let results = player
        .teams
        .iter()
        .enumerate()
        .map(|(slot, team)| {
            answers
                .get(slot)
                .is_some_and(|answer| answer.as_ref().trim().to_uppercase() == *team)
        })
        .collect();
    AnswerCheck::from_results(results)
}
