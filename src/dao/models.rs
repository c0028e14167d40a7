/// Player row as exposed by every storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntity {
    /// Row identifier assigned on insert.
    pub id: i64,
    /// Unique display name, also the lookup key of the REST API.
    pub name: String,
    /// Mnemonic theme word used as a memory aid.
    pub key_word: String,
    /// Team codes in the order the player played for them.
    pub teams: Vec<String>,
    /// Narrative mentioning each team code in parentheses.
    pub story: String,
}

/// Payload required to insert a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayerEntity {
    pub name: String,
    pub key_word: String,
    pub teams: Vec<String>,
    pub story: String,
}

/// Replacement values for an existing player, optionally renaming it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUpdateEntity {
    /// New name; `None` or an empty string keeps the current one.
    pub new_name: Option<String>,
    pub key_word: String,
    pub teams: Vec<String>,
    pub story: String,
}

impl PlayerUpdateEntity {
    /// Name the row should carry once the update is applied.
    pub fn target_name<'a>(&'a self, current: &'a str) -> &'a str {
        self.new_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(current)
    }
}

impl NewPlayerEntity {
    /// Attach the identifier allocated by the backend.
    pub fn with_id(self, id: i64) -> PlayerEntity {
        PlayerEntity {
            id,
            name: self.name,
            key_word: self.key_word,
            teams: self.teams,
            story: self.story,
        }
    }
}
