use diesel::prelude::*;

use super::{
    error::{SqliteDaoError, SqliteResult},
    schema::players,
};
use crate::dao::{
    models::{NewPlayerEntity, PlayerEntity, PlayerUpdateEntity},
    teams_codec::{decode_teams, encode_teams},
};

/// Row shape read back from the `players` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = players)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayerRow {
    pub id: i32,
    pub name: String,
    pub key_word: String,
    pub teams: String,
    pub story: String,
}

impl PlayerRow {
    /// Decode the teams column into a backend-neutral entity.
    pub fn into_entity(self) -> SqliteResult<PlayerEntity> {
        let teams = decode_teams(&self.teams).map_err(|source| SqliteDaoError::DecodeTeams {
            name: self.name.clone(),
            source,
        })?;

        Ok(PlayerEntity {
            id: i64::from(self.id),
            name: self.name,
            key_word: self.key_word,
            teams,
            story: self.story,
        })
    }
}

/// Row inserted into the `players` table.
#[derive(Debug, Insertable)]
#[diesel(table_name = players)]
pub struct NewPlayerRow<'a> {
    pub name: &'a str,
    pub key_word: &'a str,
    pub teams: String,
    pub story: &'a str,
}

impl<'a> NewPlayerRow<'a> {
    /// Borrow the entity fields and encode its teams.
    pub fn from_entity(player: &'a NewPlayerEntity) -> SqliteResult<Self> {
        let teams = encode_teams(&player.teams).map_err(|source| SqliteDaoError::EncodeTeams {
            name: player.name.clone(),
            source,
        })?;

        Ok(Self {
            name: &player.name,
            key_word: &player.key_word,
            teams,
            story: &player.story,
        })
    }
}

/// Full replacement of a row; `created_at` is left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = players)]
pub struct PlayerChangeset<'a> {
    pub name: &'a str,
    pub key_word: &'a str,
    pub teams: String,
    pub story: &'a str,
}

impl<'a> PlayerChangeset<'a> {
    /// Changeset for `update`, renaming only when a new name was given.
    pub fn from_update(current_name: &'a str, update: &'a PlayerUpdateEntity) -> SqliteResult<Self> {
        let name = update.target_name(current_name);
        let teams = encode_teams(&update.teams).map_err(|source| SqliteDaoError::EncodeTeams {
            name: name.to_owned(),
            source,
        })?;

        Ok(Self {
            name,
            key_word: &update.key_word,
            teams,
            story: &update.story,
        })
    }
}
