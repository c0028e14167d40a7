use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dao::models::{NewPlayerEntity, PlayerEntity, PlayerUpdateEntity};
use crate::dto::validation::{validate_player_name, validate_team_codes};

/// Message returned after a successful insert.
pub const PLAYER_ADDED: &str = "Player added successfully";
/// Message returned after an update.
pub const PLAYER_UPDATED: &str = "Player updated successfully";
/// Message returned after a delete.
pub const PLAYER_DELETED: &str = "Player deleted successfully";

/// Player as listed by `GET /api/players`, keyed by name in the surrounding map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCardDto {
    pub key_word: String,
    /// Team codes in career order.
    pub teams: Vec<String>,
    pub story: String,
}

/// Name-ordered map returned by `GET /api/players`.
pub type PlayerMap = IndexMap<String, PlayerCardDto>;

/// Single player returned by `GET /api/players/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    pub name: String,
    pub key_word: String,
    pub teams: Vec<String>,
    pub story: String,
}

impl From<PlayerEntity> for PlayerCardDto {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            key_word: entity.key_word,
            teams: entity.teams,
            story: entity.story,
        }
    }
}

impl From<PlayerEntity> for PlayerDetail {
    fn from(entity: PlayerEntity) -> Self {
        Self {
            name: entity.name,
            key_word: entity.key_word,
            teams: entity.teams,
            story: entity.story,
        }
    }
}

/// Payload of `POST /api/players`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: String,
    pub key_word: String,
    /// Three-letter uppercase team codes in career order.
    pub teams: Vec<String>,
    /// Narrative mentioning every team as `(CODE)`, in order.
    pub story: String,
}

impl Validate for CreatePlayerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_player_name(&self.name) {
            errors.add("name", e);
        }
        if let Err(e) = validate_team_codes(&self.teams) {
            errors.add("teams", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<CreatePlayerRequest> for NewPlayerEntity {
    fn from(request: CreatePlayerRequest) -> Self {
        Self {
            name: request.name,
            key_word: request.key_word,
            teams: request.teams,
            story: request.story,
        }
    }
}

/// Payload of `PUT /api/players/{name}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    /// Rename target; omitted or blank keeps the current name.
    #[serde(default)]
    pub new_name: Option<String>,
    pub key_word: String,
    pub teams: Vec<String>,
    pub story: String,
}

impl Validate for UpdatePlayerRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_team_codes(&self.teams) {
            errors.add("teams", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<UpdatePlayerRequest> for PlayerUpdateEntity {
    fn from(request: UpdatePlayerRequest) -> Self {
        Self {
            new_name: request
                .new_name
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty()),
            key_word: request.key_word,
            teams: request.teams,
            story: request.story,
        }
    }
}

/// Response of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerResponse {
    pub id: i64,
    pub message: String,
}

/// Response of a successful update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChangesResponse {
    pub message: String,
    /// Number of rows touched.
    pub changes: usize,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_request_reads_camel_case() {
        let request: CreatePlayerRequest = serde_json::from_value(json!({
            "name": "Ish Smith",
            "keyWord": "Blacksmith",
            "teams": ["HOU", "MEM"],
            "story": "A (HOU) rocket. A (MEM) grizzly."
        }))
        .unwrap();
        assert_eq!(request.key_word, "Blacksmith");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_blank_name_and_bad_codes() {
        let request = CreatePlayerRequest {
            name: " ".into(),
            key_word: "x".into(),
            teams: vec!["hou".into()],
            story: String::new(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("teams"));
    }

    #[test]
    fn blank_new_name_becomes_none() {
        let request: UpdatePlayerRequest = serde_json::from_value(json!({
            "newName": "  ",
            "keyWord": "Blacksmith",
            "teams": ["HOU"],
            "story": "A (HOU) rocket."
        }))
        .unwrap();
        let update = PlayerUpdateEntity::from(request);
        assert_eq!(update.new_name, None);
    }

    #[test]
    fn detail_serializes_key_word_in_camel_case() {
        let detail = PlayerDetail {
            name: "Ish Smith".into(),
            key_word: "Blacksmith".into(),
            teams: vec!["HOU".into()],
            story: "A (HOU) rocket.".into(),
        };
        let value = serde_json::to_value(detail).unwrap();
        assert_eq!(value["keyWord"], "Blacksmith");
    }
}
