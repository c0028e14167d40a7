//! Validation helpers for DTOs.

use validator::ValidationError;

/// Validates that a team code is exactly three uppercase ASCII letters.
///
/// # Examples
///
/// ```ignore
/// validate_team_code("BOS") // Ok
/// validate_team_code("bos") // Err - lowercase
/// validate_team_code("BOSS") // Err - too long
/// ```
pub fn validate_team_code(code: &str) -> Result<(), ValidationError> {
    if code.len() != 3 {
        let mut err = ValidationError::new("team_code_length");
        err.message =
            Some(format!("Team code must be exactly 3 characters (got {})", code.len()).into());
        return Err(err);
    }

    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        let mut err = ValidationError::new("team_code_format");
        err.message = Some("Team code must contain only uppercase letters".into());
        return Err(err);
    }

    Ok(())
}

/// Validates every code of a team list.
pub fn validate_team_codes(codes: &[String]) -> Result<(), ValidationError> {
    codes
        .iter()
        .try_for_each(|code| validate_team_code(code))
}

/// Validates that a player name is not blank.
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("player_name_blank");
        err.message = Some("Player name must not be blank".into());
        return Err(err);
    }
    Ok(())
}
