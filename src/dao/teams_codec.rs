//! The `teams` column stores the ordered team list as a JSON array string.

/// Encode a team list for storage, e.g. `["CHI","NYK"]`.
pub fn encode_teams(teams: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(teams)
}

/// Decode a stored team list; anything but a JSON array of strings is rejected.
pub fn decode_teams(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_compact_json_array() {
        let teams = vec!["CHI".to_string(), "NYK".to_string(), "CHI".to_string()];
        assert_eq!(encode_teams(&teams).unwrap(), r#"["CHI","NYK","CHI"]"#);
    }

    #[test]
    fn decodes_rows_written_by_older_deployments() {
        let decoded = decode_teams(r#"["SAC", "MIA", "POR", "UTA"]"#).unwrap();
        assert_eq!(decoded, vec!["SAC", "MIA", "POR", "UTA"]);
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(decode_teams("CHI,NYK").is_err());
        assert!(decode_teams(r#"{"teams":["CHI"]}"#).is_err());
        assert!(decode_teams("[1, 2]").is_err());
    }
}
