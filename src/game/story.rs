/// Placeholder returned when no sentence of a story mentions the team.
pub const SEGMENT_NOT_FOUND: &str = "Story segment not found.";

/// Return the first sentence of `story` containing `(code)`, trimmed and closed with a period.
///
/// Sentences end at any run of `.`, `!` or `?`.
pub fn extract_story_segment(story: &str, code: &str) -> String {
    let marker = format!("({code})");
    story
        .split(['.', '!', '?'])
        .find(|sentence| sentence.contains(&marker))
        .map(|sentence| format!("{}.", sentence.trim()))
        .unwrap_or_else(|| SEGMENT_NOT_FOUND.to_string())
}

/// Team codes that do not appear as `(CODE)` in the story in list order.
///
/// An empty result means segment extraction works for every team of the player.
pub fn story_mismatches<'a>(story: &str, teams: &'a [String]) -> Vec<&'a str> {
    let mut cursor = 0;
    let mut mismatches = Vec::new();
    for code in teams {
        let marker = format!("({code})");
        match story[cursor..].find(&marker) {
            Some(offset) => cursor += offset + marker.len(),
            None => mismatches.push(code.as_str()),
        }
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRAWFORD: &str = "A (CHI) bull with a crow's head takes the place of the (NYK) Statue of Liberty, standing next to the (GSW) Golden Gate Bridge. The crow-bull statue comes alive and flies across the country, where it's attacked by a massive (ATL) hawk. The hawk rips off the crow's head!";

    #[test]
    fn extracts_sentence_mentioning_team() {
        let story = "x (BOS) y. z (LAL) w.";
        assert_eq!(extract_story_segment(story, "LAL"), "z (LAL) w.");
        assert_eq!(extract_story_segment(story, "BOS"), "x (BOS) y.");
    }

    #[test]
    fn first_matching_sentence_wins() {
        assert_eq!(
            extract_story_segment(CRAWFORD, "NYK"),
            "A (CHI) bull with a crow's head takes the place of the (NYK) Statue of Liberty, standing next to the (GSW) Golden Gate Bridge."
        );
        assert_eq!(
            extract_story_segment(CRAWFORD, "ATL"),
            "The crow-bull statue comes alive and flies across the country, where it's attacked by a massive (ATL) hawk."
        );
    }

    #[test]
    fn other_terminators_split_sentences() {
        let story = "Wow (MIA) heat!! Really (POR) blazing? Yes (UTA) jazz...";
        assert_eq!(extract_story_segment(story, "MIA"), "Wow (MIA) heat.");
        assert_eq!(extract_story_segment(story, "POR"), "Really (POR) blazing.");
        assert_eq!(extract_story_segment(story, "UTA"), "Yes (UTA) jazz.");
    }

    #[test]
    fn missing_team_yields_placeholder() {
        assert_eq!(extract_story_segment(CRAWFORD, "LAL"), SEGMENT_NOT_FOUND);
        // Bare codes without parentheses do not count.
        assert_eq!(extract_story_segment("The CHI bull.", "CHI"), SEGMENT_NOT_FOUND);
    }

    #[test]
    fn every_team_of_a_consistent_player_has_a_segment() {
        let teams: Vec<String> = ["CHI", "NYK", "GSW", "ATL"].map(String::from).to_vec();
        assert!(story_mismatches(CRAWFORD, &teams).is_empty());
        for code in &teams {
            assert!(extract_story_segment(CRAWFORD, code).contains(&format!("({code})")));
        }
    }

    #[test]
    fn mismatches_report_missing_and_out_of_order_codes() {
        let teams: Vec<String> = ["NYK", "CHI", "LAL"].map(String::from).to_vec();
        assert_eq!(story_mismatches(CRAWFORD, &teams), vec!["CHI", "LAL"]);
    }
}
