//! Pure quiz logic over an in-memory copy of the player catalog.

pub mod catalog;
pub mod scoring;
pub mod story;
pub mod teams;

pub use catalog::{PlayerCard, PlayerCatalog, TeamAnswerCheck, TeamLookupEntry, check_player_answers};
pub use scoring::{AnswerCheck, Tally, Verdict};
pub use story::{SEGMENT_NOT_FOUND, extract_story_segment, story_mismatches};
