/// Player persistence backends behind the [`player_store::PlayerStore`] trait.
pub mod player_store;
/// Database model definitions.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
/// JSON encoding of the stored team list.
pub mod teams_codec;
