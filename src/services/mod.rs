/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Bulk import of the built-in roster and first-start seeding.
pub mod import_service;
/// Player CRUD on top of the player store.
pub mod player_service;
