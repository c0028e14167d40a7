/// Health and connectivity payloads.
pub mod health;
/// Player request and response payloads of the REST API.
pub mod player;
/// Validation helpers for DTOs.
pub mod validation;
