//! Library crate for hoop-story-back, exposing modules for binaries and integration tests.

#[cfg(feature = "quiz-client")]
pub mod client;
pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod game;
pub mod routes;
pub mod services;
pub mod state;
pub mod ui;
