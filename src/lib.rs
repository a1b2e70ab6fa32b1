//! Scoreboard - leaderboard and pong match storage
//!
//! This library crate exposes configuration loading for the `scoreboard`
//! binary and its integration tests. Storage lives in `scoreboard-db`.

pub mod config;
