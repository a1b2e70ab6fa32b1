//! Scoreboard-DB: database schema, migrations, and query operations.
//!
//! SQLite storage for the leaderboard (`scores`) and pong match results
//! (`pongs`), using rusqlite with r2d2 connection pooling. Every query takes
//! the connection explicitly.
//!
//! # Modules
//!
//! - `migrations` - Embedded schema migrations
//! - `pool` - Connection pool management
//! - `models` - Row and unsaved-row structs
//! - `queries` - Per-table operations
//! - `validation` - Field rules for selective pong updates
//! - `seed` - Sample data
//!
//! # Example
//!
//! ```
//! use scoreboard_db::models::NewScore;
//! use scoreboard_db::pool::{get_conn, init_memory_pool};
//! use scoreboard_db::queries::scores;
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let score = scores::create_score(&conn, &NewScore::new("Max", "mmaxwu", "10")).unwrap();
//! assert_eq!(score.username, "mmaxwu");
//! assert!(scores::create_score(&conn, &NewScore::new("Max", "mmaxwu", "11")).is_err());
//! ```

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;
pub mod validation;
