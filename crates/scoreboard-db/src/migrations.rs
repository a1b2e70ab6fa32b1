//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied.

use rusqlite::Connection;
use scoreboard_common::{Error, Result};

/// V1: leaderboard and pong match tables.
const V1_INITIAL: &str = r#"
CREATE TABLE scores (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    username TEXT NOT NULL UNIQUE,
    score    TEXT NOT NULL,
    dos      TEXT NOT NULL
);

CREATE TABLE pongs (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    user1         TEXT NOT NULL,
    user2         TEXT NOT NULL,
    score1        TEXT NOT NULL,
    score2        TEXT NOT NULL,
    result1       TEXT NOT NULL,
    result2       TEXT NOT NULL,
    game_datetime TEXT NOT NULL
);
"#;

/// V2: lookups by player seat.
const V2_PONG_PLAYER_INDEXES: &str = r#"
CREATE INDEX idx_pongs_user1 ON pongs(user1);
CREATE INDEX idx_pongs_user2 ON pongs(user2);
"#;

/// Ordered list of (version, sql) pairs.
const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL), (2, V2_PONG_PLAYER_INDEXES)];

/// Run all pending migrations on `conn`.
///
/// Creates the `schema_migrations` tracking table if it does not exist,
/// then applies each outstanding migration inside a transaction. Returns
/// the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> Result<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| Error::database(format!("Failed to create schema_migrations: {e}")))?;

    let mut applied = 0;
    for &(version, sql) in MIGRATIONS {
        let already: bool = conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM schema_migrations WHERE version = ?1",
                [version],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(e.to_string()))?;

        if already {
            continue;
        }

        let tx = conn
            .unchecked_transaction()
            .map_err(|e| Error::database(e.to_string()))?;

        tx.execute_batch(sql)
            .map_err(|e| Error::database(format!("Migration V{version} failed: {e}")))?;

        tx.execute(
            "INSERT INTO schema_migrations (version) VALUES (?1)",
            [version],
        )
        .map_err(|e| Error::database(e.to_string()))?;

        tx.commit().map_err(|e| Error::database(e.to_string()))?;

        tracing::debug!(version, "applied migration");
        applied += 1;
    }

    Ok(applied)
}

/// Latest schema version known to this build.
pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|&(v, _)| v).unwrap_or(0)
}
