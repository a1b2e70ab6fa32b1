//! Leaderboard score operations.
//!
//! Scores are insert-only: there is no update or delete for this table.

use rusqlite::{Connection, OptionalExtension};
use scoreboard_common::{Error, Result, ScoreId};

use super::is_unique_violation;
use crate::models::{NewScore, Score};

const SCORE_COLUMNS: &str = "id, name, username, score, dos";

/// Persist a new score and return it with its assigned id.
///
/// A duplicate username yields [`Error::Conflict`] and nothing is written.
pub fn create_score(conn: &Connection, new: &NewScore) -> Result<Score> {
    conn.execute(
        "INSERT INTO scores (name, username, score, dos) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![new.name, new.username, new.score, new.dos],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            Error::conflict(format!("Username '{}' already exists", new.username))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(Score {
        id: ScoreId::from(conn.last_insert_rowid()),
        name: new.name.clone(),
        username: new.username.clone(),
        score: new.score.clone(),
        dos: new.dos,
    })
}

/// Get a score by primary key.
pub fn get_score(conn: &Connection, id: ScoreId) -> Result<Option<Score>> {
    conn.query_row(
        &format!("SELECT {SCORE_COLUMNS} FROM scores WHERE id = ?1"),
        [id.get()],
        Score::from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Get a score by its unique username.
pub fn get_score_by_username(conn: &Connection, username: &str) -> Result<Option<Score>> {
    conn.query_row(
        &format!("SELECT {SCORE_COLUMNS} FROM scores WHERE username = ?1"),
        [username],
        Score::from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// List all scores in insertion order.
pub fn list_scores(conn: &Connection) -> Result<Vec<Score>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {SCORE_COLUMNS} FROM scores ORDER BY id ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Score::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Number of rows in the scores table.
pub fn count_scores(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM scores", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
