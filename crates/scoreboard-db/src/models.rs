//! Rust structs mapping to database tables.
//!
//! Persisted rows (`Score`, `Pong`) implement `from_row` for constructing
//! themselves from a `rusqlite::Row`. Unsaved values (`NewScore`, `NewPong`)
//! are built in memory first and handed to the query modules to persist.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use scoreboard_common::{dates, PongId, ScoreId};
use serde::Serialize;

use crate::validation::PongField;

/// Render a serializable row as a JSON string for `Display`.
fn write_json<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// A persisted leaderboard entry.
///
/// Serializes to `{name, username, score, dos}`; the row id is kept out of
/// the public mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    #[serde(skip)]
    pub id: ScoreId,
    pub name: String,
    pub username: String,
    pub score: String,
    #[serde(serialize_with = "dates::mdy_date::serialize")]
    pub dos: NaiveDate,
}

impl Score {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: ScoreId::from(row.get::<_, i64>(0)?),
            name: row.get(1)?,
            username: row.get(2)?,
            score: row.get(3)?,
            dos: row.get(4)?,
        })
    }

    /// Date of score as `MM-DD-YYYY`.
    pub fn dos_string(&self) -> String {
        dates::format_date(self.dos)
    }

    /// Field-name keyed mapping of this row.
    pub fn to_dict(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// A leaderboard entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScore {
    pub name: String,
    pub username: String,
    pub score: String,
    pub dos: NaiveDate,
}

impl NewScore {
    /// Build an entry dated today (local calendar date).
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        score: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            score: score.into(),
            dos: Local::now().date_naive(),
        }
    }

    /// Override the date of score.
    #[must_use]
    pub fn with_dos(mut self, dos: NaiveDate) -> Self {
        self.dos = dos;
        self
    }
}

// ---------------------------------------------------------------------------
// Pong
// ---------------------------------------------------------------------------

/// A persisted pong match between two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pong {
    pub id: PongId,
    pub user1: String,
    pub user2: String,
    pub score1: String,
    pub score2: String,
    pub result1: String,
    pub result2: String,
    #[serde(
        rename = "gameDatetime",
        serialize_with = "dates::mdy_datetime::serialize"
    )]
    pub game_datetime: NaiveDateTime,
}

impl Pong {
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: PongId::from(row.get::<_, i64>(0)?),
            user1: row.get(1)?,
            user2: row.get(2)?,
            score1: row.get(3)?,
            score2: row.get(4)?,
            result1: row.get(5)?,
            result2: row.get(6)?,
            game_datetime: row.get(7)?,
        })
    }

    /// Match timestamp as `MM-DD-YYYY HH:MM:SS`.
    pub fn game_datetime_string(&self) -> String {
        dates::format_datetime(self.game_datetime)
    }

    /// Field-name keyed mapping of this row, including its id.
    pub fn to_dict(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl fmt::Display for Pong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(self, f)
    }
}

/// A pong match that has not been persisted yet.
///
/// The timestamp is always required; the remaining fields default to the
/// `"none"` / `"0"` placeholders and are usually overridden with struct
/// update syntax:
///
/// ```
/// use chrono::NaiveDate;
/// use scoreboard_db::models::NewPong;
///
/// let at = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap().and_hms_opt(15, 30, 0).unwrap();
/// let game = NewPong {
///     user1: "AAA".into(),
///     user2: "BBB".into(),
///     ..NewPong::at(at)
/// };
/// assert_eq!(game.score1, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPong {
    pub user1: String,
    pub user2: String,
    pub score1: String,
    pub score2: String,
    pub result1: String,
    pub result2: String,
    pub game_datetime: NaiveDateTime,
}

impl NewPong {
    /// Placeholder match played at `game_datetime`.
    pub fn at(game_datetime: NaiveDateTime) -> Self {
        Self {
            user1: "none".to_string(),
            user2: "none".to_string(),
            score1: "0".to_string(),
            score2: "0".to_string(),
            result1: "none".to_string(),
            result2: "none".to_string(),
            game_datetime,
        }
    }
}

/// Requested changes to a pong row.
///
/// `None` and empty strings both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PongUpdate {
    pub user1: Option<String>,
    pub user2: Option<String>,
    pub score1: Option<String>,
    pub score2: Option<String>,
    pub result1: Option<String>,
    pub result2: Option<String>,
}

impl PongUpdate {
    /// The supplied value for `field`, if any.
    pub fn value(&self, field: PongField) -> Option<&str> {
        let value = match field {
            PongField::User1 => &self.user1,
            PongField::User2 => &self.user2,
            PongField::Score1 => &self.score1,
            PongField::Score2 => &self.score2,
            PongField::Result1 => &self.result1,
            PongField::Result2 => &self.result2,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }
}

/// A supplied update value that failed its field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: PongField,
    pub value: String,
}

/// Outcome of a selective pong update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PongUpdated {
    /// The row as stored after the update.
    pub pong: Pong,
    /// Supplied values that were ignored.
    pub rejected: Vec<Rejection>,
}
