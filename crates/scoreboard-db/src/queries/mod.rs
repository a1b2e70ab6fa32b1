//! Database query modules.
//!
//! - scores: leaderboard inserts and lookups
//! - pongs: match CRUD and selective updates

pub mod pongs;
pub mod scores;

/// Whether `e` is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
