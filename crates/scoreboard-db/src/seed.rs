//! Sample rows inserted on a fresh database.
//!
//! Each record is inserted on its own. A score whose username is taken, or a
//! match already recorded, is logged and skipped; any other database error
//! stops seeding.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use scoreboard_common::Result;

use crate::models::{NewPong, NewScore};
use crate::queries::{pongs, scores};

/// Rows inserted and skipped by one seeder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Reports for both tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub scores: SeedReport,
    pub pongs: SeedReport,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

/// The fixed leaderboard sample.
pub fn sample_scores() -> Vec<NewScore> {
    vec![
        NewScore::new("Alan", "A1234l", "12").with_dos(date(2023, 1, 22)),
        NewScore::new("Jishnu", "test", "20").with_dos(date(2023, 1, 21)),
        NewScore::new("Max", "mmaxwu", "10").with_dos(date(2023, 1, 20)),
        NewScore::new("Evan", "chewyboba", "15").with_dos(date(2023, 1, 19)),
        NewScore::new("Bob", "bob123", "100").with_dos(date(2023, 1, 22)),
    ]
}

/// The fixed match sample.
pub fn sample_pongs() -> Vec<NewPong> {
    let game = |user1: &str, user2: &str, score1: &str, score2: &str, first_won: bool, at| {
        let (result1, result2) = if first_won { ("Win", "Loss") } else { ("Loss", "Win") };
        NewPong {
            user1: user1.to_string(),
            user2: user2.to_string(),
            score1: score1.to_string(),
            score2: score2.to_string(),
            result1: result1.to_string(),
            result2: result2.to_string(),
            game_datetime: at,
        }
    };
    vec![
        game("AAA", "BBB", "1", "5", false, datetime(2023, 1, 22, 15, 30)),
        game("AAB", "ABC", "2", "5", false, datetime(2023, 1, 21, 14, 15)),
        game("AAC", "GHI", "5", "4", true, datetime(2023, 1, 20, 13, 0)),
        game("AAD", "FGH", "5", "1", true, datetime(2023, 1, 19, 12, 45)),
        game("AAE", "TYU", "3", "5", false, datetime(2023, 1, 22, 11, 30)),
    ]
}

/// Insert the sample scores, skipping usernames that already exist.
pub fn seed_scores(conn: &Connection) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for entry in sample_scores() {
        match scores::create_score(conn, &entry) {
            Ok(_) => report.inserted += 1,
            Err(e) if e.is_conflict() => {
                tracing::warn!(username = %entry.username, reason = %e, "skipping sample score");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    tracing::info!(inserted = report.inserted, skipped = report.skipped, "seeded scores");
    Ok(report)
}

/// Insert the sample matches, skipping ones already recorded.
pub fn seed_pongs(conn: &Connection) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for game in sample_pongs() {
        if pongs::find_pong(conn, &game)?.is_some() {
            tracing::warn!(user1 = %game.user1, user2 = %game.user2, "skipping sample match already present");
            report.skipped += 1;
            continue;
        }
        pongs::create_pong(conn, &game)?;
        report.inserted += 1;
    }
    tracing::info!(inserted = report.inserted, skipped = report.skipped, "seeded pongs");
    Ok(report)
}

/// Seed both tables.
pub fn seed_all(conn: &Connection) -> Result<SeedSummary> {
    Ok(SeedSummary {
        scores: seed_scores(conn)?,
        pongs: seed_pongs(conn)?,
    })
}
