//! Pong match CRUD operations.

use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension};
use scoreboard_common::{Error, PongId, Result};

use crate::models::{NewPong, Pong, PongUpdate, PongUpdated};
use crate::validation;

const PONG_COLUMNS: &str = "id, user1, user2, score1, score2, result1, result2, game_datetime";

/// Persist a new match and return it with its assigned id.
pub fn create_pong(conn: &Connection, new: &NewPong) -> Result<Pong> {
    conn.execute(
        "INSERT INTO pongs (user1, user2, score1, score2, result1, result2, game_datetime)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            new.user1,
            new.user2,
            new.score1,
            new.score2,
            new.result1,
            new.result2,
            new.game_datetime,
        ],
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Pong {
        id: PongId::from(conn.last_insert_rowid()),
        user1: new.user1.clone(),
        user2: new.user2.clone(),
        score1: new.score1.clone(),
        score2: new.score2.clone(),
        result1: new.result1.clone(),
        result2: new.result2.clone(),
        game_datetime: new.game_datetime,
    })
}

/// Get a match by primary key.
pub fn get_pong(conn: &Connection, id: PongId) -> Result<Option<Pong>> {
    conn.query_row(
        &format!("SELECT {PONG_COLUMNS} FROM pongs WHERE id = ?1"),
        [id.get()],
        Pong::from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// List all matches in insertion order.
pub fn list_pongs(conn: &Connection) -> Result<Vec<Pong>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {PONG_COLUMNS} FROM pongs ORDER BY id ASC"))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Pong::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List matches where `username` played either side.
pub fn list_pongs_for_user(conn: &Connection, username: &str) -> Result<Vec<Pong>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {PONG_COLUMNS} FROM pongs WHERE user1 = ?1 OR user2 = ?1 ORDER BY id ASC"
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([username], Pong::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Find a match by both players and its timestamp.
pub fn find_pong(conn: &Connection, new: &NewPong) -> Result<Option<Pong>> {
    conn.query_row(
        &format!(
            "SELECT {PONG_COLUMNS} FROM pongs
             WHERE user1 = ?1 AND user2 = ?2 AND game_datetime = ?3
             ORDER BY id ASC LIMIT 1"
        ),
        rusqlite::params![new.user1, new.user2, new.game_datetime],
        Pong::from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// Number of rows in the pongs table.
pub fn count_pongs(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM pongs", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Apply the valid fields of `update` to match `id`.
///
/// Each supplied field goes through [`validation::UPDATE_RULES`]; values that
/// fail their rule are left unchanged and reported in
/// [`PongUpdated::rejected`]. Absent or empty fields are not checked.
pub fn update_pong(conn: &Connection, id: PongId, update: &PongUpdate) -> Result<PongUpdated> {
    let evaluation = validation::evaluate(update);

    if !evaluation.accepted.is_empty() {
        let assignments: Vec<String> = evaluation
            .accepted
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
            .collect();
        let sql = format!(
            "UPDATE pongs SET {} WHERE id = ?{}",
            assignments.join(", "),
            evaluation.accepted.len() + 1
        );

        let mut values: Vec<Value> = evaluation
            .accepted
            .into_iter()
            .map(|(_, value)| Value::Text(value))
            .collect();
        values.push(Value::Integer(id.get()));

        let n = conn
            .execute(&sql, rusqlite::params_from_iter(values))
            .map_err(|e| Error::database(e.to_string()))?;
        if n == 0 {
            return Err(Error::not_found("pong", id));
        }
    }

    let pong = get_pong(conn, id)?.ok_or_else(|| Error::not_found("pong", id))?;

    Ok(PongUpdated {
        pong,
        rejected: evaluation.rejected,
    })
}

/// Delete a match by ID. Returns true if a row was deleted.
pub fn delete_pong(conn: &Connection, id: PongId) -> Result<bool> {
    let n = conn
        .execute("DELETE FROM pongs WHERE id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;
    use crate::validation::PongField;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 22)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn game() -> NewPong {
        NewPong {
            user1: "AAA".into(),
            user2: "BBB".into(),
            score1: "1".into(),
            score2: "5".into(),
            result1: "Loss".into(),
            result2: "Win".into(),
            game_datetime: at(15, 30),
        }
    }

    #[test]
    fn create_and_get() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let created = create_pong(&conn, &game()).unwrap();
        let found = get_pong(&conn, created.id).unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.game_datetime_string(), "01-22-2023 15:30:00");

        let dict = found.to_dict().unwrap();
        assert_eq!(dict["id"], created.id.get());
        assert_eq!(dict["user1"], "AAA");
        assert_eq!(dict["result2"], "Win");
        assert_eq!(dict["gameDatetime"], "01-22-2023 15:30:00");
    }

    #[test]
    fn placeholder_match_persists() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let created = create_pong(&conn, &NewPong::at(at(9, 0))).unwrap();
        let found = get_pong(&conn, created.id).unwrap().unwrap();
        assert_eq!(found.user1, "none");
        assert_eq!(found.score2, "0");
    }

    #[test]
    fn update_three_char_username() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                user1: Some("XYZ".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong.user1, "XYZ");
        assert!(updated.rejected.is_empty());
        assert_eq!(get_pong(&conn, created.id).unwrap().unwrap().user1, "XYZ");
    }

    #[test]
    fn update_ignores_wrong_length_username() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        for bad in ["XY", "WXYZ"] {
            let updated = update_pong(
                &conn,
                created.id,
                &PongUpdate {
                    user1: Some(bad.into()),
                    ..Default::default()
                },
            )
            .unwrap();
            assert_eq!(updated.pong.user1, "AAA");
            assert_eq!(updated.rejected.len(), 1);
            assert_eq!(updated.rejected[0].field, PongField::User1);
            assert_eq!(updated.rejected[0].value, bad);
        }
    }

    #[test]
    fn update_scores() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                score1: Some("7".into()),
                score2: Some("-1".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong.score1, "7");
        assert_eq!(updated.pong.score2, "5");
        assert_eq!(updated.rejected.len(), 1);
        assert_eq!(updated.rejected[0].field, PongField::Score2);
    }

    #[test]
    fn update_keeps_score_text_unchanged() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        for input in ["07", "+5", " 12 ", "99999999999999999999"] {
            let updated = update_pong(
                &conn,
                created.id,
                &PongUpdate {
                    score1: Some(input.into()),
                    ..Default::default()
                },
            )
            .unwrap();
            assert!(updated.rejected.is_empty(), "{input:?} was rejected");
            assert_eq!(updated.pong.score1, input);
        }
        let stored = get_pong(&conn, created.id).unwrap().unwrap();
        assert_eq!(stored.score1, "99999999999999999999");
    }

    #[test]
    fn non_numeric_score_does_not_fail_update() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                score1: Some("abc".into()),
                result1: Some("Win".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong.score1, "1");
        assert_eq!(updated.pong.result1, "Win");
    }

    #[test]
    fn empty_score_means_no_change() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                score1: Some(String::new()),
                score2: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong, created);
        assert!(updated.rejected.is_empty());
    }

    #[test]
    fn update_results() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                result1: Some("Tie".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong.result1, "Loss");

        let updated = update_pong(
            &conn,
            created.id,
            &PongUpdate {
                result1: Some("Win".into()),
                result2: Some("Loss".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.pong.result1, "Win");
        assert_eq!(updated.pong.result2, "Loss");
    }

    #[test]
    fn update_missing_row_is_not_found() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let err = update_pong(
            &conn,
            PongId::from(99),
            &PongUpdate {
                user1: Some("XYZ".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));

        let err = update_pong(&conn, PongId::from(99), &PongUpdate::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn delete_removes_row() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        assert!(delete_pong(&conn, created.id).unwrap());
        assert!(get_pong(&conn, created.id).unwrap().is_none());
        assert!(!delete_pong(&conn, created.id).unwrap());
    }

    #[test]
    fn list_and_filter_by_user() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        create_pong(&conn, &game()).unwrap();
        create_pong(
            &conn,
            &NewPong {
                user1: "CCC".into(),
                user2: "AAA".into(),
                ..NewPong::at(at(16, 0))
            },
        )
        .unwrap();
        create_pong(
            &conn,
            &NewPong {
                user1: "CCC".into(),
                user2: "DDD".into(),
                ..NewPong::at(at(17, 0))
            },
        )
        .unwrap();

        assert_eq!(list_pongs(&conn).unwrap().len(), 3);
        assert_eq!(count_pongs(&conn).unwrap(), 3);
        assert_eq!(list_pongs_for_user(&conn, "AAA").unwrap().len(), 2);
        assert!(list_pongs_for_user(&conn, "ZZZ").unwrap().is_empty());
    }

    #[test]
    fn find_by_players_and_time() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();
        let created = create_pong(&conn, &game()).unwrap();

        assert_eq!(find_pong(&conn, &game()).unwrap(), Some(created));

        let later = NewPong {
            game_datetime: at(18, 0),
            ..game()
        };
        assert!(find_pong(&conn, &later).unwrap().is_none());
    }
}
