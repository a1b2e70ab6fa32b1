//! Field rules for selective pong updates.
//!
//! Every updatable column has one entry in [`UPDATE_RULES`]: a coercion that
//! returns the value to store, or `None` when the input must be ignored.
//! [`evaluate`] applies the table uniformly, so a bad score is handled the
//! same way as a bad username or result.

use std::fmt;

use crate::models::{PongUpdate, Rejection};

/// An updatable column of the `pongs` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PongField {
    User1,
    User2,
    Score1,
    Score2,
    Result1,
    Result2,
}

impl PongField {
    /// Column name in the `pongs` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::User1 => "user1",
            Self::User2 => "user2",
            Self::Score1 => "score1",
            Self::Score2 => "score2",
            Self::Result1 => "result1",
            Self::Result2 => "result2",
        }
    }
}

impl fmt::Display for PongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Rule for one updatable field.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: PongField,
    /// Human-readable description of what is accepted.
    pub expects: &'static str,
    /// Returns the value to store, or `None` to leave the column unchanged.
    pub coerce: fn(&str) -> Option<String>,
}

/// Usernames are exactly three characters.
pub fn username(value: &str) -> Option<String> {
    (value.chars().count() == 3).then(|| value.to_string())
}

/// Scores are integers >= 0 of any length, stored as given.
///
/// Surrounding whitespace and a leading `+` are allowed when checking.
pub fn score(value: &str) -> Option<String> {
    let digits = value.trim();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then(|| value.to_string())
}

/// Results are exactly `Win` or `Loss`.
pub fn result(value: &str) -> Option<String> {
    matches!(value, "Win" | "Loss").then(|| value.to_string())
}

pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: PongField::User1,
        expects: "exactly 3 characters",
        coerce: username,
    },
    FieldRule {
        field: PongField::User2,
        expects: "exactly 3 characters",
        coerce: username,
    },
    FieldRule {
        field: PongField::Score1,
        expects: "an integer >= 0",
        coerce: score,
    },
    FieldRule {
        field: PongField::Score2,
        expects: "an integer >= 0",
        coerce: score,
    },
    FieldRule {
        field: PongField::Result1,
        expects: "Win or Loss",
        coerce: result,
    },
    FieldRule {
        field: PongField::Result2,
        expects: "Win or Loss",
        coerce: result,
    },
];

/// Accepted and rejected values of an update request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Columns to write, with the value to store, in table order.
    pub accepted: Vec<(PongField, String)>,
    pub rejected: Vec<Rejection>,
}

/// Run every supplied field of `update` through its rule.
///
/// Absent and empty values are skipped without being checked.
pub fn evaluate(update: &PongUpdate) -> Evaluation {
    let mut evaluation = Evaluation::default();
    for rule in UPDATE_RULES {
        let Some(value) = update.value(rule.field) else {
            continue;
        };
        match (rule.coerce)(value) {
            Some(coerced) => evaluation.accepted.push((rule.field, coerced)),
            None => {
                tracing::debug!(field = %rule.field, value, expects = rule.expects, "ignoring update value");
                evaluation.rejected.push(Rejection {
                    field: rule.field,
                    value: value.to_string(),
                });
            }
        }
    }
    evaluation
}
