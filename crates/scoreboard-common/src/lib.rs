//! Scoreboard-Common: shared types and utilities.
//!
//! - **Error Handling**: the unified [`Error`] type and [`Result`] alias
//! - **Typed IDs**: integer row-id wrappers for scores and pong matches
//! - **Dates**: `MM-DD-YYYY` rendering used when rows are serialized
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use scoreboard_common::{dates, Error, PongId, Result};
//!
//! let id = PongId::from(7);
//! assert_eq!(id.to_string(), "7");
//!
//! let day = NaiveDate::from_ymd_opt(2023, 1, 22).unwrap();
//! assert_eq!(dates::format_date(day), "01-22-2023");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("pong", 7))
//! }
//! assert!(example().is_err());
//! ```

pub mod dates;
pub mod error;
pub mod ids;

pub use error::{Error, Result};
pub use ids::*;
