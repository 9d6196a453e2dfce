use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum title length after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// A single to-do item.
///
/// `created_at` is optional on read because records written before the field
/// was introduced may lack it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub complete: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl TodoItem {
    /// Creates a new, incomplete item timestamped now.
    pub fn new(title: impl Into<String>, id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            complete: false,
            created_at: Some(Utc::now()),
        }
    }
}

/// Errors for title validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,
    #[error("Title must be at most {MAX_TITLE_LEN} characters (got {len})")]
    TooLong { len: usize },
}

/// Validates a raw title, returning the trimmed form.
pub fn validate_title(raw: &str) -> Result<&str, TitleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(TitleError::TooLong { len });
    }
    Ok(trimmed)
}

/// Next id to assign: one past the maximum existing id, or 1 for an empty
/// table. Ids need not be contiguous.
pub fn next_id(items: &[TodoItem]) -> i64 {
    items.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}
