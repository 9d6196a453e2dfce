pub mod query;
mod types;

pub use types::{next_id, validate_title, TitleError, TodoItem, MAX_TITLE_LEN};
