//! Mutating to-do routes: add, toggle-complete, delete.
//!
//! Every route answers 302 to `/` no matter what happened; outcomes are
//! reported through flash notices and logs, never as error responses.

use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use serde::Deserialize;

use todoboard_core::todo::{next_id, validate_title, TodoItem};

use crate::{
    handlers::flash::{self, FlashMessage},
    state::AppState,
};

/// Form payload for POST /add.
#[derive(Debug, Deserialize)]
pub struct AddTodo {
    #[serde(default)]
    pub title: String,
}

/// Handler for POST /add.
pub async fn add(State(state): State<AppState>, Form(form): Form<AddTodo>) -> Response {
    let title = match validate_title(&form.title) {
        Ok(title) => title,
        Err(err) => {
            tracing::debug!(error = %err, "Rejected new item");
            return flash::redirect_with_flash("/", FlashMessage::error(err.to_string()));
        }
    };

    // Next id comes from a full scan; on scan failure fall back to 1 so a
    // fresh table still accepts its first item.
    let id = match state.store.scan_all().await {
        Ok(items) => next_id(&items),
        Err(err) => {
            tracing::warn!(error = %err, "Scan for next id failed, falling back to 1");
            1
        }
    };

    let item = TodoItem::new(title, id);
    match state.store.save(&item).await {
        Ok(()) => {
            tracing::debug!(id, title = %item.title, "Saved new item");
            flash::redirect_with_flash("/", FlashMessage::success(format!("Added \"{title}\"")))
        }
        Err(err) => {
            tracing::error!(id, error = %err, "Failed to save new item");
            flash::redirect_with_flash(
                "/",
                FlashMessage::error("Could not save the item, please try again"),
            )
        }
    }
}

/// Handler for GET /update/{id}. Flips the item's completion flag.
///
/// A missing id is a silent no-op; store failures are logged and swallowed.
pub async fn update(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get(id).await {
        Ok(Some(mut item)) => {
            item.complete = !item.complete;
            if let Err(err) = state.store.save(&item).await {
                tracing::error!(id, error = %err, "Failed to save toggled item");
            } else {
                tracing::debug!(id, complete = item.complete, "Toggled item");
            }
        }
        Ok(None) => {
            tracing::debug!(id, "Toggle requested for unknown id");
        }
        Err(err) => {
            tracing::error!(id, error = %err, "Failed to load item for toggle");
        }
    }
    flash::redirect("/")
}

/// Handler for GET /delete/{id}.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.store.get(id).await {
        Ok(Some(item)) => match state.store.delete(id).await {
            Ok(()) => {
                tracing::debug!(id, "Deleted item");
                flash::redirect_with_flash(
                    "/",
                    FlashMessage::success(format!("Deleted \"{}\"", item.title)),
                )
            }
            Err(err) => {
                tracing::error!(id, error = %err, "Failed to delete item");
                flash::redirect_with_flash(
                    "/",
                    FlashMessage::error("Could not delete the item, please try again"),
                )
            }
        },
        Ok(None) => flash::redirect_with_flash("/", FlashMessage::info("Item not found")),
        Err(err) => {
            tracing::error!(id, error = %err, "Failed to load item for delete");
            flash::redirect_with_flash(
                "/",
                FlashMessage::error("Could not delete the item, please try again"),
            )
        }
    }
}
