//! Index page handler.
//!
//! Ensures the table exists, scans it, runs the query processor, fetches the
//! page template, and renders. Any failure becomes a 500 with the error text.

use axum::{
    extract::{Query, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use todoboard_core::todo::query::{self, QueryOptions, SearchField, SortKey, SortOrder};

use crate::{
    handlers::{flash, AppError},
    state::AppState,
    templates::{render_page, PageContext},
};

/// Query parameters for the index page.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    /// "title" (default) or "status"
    #[serde(default)]
    pub search_field: Option<String>,
    /// "id" (default), "title", or "created_at"
    #[serde(default)]
    pub sort_by: Option<String>,
    /// "asc" (default) or "desc"
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

impl ListParams {
    /// Converts raw query-string values into query options. Unrecognized
    /// values fall back to the defaults instead of erroring.
    fn to_options(&self) -> QueryOptions {
        let defaults = QueryOptions::default();
        QueryOptions {
            search: self.search.clone().filter(|s| !s.trim().is_empty()),
            search_field: self
                .search_field
                .as_deref()
                .map_or_else(SearchField::default, SearchField::parse),
            sort_by: self
                .sort_by
                .as_deref()
                .map_or_else(SortKey::default, SortKey::parse),
            sort_order: self
                .sort_order
                .as_deref()
                .map_or_else(SortOrder::default, SortOrder::parse),
            page: self.page.unwrap_or(defaults.page).max(1),
            per_page: self.per_page.unwrap_or(defaults.per_page).max(1),
        }
    }
}

/// Handler for the index page (GET /).
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    ensure_table(&state).await?;

    let items = state.store.scan_all().await?;
    let opts = params.to_options();
    let page = query::run(items, &opts);

    // Fetched fresh on every request, no caching.
    let source = state.templates.fetch().await?;

    let pending_flash = flash::take_from_headers(&headers);
    let had_flash = pending_flash.is_some();
    let context = PageContext::new(&page, &opts, pending_flash);
    let html = render_page(&source, &context)?;

    if had_flash {
        // One-shot notice: clear the cookie now that it has been rendered.
        Ok(([(SET_COOKIE, flash::clear_cookie_header())], Html(html)).into_response())
    } else {
        Ok(Html(html).into_response())
    }
}

/// Creates the table on demand, blocking until it is ready.
async fn ensure_table(state: &AppState) -> Result<(), AppError> {
    if !state.store.exists().await? {
        tracing::info!(table = %state.config.table_name, "Table does not exist, creating");
        state
            .store
            .create_table(state.config.read_capacity, state.config.write_capacity)
            .await?;
        tracing::info!(table = %state.config.table_name, "Table created");
    }
    Ok(())
}
