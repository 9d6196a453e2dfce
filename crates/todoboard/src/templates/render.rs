//! Page rendering against the runtime-fetched template.
//!
//! The template document carries Jinja-style directives (the markup in the
//! object store is authored as a Jinja template), so it is rendered with
//! minijinja against a serialized page context.

use minijinja::Environment;
use serde::Serialize;

use todoboard_core::template::{Result, TemplateError};
use todoboard_core::todo::query::{QueryOptions, TodoPage};
use todoboard_core::todo::TodoItem;

use crate::handlers::flash::FlashMessage;

/// Variables exposed to the page template.
///
/// Field names match the variables the stored template references
/// (`todo_list`, `search_query`, and the pagination metadata).
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub todo_list: Vec<TodoItem>,
    pub search_query: String,
    pub search_field: &'static str,
    pub sort_by: &'static str,
    pub sort_order: &'static str,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub flash: Option<FlashMessage>,
}

impl PageContext {
    /// Builds the context from a query-processor result page.
    pub fn new(page: &TodoPage, opts: &QueryOptions, flash: Option<FlashMessage>) -> Self {
        Self {
            todo_list: page.items.clone(),
            search_query: opts.search.clone().unwrap_or_default(),
            search_field: opts.search_field.as_str(),
            sort_by: opts.sort_by.as_str(),
            sort_order: opts.sort_order.as_str(),
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            flash,
        }
    }
}

/// Renders the template source against the page context.
pub fn render_page(source: &str, context: &PageContext) -> Result<String> {
    let env = Environment::new();
    let template = env
        .template_from_str(source)
        .map_err(|e| TemplateError::RenderFailed(e.to_string()))?;
    template
        .render(context)
        .map_err(|e| TemplateError::RenderFailed(e.to_string()))
}
