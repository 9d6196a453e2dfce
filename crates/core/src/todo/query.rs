//! In-memory query processing over a scanned item list.
//!
//! A strict filter -> sort -> paginate pipeline: each stage consumes the full
//! output of the previous one. No I/O, no short-circuiting.

use super::TodoItem;

/// Default page size.
pub const DEFAULT_PER_PAGE: usize = 5;

/// Which attribute a search term matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    Title,
    Status,
}

impl SearchField {
    /// Parses a query-string value, defaulting to `Title` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value {
            "status" => Self::Status,
            _ => Self::Title,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Status => "status",
        }
    }
}

/// Sort key for the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Title,
    CreatedAt,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => Self::Title,
            "created_at" => Self::CreatedAt,
            _ => Self::Id,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sort direction. Ascending unless the request says `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parameters for one run of the query pipeline.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub search: Option<String>,
    pub search_field: SearchField,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
    /// 1-based page number. Pages beyond range yield an empty slice.
    pub page: usize,
    pub per_page: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            search: None,
            search_field: SearchField::default(),
            sort_by: SortKey::default(),
            sort_order: SortOrder::default(),
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoPage {
    pub items: Vec<TodoItem>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub per_page: usize,
}

impl TodoPage {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Runs the full filter -> sort -> paginate pipeline.
pub fn run(items: Vec<TodoItem>, opts: &QueryOptions) -> TodoPage {
    let mut filtered = match &opts.search {
        Some(term) if !term.trim().is_empty() => filter(items, opts.search_field, term.trim()),
        _ => items,
    };
    sort(&mut filtered, opts.sort_by, opts.sort_order);
    paginate(filtered, opts.page, opts.per_page)
}

/// Keeps items matching the search term on the given field.
///
/// Title matches are case-insensitive substring matches. Status terms come
/// from a fixed vocabulary; an unrecognized status term filters nothing.
pub fn filter(items: Vec<TodoItem>, field: SearchField, term: &str) -> Vec<TodoItem> {
    match field {
        SearchField::Title => {
            let needle = term.to_lowercase();
            items
                .into_iter()
                .filter(|t| t.title.to_lowercase().contains(&needle))
                .collect()
        }
        SearchField::Status => match status_term(term) {
            Some(wanted) => items.into_iter().filter(|t| t.complete == wanted).collect(),
            None => items,
        },
    }
}

/// Maps a status search term to the completion state it selects.
fn status_term(term: &str) -> Option<bool> {
    match term.to_lowercase().as_str() {
        "complete" | "completed" | "done" => Some(true),
        "incomplete" | "pending" | "todo" => Some(false),
        _ => None,
    }
}

/// Sorts items in place by the given key and direction.
///
/// Title comparison is case-insensitive. Items without `created_at` order
/// before any timestamped item, and every key tie-breaks on `id`, keeping the
/// ordering deterministic.
pub fn sort(items: &mut [TodoItem], key: SortKey, order: SortOrder) {
    items.sort_by(|a, b| {
        let cmp = match key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then(a.id.cmp(&b.id)),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
        };
        match order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });
}

/// Slices out the requested page and computes pagination metadata.
///
/// `page` is 1-based and not clamped: a page past the end yields an empty
/// item list. `per_page` is clamped to a minimum of 1.
pub fn paginate(items: Vec<TodoItem>, page: usize, per_page: usize) -> TodoPage {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let page_items = if start >= total {
        Vec::new()
    } else {
        let end = (start + per_page).min(total);
        items[start..end].to_vec()
    };

    TodoPage {
        items: page_items,
        total,
        total_pages,
        page,
        per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: i64, title: &str, complete: bool) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            complete,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, id as u32, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_title_search_is_case_insensitive_substring() {
        let items = vec![item(1, "Buy milk", false), item(2, "Walk dog", false)];
        let opts = QueryOptions {
            search: Some("milk".to_string()),
            ..QueryOptions::default()
        };

        let page = run(items, &opts);

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Buy milk");
    }

    #[test]
    fn test_status_search_complete_vocabulary() {
        let items = vec![item(1, "a", true), item(2, "b", false), item(3, "c", true)];
        for term in ["complete", "completed", "done", "COMPLETE"] {
            let kept = filter(items.clone(), SearchField::Status, term);
            assert_eq!(kept.len(), 2, "term {term:?}");
            assert!(kept.iter().all(|t| t.complete));
        }
    }

    #[test]
    fn test_status_search_incomplete_vocabulary() {
        let items = vec![item(1, "a", true), item(2, "b", false)];
        for term in ["incomplete", "pending", "todo"] {
            let kept = filter(items.clone(), SearchField::Status, term);
            assert_eq!(kept.len(), 1, "term {term:?}");
            assert!(!kept[0].complete);
        }
    }

    #[test]
    fn test_unknown_status_term_filters_nothing() {
        let items = vec![item(1, "a", true), item(2, "b", false)];
        let kept = filter(items.clone(), SearchField::Status, "maybe");
        assert_eq!(kept, items);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let mut items = vec![item(1, "banana", false), item(2, "Apple", false)];
        sort(&mut items, SortKey::Title, SortOrder::Asc);
        assert_eq!(items[0].title, "Apple");
        assert_eq!(items[1].title, "banana");
    }

    #[test]
    fn test_sort_created_at_missing_orders_first() {
        let mut items = vec![item(3, "c", false), item(1, "a", false)];
        items.push(TodoItem {
            id: 2,
            title: "no timestamp".to_string(),
            complete: false,
            created_at: None,
        });

        sort(&mut items, SortKey::CreatedAt, SortOrder::Asc);

        assert_eq!(items[0].id, 2);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[2].id, 3);
    }

    #[test]
    fn test_sort_id_desc() {
        let mut items = vec![item(1, "a", false), item(3, "c", false), item(2, "b", false)];
        sort(&mut items, SortKey::Id, SortOrder::Desc);
        let ids: Vec<i64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_pagination_last_partial_page() {
        let items: Vec<TodoItem> = (1..=12).map(|i| item(i, "t", false)).collect();
        let page = paginate(items, 3, 5);

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_pagination_page_beyond_range_is_empty() {
        let items: Vec<TodoItem> = (1..=4).map(|i| item(i, "t", false)).collect();
        let page = paginate(items, 9, 5);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next());
    }

    #[test]
    fn test_pagination_per_page_zero_is_clamped() {
        let items: Vec<TodoItem> = (1..=3).map(|i| item(i, "t", false)).collect();
        let page = paginate(items, 1, 0);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_pipeline_filters_before_paginating() {
        let mut items: Vec<TodoItem> = (1..=10).map(|i| item(i, "keep", false)).collect();
        items.extend((11..=20).map(|i| item(i, "drop", false)));
        let opts = QueryOptions {
            search: Some("keep".to_string()),
            per_page: 4,
            page: 3,
            ..QueryOptions::default()
        };

        let page = run(items, &opts);

        assert_eq!(page.total, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_parse_defaults_for_unknown_values() {
        assert_eq!(SearchField::parse("nonsense"), SearchField::Title);
        assert_eq!(SortKey::parse("nonsense"), SortKey::Id);
        assert_eq!(SortOrder::parse("nonsense"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
    }
}
