//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! `TodoItem` type. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};

use todoboard_core::storage::StoreError;
use todoboard_core::todo::TodoItem;

/// Convert a TodoItem to a DynamoDB item.
pub fn todo_to_item(todo: &TodoItem) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::N(todo.id.to_string()));
    item.insert("title".to_string(), AttributeValue::S(todo.title.clone()));
    item.insert(
        "complete".to_string(),
        AttributeValue::Bool(todo.complete),
    );
    if let Some(created_at) = todo.created_at {
        item.insert(
            "created_at".to_string(),
            AttributeValue::S(created_at.to_rfc3339()),
        );
    }

    item
}

/// Convert a DynamoDB item to a TodoItem.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<TodoItem, StoreError> {
    Ok(TodoItem {
        id: get_number(item, "id")?,
        title: get_string(item, "title")?,
        complete: get_bool(item, "complete")?,
        created_at: get_optional_datetime(item, "created_at")?,
    })
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::Serialization(format!("missing string attribute: {key}")))
}

fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, StoreError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| StoreError::Serialization(format!("missing number attribute: {key}")))?
        .parse()
        .map_err(|_| StoreError::Serialization(format!("attribute {key} is not a valid integer")))
}

fn get_bool(item: &HashMap<String, AttributeValue>, key: &str) -> Result<bool, StoreError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| StoreError::Serialization(format!("missing boolean attribute: {key}")))
}

fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, StoreError> {
    match item.get(key) {
        None => Ok(None),
        Some(value) => {
            let raw = value.as_s().map_err(|_| {
                StoreError::Serialization(format!("attribute {key} is not a string"))
            })?;
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(|e| {
                    StoreError::Serialization(format!("attribute {key} is not RFC 3339: {e}"))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip_with_timestamp() {
        let todo = TodoItem {
            id: 42,
            title: "Buy milk".to_string(),
            complete: true,
            created_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        };

        let item = todo_to_item(&todo);
        assert_eq!(item_to_todo(&item).unwrap(), todo);
    }

    #[test]
    fn test_missing_created_at_reads_as_none() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::N("1".to_string()));
        item.insert("title".to_string(), AttributeValue::S("Walk dog".to_string()));
        item.insert("complete".to_string(), AttributeValue::Bool(false));

        let todo = item_to_todo(&item).unwrap();
        assert_eq!(todo.created_at, None);
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::N("1".to_string()));
        item.insert("complete".to_string(), AttributeValue::Bool(false));

        let err = item_to_todo(&item).unwrap_err();
        assert_eq!(
            err,
            StoreError::Serialization("missing string attribute: title".to_string())
        );
    }

    #[test]
    fn test_non_numeric_id_is_an_error() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::N("abc".to_string()));
        item.insert("title".to_string(), AttributeValue::S("x".to_string()));
        item.insert("complete".to_string(), AttributeValue::Bool(false));

        assert!(item_to_todo(&item).is_err());
    }
}
