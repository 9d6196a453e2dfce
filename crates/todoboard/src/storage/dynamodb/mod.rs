//! DynamoDB storage backend.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbTodoStore;
