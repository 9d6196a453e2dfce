//! Storage backend implementations.
//!
//! Concrete implementations of `todoboard_core::storage::TodoStore`. The
//! DynamoDB backend is the production store; the in-memory backend backs the
//! test suite.

pub mod dynamodb;
#[cfg(test)]
pub mod inmemory;

pub use dynamodb::DynamoDbTodoStore;
#[cfg(test)]
pub use inmemory::InMemoryTodoStore;
