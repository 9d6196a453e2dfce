//! Core domain types for todoboard.
//!
//! This crate holds the `TodoItem` model, the pure query processor
//! (filter/sort/paginate), and the storage and template-source traits
//! implemented by the server crate. It performs no I/O.

pub mod storage;
pub mod template;
pub mod todo;
