mod error;
pub mod flash;
pub mod pages;
pub mod todos;

pub use error::AppError;
