#![doc = include_str!("../README.md")]

pub mod category;
pub mod month;
pub mod query;

pub use category::{Category, UnsupportedCategoryError};
pub use month::{Month, MonthParseError};
pub use query::{resolve_ignored_items, Query};
