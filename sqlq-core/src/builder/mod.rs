//! Query builder module

pub mod common;
pub mod select;
pub mod insert;
pub mod update;
pub mod delete;

// Re-export types from submodules
pub use common::{has_duplicate_columns, Conditions, IntoColumns, QueryBuilder, SortDirection, Statement};
pub use select::SelectBuilder;
pub use insert::InsertBuilder;
pub use update::UpdateBuilder;
pub use delete::DeleteBuilder;
