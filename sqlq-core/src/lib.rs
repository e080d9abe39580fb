//! sqlq core - fluent builders for SQL statement text
//!
//! Each builder accumulates table, columns, values and conditions through
//! chained calls, then `to_sql` validates the state and returns the
//! statement text. Nothing here talks to a database.
//!
//! ```
//! use sqlq_core::{delete, QueryBuilder};
//!
//! let sql = delete()
//!     .from("users")
//!     .where_("id", "=", "1")
//!     .or_where("email", "=", "a@b.com")
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(sql, "DELETE FROM users WHERE id = '1' OR email = 'a@b.com'");
//! ```

pub mod builder;
pub mod error;
pub mod operator;
pub mod value;

// Re-export main types
pub use builder::{
    has_duplicate_columns, Conditions, DeleteBuilder, InsertBuilder, IntoColumns, QueryBuilder,
    SelectBuilder, SortDirection, Statement, UpdateBuilder,
};
pub use error::{Error, Result};
pub use operator::{op, IntoOperator, Operator};
pub use value::Value;

/// Create a SELECT query builder projecting the given columns
///
/// # Examples
/// ```
/// use sqlq_core::{select, QueryBuilder};
///
/// let sql = select(["id", "name"]).from("users").to_sql().unwrap();
/// assert_eq!(sql, "SELECT id, name FROM users");
/// ```
pub fn select<T: IntoColumns>(columns: T) -> SelectBuilder {
    SelectBuilder::new().columns(columns)
}

/// Create an empty INSERT query builder
pub fn insert() -> InsertBuilder {
    InsertBuilder::new()
}

/// Create an UPDATE query builder for the given table
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create an empty DELETE query builder
pub fn delete() -> DeleteBuilder {
    DeleteBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_scenario() {
        let result = select(["id", "name"]).from("users").to_sql();
        assert_eq!(result, Ok("SELECT id, name FROM users".to_string()));
    }

    #[test]
    fn test_insert_scenario() {
        let result = insert()
            .into("users")
            .columns(["a", "b"])
            .values(["1", "2"])
            .to_sql();
        assert_eq!(result, Ok("INSERT INTO users (a, b) VALUES ('1', '2')".to_string()));
    }

    #[test]
    fn test_update_scenario() {
        let result = update("users").set("name", "x").to_sql();
        assert_eq!(result, Ok("UPDATE users SET name = 'x'".to_string()));
    }

    #[test]
    fn test_delete_scenario() {
        let result = delete()
            .from("users")
            .where_("id", "=", "1")
            .or_where("email", "=", "a@b.com")
            .to_sql();
        assert_eq!(
            result,
            Ok("DELETE FROM users WHERE id = '1' OR email = 'a@b.com'".to_string())
        );
    }

    #[test]
    fn test_select_missing_table_scenario() {
        assert_eq!(select("id").from("").to_sql(), Err(Error::MissingTable));
    }

    #[test]
    fn test_insert_duplicate_columns_scenario() {
        let result = insert()
            .into("users")
            .columns(["a", "a"])
            .values(["1", "2"])
            .to_sql();
        assert_eq!(result, Err(Error::DuplicateColumns));
    }

    #[test]
    fn test_builders_behind_trait_object() {
        let builders: Vec<Box<dyn QueryBuilder>> = vec![
            Box::new(select("id").from("users")),
            Box::new(insert().into("users").columns("id").value(1)),
            Box::new(update("users").set("id", 2)),
            Box::new(delete().from("users")),
        ];
        let kinds: Vec<String> = builders.iter().map(|b| b.statement().to_string()).collect();
        assert_eq!(kinds, ["SELECT", "INSERT", "UPDATE", "DELETE"]);

        for builder in &builders {
            let sql = builder.to_sql().unwrap();
            assert!(sql.starts_with(&builder.statement().to_string()));
        }
    }
}
