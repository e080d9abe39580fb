//! INSERT query builder module

use serde::{Deserialize, Serialize};

use super::common::{finish, has_duplicate_columns, IntoColumns, QueryBuilder, Statement};
use crate::{Error, Result, Value};

/// INSERT query builder
///
/// Values are quoted as they are appended, so the stored list already holds
/// the literal text that goes between the parentheses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertBuilder {
    table_name: String,
    columns: Vec<String>,
    values: Vec<String>,
}

impl InsertBuilder {
    /// Create an empty INSERT query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table, replacing any previous one
    pub fn into(mut self, table: &str) -> Self {
        self.table_name = table.to_string();
        self
    }

    /// Append columns, taken verbatim
    pub fn columns<T>(mut self, columns: T) -> Self
    where
        T: IntoColumns,
    {
        self.columns.extend(columns.into_columns());
        self
    }

    /// Append values, each wrapped in single quotes
    ///
    /// # Examples
    /// ```
    /// use sqlq_core::{insert, QueryBuilder};
    ///
    /// let query = insert()
    ///     .into("users")
    ///     .columns(("name", "age"))
    ///     .values(["John", "30"]);
    /// assert_eq!(
    ///     query.to_sql().unwrap(),
    ///     "INSERT INTO users (name, age) VALUES ('John', '30')"
    /// );
    /// ```
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values
            .extend(values.into_iter().map(|value| Into::<Value>::into(value).quoted()));
        self
    }

    /// Append a single value
    pub fn value<V>(self, value: V) -> Self
    where
        V: Into<Value>,
    {
        self.values(std::iter::once(value))
    }

    fn validate(&self) -> Result<()> {
        if self.table_name.is_empty() {
            return Err(Error::MissingTable);
        }
        if self.columns.is_empty() {
            return Err(Error::MissingColumns);
        }
        if self.values.is_empty() {
            return Err(Error::MissingValues);
        }
        if self.columns.len() != self.values.len() {
            return Err(Error::ColumnValueLengthMismatch);
        }
        if has_duplicate_columns(&self.columns) {
            return Err(Error::DuplicateColumns);
        }
        Ok(())
    }

    fn render(&self) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table_name,
            self.columns.join(", "),
            self.values.join(", ")
        )
    }
}

impl QueryBuilder for InsertBuilder {
    fn to_sql(&self) -> Result<String> {
        finish(self.statement(), self.validate().map(|()| self.render()))
    }

    fn statement(&self) -> Statement {
        Statement::Insert
    }
}
