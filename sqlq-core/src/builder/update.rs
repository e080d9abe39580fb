//! UPDATE query builder module

use serde::{Deserialize, Serialize};

use super::common::{finish, has_duplicate_columns, Conditions, QueryBuilder, Statement};
use crate::{Error, IntoOperator, Result, Value};

/// UPDATE query builder
///
/// Columns and values are kept in two lists paired by position. Empty
/// entries are dropped from each list independently, so the lists can drift
/// apart; `to_sql` reports that as a length mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBuilder {
    table_name: String,
    columns: Vec<String>,
    values: Vec<String>,
    conditions: Conditions,
}

impl UpdateBuilder {
    /// Create a new UPDATE query builder
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            columns: Vec::new(),
            values: Vec::new(),
            conditions: Conditions::new(),
        }
    }

    /// Set a column value
    ///
    /// # Examples
    /// ```
    /// use sqlq_core::{update, QueryBuilder};
    ///
    /// let query = update("users").set("name", "Jane").set("age", 25);
    /// assert_eq!(query.to_sql().unwrap(), "UPDATE users SET name = 'Jane', age = '25'");
    /// ```
    pub fn set<V>(mut self, column: &str, value: V) -> Self
    where
        V: Into<Value>,
    {
        self.push_column(column);
        self.push_value(value.into());
        self
    }

    /// Set several columns at once, pairing the two lists by position
    pub fn set_multiple<C, I, V>(mut self, columns: C, values: I) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        for column in columns {
            self.push_column(column.as_ref());
        }
        for value in values {
            self.push_value(value.into());
        }
        self
    }

    /// Add a WHERE condition. Ignored if any part is empty.
    pub fn where_<O, V>(mut self, column: &str, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        self.conditions.push_and(column, operator, value);
        self
    }

    /// Add an OR WHERE condition. Ignored if any part is empty.
    pub fn or_where<O, V>(mut self, column: &str, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        self.conditions.push_or(column, operator, value);
        self
    }

    /// Add an AND WHERE condition (same as where_)
    pub fn and_where<O, V>(self, column: &str, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        self.where_(column, operator, value)
    }

    fn push_column(&mut self, column: &str) {
        if column.is_empty() {
            tracing::trace!(table = %self.table_name, "skipping empty SET column");
            return;
        }
        self.columns.push(column.to_string());
    }

    fn push_value(&mut self, value: Value) {
        if value.is_empty() {
            tracing::trace!(table = %self.table_name, "skipping empty SET value");
            return;
        }
        self.values.push(value.quoted());
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
        let mut sql = String::new();

        // UPDATE clause
        sql.push_str("UPDATE ");
        sql.push_str(&self.table_name);

        // SET clause
        sql.push_str(" SET ");
        let set_parts: Vec<String> = self
            .columns
            .iter()
            .zip(&self.values)
            .map(|(column, value)| format!("{} = {}", column, value))
            .collect();
        sql.push_str(&set_parts.join(", "));

        self.conditions.write_where(&mut sql);

        sql
    }
}

impl QueryBuilder for UpdateBuilder {
    fn to_sql(&self) -> Result<String> {
        finish(self.statement(), self.validate().map(|()| self.render()))
    }

    fn statement(&self) -> Statement {
        Statement::Update
    }
}
