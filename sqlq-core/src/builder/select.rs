//! SELECT query builder module

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::common::{finish, has_duplicate_columns, Conditions, IntoColumns, QueryBuilder, Statement};
use crate::{Error, IntoOperator, Result, Value};

/// SELECT query builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectBuilder {
    table_name: String,
    columns: Vec<String>,
    conditions: Conditions,
    order: Vec<String>,
    limit_value: i64,
}

impl SelectBuilder {
    /// Create an empty SELECT query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source table, replacing any previous one
    pub fn from(mut self, table: &str) -> Self {
        self.table_name = table.to_string();
        self
    }

    /// Append projected columns
    ///
    /// # Examples
    /// ```
    /// use sqlq_core::{select, QueryBuilder};
    ///
    /// let query = select("id").columns(("name", "email")).from("users");
    /// assert_eq!(query.to_sql().unwrap(), "SELECT id, name, email FROM users");
    /// ```
    pub fn columns<T>(mut self, columns: T) -> Self
    where
        T: IntoColumns,
    {
        self.columns.extend(columns.into_columns());
        self
    }

    /// Add a WHERE condition. Ignored if any part is empty.
    ///
    /// # Examples
    /// ```
    /// use sqlq_core::{op, select, QueryBuilder};
    ///
    /// let query = select("id")
    ///     .from("users")
    ///     .where_("age", op::GT, 18)
    ///     .where_("name", "=", "John");
    /// assert_eq!(
    ///     query.to_sql().unwrap(),
    ///     "SELECT id FROM users WHERE age > '18' AND name = 'John'"
    /// );
    /// ```
    pub fn where_<O, V>(mut self, column: &str, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        self.conditions.push_and(column, operator, value);
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

    /// Add an OR WHERE condition. Ignored if any part is empty.
    pub fn or_where<O, V>(mut self, column: &str, operator: O, value: V) -> Self
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        self.conditions.push_or(column, operator, value);
        self
    }

    /// Append an ORDER BY entry. The direction is written as given.
    pub fn order_by<D>(mut self, column: &str, direction: D) -> Self
    where
        D: Display,
    {
        self.order.push(format!("{} {}", column, direction));
        self
    }

    /// Set the LIMIT clause. Zero means no limit; negative fails at render.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit_value = limit;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.table_name.is_empty() {
            return Err(Error::MissingTable);
        }
        if self.columns.is_empty() {
            return Err(Error::MissingColumns);
        }
        if self.limit_value < 0 {
            return Err(Error::InvalidLimit);
        }
        if has_duplicate_columns(&self.columns) {
            return Err(Error::DuplicateColumns);
        }
        Ok(())
    }

    fn render(&self) -> String {
        let mut sql = String::new();

        // SELECT clause
        sql.push_str("SELECT ");
        sql.push_str(&self.columns.join(", "));

        // FROM clause
        sql.push_str(" FROM ");
        sql.push_str(&self.table_name);

        self.conditions.write_where(&mut sql);

        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order.join(", "));
        }

        if self.limit_value > 0 {
            sql.push_str(&format!(" LIMIT {}", self.limit_value));
        }

        sql
    }
}

impl QueryBuilder for SelectBuilder {
    fn to_sql(&self) -> Result<String> {
        finish(self.statement(), self.validate().map(|()| self.render()))
    }

    fn statement(&self) -> Statement {
        Statement::Select
    }
}
