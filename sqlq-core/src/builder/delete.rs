//! DELETE query builder module

use serde::{Deserialize, Serialize};

use super::common::{finish, Conditions, QueryBuilder, Statement};
use crate::{Error, IntoOperator, Result, Value};

/// DELETE query builder
///
/// A DELETE without conditions is allowed and removes every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBuilder {
    table_name: String,
    conditions: Conditions,
}

impl DeleteBuilder {
    /// Create an empty DELETE query builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table, replacing any previous one
    pub fn from(mut self, table: &str) -> Self {
        self.table_name = table.to_string();
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
}

impl QueryBuilder for DeleteBuilder {
    fn to_sql(&self) -> Result<String> {
        if self.table_name.is_empty() {
            return finish(self.statement(), Err(Error::MissingTable));
        }

        let mut sql = String::new();

        // DELETE FROM clause
        sql.push_str("DELETE FROM ");
        sql.push_str(&self.table_name);

        self.conditions.write_where(&mut sql);

        finish(self.statement(), Ok(sql))
    }

    fn statement(&self) -> Statement {
        Statement::Delete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delete;
    use crate::operator::op;

    #[test]
    fn test_delete_builder() {
        let sql = delete()
            .from("users")
            .where_("id", "=", "1")
            .or_where("email", "=", "a@b.com")
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM users WHERE id = '1' OR email = 'a@b.com'");
    }

    #[test]
    fn test_delete_without_where() {
        let sql = delete().from("users").to_sql().unwrap();
        assert_eq!(sql, "DELETE FROM users");
    }

    #[test]
    fn test_delete_multiple_conditions() {
        let sql = delete()
            .from("users")
            .where_("id", "=", 1)
            .and_where("name", op::LIKE, "%sqlq")
            .or_where("email", "LIKE", "sqlq@%")
            .or_where("created_at", ">", "CURDATE()")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM users WHERE id = '1' AND name LIKE '%sqlq' \
             OR email LIKE 'sqlq@%' OR created_at > 'CURDATE()'"
        );
    }

    #[test]
    fn test_delete_and_only() {
        let sql = delete()
            .from("users")
            .where_("id", op::LT, 18)
            .where_("status", "=", "inactive")
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM users WHERE id < '18' AND status = 'inactive'");
    }

    #[test]
    fn test_delete_or_only() {
        let sql = delete()
            .from("users")
            .or_where("email", "LIKE", "sqlq@%")
            .or_where("created_at", ">", "CURDATE()")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM users WHERE  email LIKE 'sqlq@%' OR created_at > 'CURDATE()'"
        );
    }

    #[test]
    fn test_empty_condition_parts_are_skipped() {
        let query = delete().from("users").where_("", "", "").or_where("id", "=", "");
        assert_eq!(query, delete().from("users"));
        assert_eq!(query.to_sql().unwrap(), "DELETE FROM users");
    }

    #[test]
    fn test_missing_table() {
        assert_eq!(delete().to_sql(), Err(Error::MissingTable));
        let query = delete().from("").where_("id", "=", "1");
        assert_eq!(query.to_sql(), Err(Error::MissingTable));
    }

    #[test]
    fn test_from_overwrites() {
        let sql = delete().from("users").from("sessions").to_sql().unwrap();
        assert_eq!(sql, "DELETE FROM sessions");
    }

    #[test]
    fn test_statement_kind() {
        assert_eq!(DeleteBuilder::new().statement(), Statement::Delete);
    }
}
