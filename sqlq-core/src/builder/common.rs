//! Common types and traits shared across all query builders

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{IntoOperator, Result, Value};

/// Core trait for all query builders
pub trait QueryBuilder {
    /// Validate the accumulated state and generate the statement text
    fn to_sql(&self) -> Result<String>;

    /// The kind of statement this builder produces
    fn statement(&self) -> Statement;
}

/// Statement kinds, displayed as their leading SQL keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statement {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Select => write!(f, "SELECT"),
            Statement::Insert => write!(f, "INSERT"),
            Statement::Update => write!(f, "UPDATE"),
            Statement::Delete => write!(f, "DELETE"),
        }
    }
}

/// Sort direction for ORDER BY
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// WHERE conditions, kept as two separately accumulated fragment lists
///
/// Fragments are rendered on append as `column operator 'value'`. All AND
/// fragments are written first, then all OR fragments, regardless of the
/// order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    and: Vec<String>,
    or: Vec<String>,
}

impl Conditions {
    /// Create an empty condition set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an AND fragment; no-op if any part is empty
    pub fn push_and<O, V>(&mut self, column: &str, operator: O, value: V)
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        if let Some(fragment) = fragment(column, operator, value) {
            self.and.push(fragment);
        }
    }

    /// Append an OR fragment; no-op if any part is empty
    pub fn push_or<O, V>(&mut self, column: &str, operator: O, value: V)
    where
        O: IntoOperator,
        V: Into<Value>,
    {
        if let Some(fragment) = fragment(column, operator, value) {
            self.or.push(fragment);
        }
    }

    pub fn and_fragments(&self) -> &[String] {
        &self.and
    }

    pub fn or_fragments(&self) -> &[String] {
        &self.or
    }

    pub fn is_empty(&self) -> bool {
        self.and.is_empty() && self.or.is_empty()
    }

    /// Append the WHERE clause, if any, to `sql`.
    ///
    /// The OR half is always written as a space followed by its joined
    /// fragments, bridged by ` OR` only when AND fragments precede it. An
    /// OR-only clause therefore reads `WHERE  a OR b` with two spaces.
    pub fn write_where(&self, sql: &mut String) {
        if self.is_empty() {
            return;
        }

        sql.push_str(" WHERE ");

        if !self.and.is_empty() {
            sql.push_str(&self.and.join(" AND "));
        }

        if !self.or.is_empty() {
            if !self.and.is_empty() {
                sql.push_str(" OR");
            }
            sql.push(' ');
            sql.push_str(&self.or.join(" OR "));
        }
    }
}

fn fragment<O, V>(column: &str, operator: O, value: V) -> Option<String>
where
    O: IntoOperator,
    V: Into<Value>,
{
    let operator = operator.into_operator();
    let value: Value = value.into();

    if column.is_empty() || operator.is_empty() || value.is_empty() {
        tracing::trace!(column, operator = %operator, "skipping condition with an empty part");
        return None;
    }

    Some(format!("{} {} {}", column, operator, value.quoted()))
}

/// True if any two entries are exactly equal (case-sensitive, untrimmed)
pub fn has_duplicate_columns(columns: &[String]) -> bool {
    let mut seen = HashSet::with_capacity(columns.len());
    columns.iter().any(|column| !seen.insert(column.as_str()))
}

/// Log the outcome of a render and pass it through
pub(crate) fn finish(statement: Statement, result: Result<String>) -> Result<String> {
    match &result {
        Ok(sql) => tracing::debug!(%statement, sql = %sql, "rendered statement"),
        Err(err) => tracing::debug!(%statement, error = %err, "statement failed validation"),
    }
    result
}

/// Trait to convert various types into columns
///
/// Use `()` for an empty list.
pub trait IntoColumns {
    fn into_columns(self) -> Vec<String>;
}

impl IntoColumns for () {
    fn into_columns(self) -> Vec<String> {
        Vec::new()
    }
}

impl IntoColumns for &str {
    fn into_columns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoColumns for String {
    fn into_columns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoColumns for Vec<String> {
    fn into_columns(self) -> Vec<String> {
        self
    }
}

impl IntoColumns for Vec<&str> {
    fn into_columns(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl IntoColumns for &[&str] {
    fn into_columns(self) -> Vec<String> {
        self.iter().copied().map(String::from).collect()
    }
}

impl<const N: usize> IntoColumns for [&str; N] {
    fn into_columns(self) -> Vec<String> {
        self.map(String::from).into()
    }
}

impl<const N: usize> IntoColumns for [String; N] {
    fn into_columns(self) -> Vec<String> {
        self.into()
    }
}

// Pairs and triples read well inline: `select(("id", "name"))`
impl IntoColumns for (&str, &str) {
    fn into_columns(self) -> Vec<String> {
        [self.0, self.1].into_columns()
    }
}

impl IntoColumns for (&str, &str, &str) {
    fn into_columns(self) -> Vec<String> {
        [self.0, self.1, self.2].into_columns()
    }
}
