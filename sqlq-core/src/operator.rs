//! SQL comparison operators used in WHERE conditions

use std::borrow::Cow;
use std::fmt::{self, Display};

/// An operator placed verbatim between a column and its quoted value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator(Cow<'static, str>);

impl Operator {
    pub const GT: Self = Operator(Cow::Borrowed(">"));
    pub const LT: Self = Operator(Cow::Borrowed("<"));
    pub const EQ: Self = Operator(Cow::Borrowed("="));
    pub const NEQ: Self = Operator(Cow::Borrowed("!="));
    pub const GTE: Self = Operator(Cow::Borrowed(">="));
    pub const LTE: Self = Operator(Cow::Borrowed("<="));
    pub const LIKE: Self = Operator(Cow::Borrowed("LIKE"));
    pub const ILIKE: Self = Operator(Cow::Borrowed("ILIKE"));
    pub const IN: Self = Operator(Cow::Borrowed("IN"));
    pub const NOT_IN: Self = Operator(Cow::Borrowed("NOT IN"));

    /// Create a custom operator for database-specific operations
    ///
    /// # Examples
    /// ```
    /// use sqlq_core::Operator;
    ///
    /// // PostgreSQL full-text search
    /// let fts_op = Operator::custom("@@");
    /// assert_eq!(fts_op.as_str(), "@@");
    /// ```
    pub fn custom(op: impl Into<String>) -> Self {
        Operator(Cow::Owned(op.into()))
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty operator disables the condition it belongs to
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for types that can be converted to SQL operators
pub trait IntoOperator {
    fn into_operator(self) -> Operator;
}

impl IntoOperator for Operator {
    fn into_operator(self) -> Operator {
        self
    }
}

/// Strings are taken as-is; no operator list is enforced.
impl IntoOperator for &str {
    fn into_operator(self) -> Operator {
        Operator::custom(self)
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> Operator {
        Operator::custom(self)
    }
}

/// Convenience module for operator constants
pub mod op {
    use super::Operator;

    pub const GT: Operator = Operator::GT;
    pub const LT: Operator = Operator::LT;
    pub const EQ: Operator = Operator::EQ;
    pub const NEQ: Operator = Operator::NEQ;
    pub const GTE: Operator = Operator::GTE;
    pub const LTE: Operator = Operator::LTE;
    pub const LIKE: Operator = Operator::LIKE;
    pub const ILIKE: Operator = Operator::ILIKE;
    pub const IN: Operator = Operator::IN;
    pub const NOT_IN: Operator = Operator::NOT_IN;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_constants() {
        assert_eq!(Operator::GT.as_str(), ">");
        assert_eq!(Operator::LT.as_str(), "<");
        assert_eq!(Operator::EQ.as_str(), "=");
        assert_eq!(Operator::LIKE.as_str(), "LIKE");
        assert_eq!(op::NOT_IN.as_str(), "NOT IN");
    }

    #[test]
    fn test_custom_operator() {
        let custom_op = Operator::custom("<->");
        assert_eq!(custom_op.as_str(), "<->");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Operator::GTE), ">=");
        assert_eq!(format!("{}", Operator::ILIKE), "ILIKE");
    }

    #[test]
    fn test_string_conversion_is_verbatim() {
        assert_eq!(">".into_operator(), Operator::GT);
        assert_eq!("LIKE".into_operator(), Operator::LIKE);
        // case is kept as written
        assert_eq!("like".into_operator().as_str(), "like");
        assert_eq!(String::from("IS NOT").into_operator().as_str(), "IS NOT");
    }

    #[test]
    fn test_unknown_operator_does_not_panic() {
        assert_eq!("SOUNDS LIKE".into_operator().as_str(), "SOUNDS LIKE");
    }

    #[test]
    fn test_empty_operator() {
        assert!("".into_operator().is_empty());
        assert!(!Operator::EQ.is_empty());
    }
}
