//! Fluent predicate builder bound to a single column
//!
//! SQL three-valued logic makes `col != v` false for NULL rows unless NULL
//! is included explicitly. The builder bakes the NULL-aware expansion into
//! each comparison, so "not equals" means "different or absent" and
//! "greater" means "present and greater". The AND/OR placement of the
//! NULL/NOT-NULL guard differs per method and is part of the contract.


use crate::condition::Condition;
use crate::error::{ConditionError, Result};
use crate::operator::{Operator, OrderDirection};
use crate::tree::ConditionTree;
use crate::value::{ColumnRef, Scalar, SubQuery, Value};

/// Column to build predicates against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    reference: ColumnRef,
}

impl Column {
    /// Column referenced by plain name
    pub fn of(name: impl Into<String>) -> Column {
        Column {
            reference: ColumnRef::Name(name.into()),
        }
    }

    /// Column referenced through a named computed expression
    pub fn expressed_as(name: impl Into<String>, expression: impl Into<String>) -> Column {
        Column {
            reference: ColumnRef::Expression {
                name: name.into(),
                expression: expression.into(),
            },
        }
    }

    pub fn reference(&self) -> &ColumnRef {
        &self.reference
    }

    fn condition(&self, operator: Operator, value: Value) -> Condition {
        Condition::unchecked(self.reference.clone(), operator, value)
    }

    /// Column equals the value and is present
    ///
    /// A null value turns into a plain IS NULL check; a sequence value
    /// becomes an IN check.
    pub fn equals(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return self.is_null().to_tree();
        }

        let operator = if matches!(value, Value::Sequence(_)) {
            Operator::In
        } else {
            Operator::Equal
        };

        ConditionTree::for_all(vec![
            self.condition(operator, value).into(),
            self.is_not_null().into(),
        ])
    }

    /// Column differs from the value or is absent
    pub fn not_equals(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return self.is_not_null().to_tree();
        }

        ConditionTree::for_any(vec![
            self.condition(Operator::NotEqual, value).into(),
            self.is_null().into(),
        ])
    }

    /// Column is less than the value or absent; nothing is less than null
    pub fn less(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return ConditionTree::always_false();
        }

        ConditionTree::for_any(vec![
            self.condition(Operator::Less, value).into(),
            self.is_null().into(),
        ])
    }

    /// Column is less than or equal to the value, or absent
    pub fn less_or_equal(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return self.is_null().to_tree();
        }

        ConditionTree::for_any(vec![
            self.condition(Operator::LessOrEqual, value).into(),
            self.is_null().into(),
        ])
    }

    /// Column is present and greater than the value
    pub fn greater(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return self.is_not_null().to_tree();
        }

        ConditionTree::for_all(vec![
            self.condition(Operator::Greater, value).into(),
            self.is_not_null().into(),
        ])
    }

    /// Column is present and at least the value; everything is at least null
    pub fn greater_or_equal(&self, value: impl Into<Value>) -> ConditionTree {
        let value = value.into();
        if value.is_null() {
            return ConditionTree::always_true();
        }

        ConditionTree::for_all(vec![
            self.condition(Operator::GreaterOrEqual, value).into(),
            self.is_not_null().into(),
        ])
    }

    /// Strict comparison following a sort direction: ascending compares
    /// greater, descending compares less
    pub fn directed_by(&self, direction: OrderDirection, value: impl Into<Value>) -> ConditionTree {
        match direction {
            OrderDirection::Asc => self.greater(value),
            OrderDirection::Desc => self.less(value),
        }
    }

    /// Inclusive variant of [`Column::directed_by`]
    pub fn directed_or_equal_by(
        &self,
        direction: OrderDirection,
        value: impl Into<Value>,
    ) -> ConditionTree {
        match direction {
            OrderDirection::Asc => self.greater_or_equal(value),
            OrderDirection::Desc => self.less_or_equal(value),
        }
    }

    /// Plain IN check against the given values, no NULL expansion
    pub fn any_of<I, T>(&self, values: I) -> Condition
    where
        I: IntoIterator<Item = T>,
        T: Into<Scalar>,
    {
        self.condition(Operator::In, Value::sequence(values))
    }

    /// All of the given values are excluded: AND of `not_equals` per value
    pub fn none_of<I, T>(&self, values: I) -> ConditionTree
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        ConditionTree::for_all(
            values
                .into_iter()
                .map(|value| self.not_equals(value).into())
                .collect(),
        )
    }

    /// Negation of [`Column::none_of`]
    pub fn any_except<I, T>(&self, values: I) -> ConditionTree
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.none_of(values).negative()
    }

    pub fn is_null(&self) -> Condition {
        self.condition(Operator::Equal, Value::Null)
    }

    pub fn is_not_null(&self) -> Condition {
        self.condition(Operator::NotEqual, Value::Null)
    }

    /// Column value is present and found in the sub-query result
    pub fn found_in(&self, query: SubQuery) -> ConditionTree {
        ConditionTree::for_all(vec![
            self.condition(Operator::In, query.into()).into(),
            self.is_not_null().into(),
        ])
    }

    /// Column value is absent or not found in the sub-query result
    pub fn not_found_in(&self, query: SubQuery) -> ConditionTree {
        ConditionTree::for_any(vec![
            self.condition(Operator::In, query.into())
                .to_tree()
                .negative()
                .into(),
            self.is_null().into(),
        ])
    }

    /// BETWEEN the two numeric bounds
    ///
    /// Bound order is not checked; reversed bounds pass through as given.
    pub fn between_numbers(
        &self,
        from: impl Into<Scalar>,
        to: impl Into<Scalar>,
    ) -> Result<Condition> {
        let from = from.into();
        let to = to.into();

        if !from.is_numeric() || !to.is_numeric() {
            return Err(ConditionError::InvalidArgument(
                "only numeric types (int, float) are allowed as BETWEEN bounds".to_string(),
            ));
        }

        Condition::new(
            self.reference.clone(),
            Operator::Between,
            Value::Sequence(vec![from, to]),
        )
    }

    /// Raw LIKE condition; the caller supplies wildcard characters
    pub fn like(&self, pattern: impl Into<String>) -> Condition {
        self.condition(Operator::Like, Value::from(pattern.into()))
    }

    /// Column is present and contains the text
    pub fn contains(&self, text: &str) -> ConditionTree {
        ConditionTree::for_all(vec![
            self.like(format!("%{}%", text)).into(),
            self.is_not_null().into(),
        ])
    }

    /// Column is absent or does not contain the text
    pub fn not_contains(&self, text: &str) -> ConditionTree {
        ConditionTree::for_any(vec![
            self.like(format!("%{}%", text)).to_tree().negative().into(),
            self.is_null().into(),
        ])
    }

    pub fn starts_with(&self, text: &str) -> Condition {
        self.like(format!("{}%", text))
    }

    pub fn ends_with(&self, text: &str) -> Condition {
        self.like(format!("%{}", text))
    }

    /// EXISTS check against a sub-query
    pub fn exists(&self, query: SubQuery) -> Condition {
        self.condition(Operator::Exists, query.into())
    }

    /// Full-text MATCH condition
    pub fn matches(&self, pattern: impl Into<String>) -> Condition {
        self.condition(Operator::Match, Value::from(pattern.into()))
    }

    /// Column contains at least one of the given phrases
    pub fn contains_any<I, T>(&self, texts: I) -> ConditionTree
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        ConditionTree::for_any(
            texts
                .into_iter()
                .map(|text| self.contains(text.as_ref()).into())
                .collect(),
        )
    }

    /// Column contains none of the given phrases
    pub fn contains_none<I, T>(&self, texts: I) -> ConditionTree
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        ConditionTree::for_all(
            texts
                .into_iter()
                .map(|text| self.not_contains(text.as_ref()).into())
                .collect(),
        )
    }
}
