//! Single condition leaf: (column, operator, value)


use crate::error::{ConditionError, Result};
use crate::operator::{Logic, Operator};
use crate::tree::ConditionTree;
use crate::value::{ColumnRef, Value};
use rand::Rng;
use serde::Serialize;

/// A single immutable predicate over one column
///
/// Created through [`Condition::new`] (or the factories) and never mutated
/// afterwards; combinators always allocate new trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    column: ColumnRef,
    operator: Operator,
    value: Value,
}

impl Condition {
    /// Create a condition
    ///
    /// Fails with `InvalidArgument` if the operator is `Between` and the
    /// value is not exactly a 2-element sequence of numeric scalars.
    pub fn new(column: impl Into<ColumnRef>, operator: Operator, value: impl Into<Value>) -> Result<Condition> {
        let column = column.into();
        let value = value.into();

        if operator == Operator::Between {
            let valid = match &value {
                Value::Sequence(bounds) => bounds.len() == 2 && bounds.iter().all(|b| b.is_numeric()),
                _ => false,
            };
            if !valid {
                return Err(ConditionError::InvalidArgument(
                    "BETWEEN requires exactly two numeric bounds".to_string(),
                ));
            }
        }

        Ok(Condition { column, operator, value })
    }

    /// Internal constructor for operators whose values need no validation
    ///
    /// Callers must not pass `Operator::Between`; that path goes through
    /// [`Condition::new`] so the bounds check applies.
    pub(crate) fn unchecked(column: ColumnRef, operator: Operator, value: Value) -> Condition {
        debug_assert_ne!(operator, Operator::Between);
        Condition { column, operator, value }
    }

    /// Create a condition that holds for every row
    ///
    /// The query layer has no boolean-literal predicate, so this compares a
    /// constant expression against its own value. The expression name gets a
    /// random suffix so several always-true conditions can coexist in one
    /// generated query.
    pub fn always_true() -> Condition {
        Condition {
            column: literal_one_column(),
            operator: Operator::Equal,
            value: Value::from(1),
        }
    }

    /// Create a condition that fails for every row
    ///
    /// Same literal-one expression as [`Condition::always_true`], compared
    /// against a mismatching constant.
    pub fn always_false() -> Condition {
        Condition {
            column: literal_one_column(),
            operator: Operator::Equal,
            value: Value::from(0),
        }
    }

    pub fn column(&self) -> &ColumnRef {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Wrap this condition into a one-child tree with default (AND) logic
    pub fn to_tree(self) -> ConditionTree {
        ConditionTree::new(vec![self.into()])
    }

    /// Wrap this condition into a one-child tree with the given logic
    pub fn to_tree_with(self, logic: Logic) -> ConditionTree {
        ConditionTree::with_logic(vec![self.into()], logic)
    }

    /// Two-child OR tree of `[self, other]`
    pub fn or(self, other: Condition) -> ConditionTree {
        ConditionTree::with_logic(vec![self.into(), other.into()], Logic::Or)
    }

    /// Two-child AND tree of `[self, other]`
    pub fn and(self, other: Condition) -> ConditionTree {
        ConditionTree::with_logic(vec![self.into(), other.into()], Logic::And)
    }
}

/// Uniquely named constant expression evaluating to the literal `1`
fn literal_one_column() -> ColumnRef {
    let suffix: [u8; 10] = rand::thread_rng().gen();
    let hex: String = suffix.iter().map(|byte| format!("{:02x}", byte)).collect();

    ColumnRef::Expression {
        name: format!("TRUE_{}", hex),
        expression: "1".to_string(),
    }
}
