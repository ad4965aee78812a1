//! Test-only row evaluator for truth-table checks
//!
//! Models how a SQL engine would judge a condition tree against one row:
//! a NULL column fails every plain comparison, IS NULL/IS NOT NULL inspect
//! presence, and a negated tree evaluates to the complement of its body.
//! The crate itself performs no query execution; this module exists so the
//! tests can compare built trees against expected boolean semantics.

use crate::condition::Condition;
use crate::operator::{Logic, Operator};
use crate::tree::{ConditionTree, Node};
use crate::value::{ColumnRef, Scalar, Value};
use regex::Regex;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One sample row: column values (None = NULL) plus registered sub-query
/// result sets keyed by their raw text
#[derive(Debug, Clone, Default)]
pub(crate) struct Row {
    values: HashMap<String, Option<Scalar>>,
    subqueries: HashMap<String, Vec<Scalar>>,
}

impl Row {
    pub(crate) fn new() -> Row {
        Row::default()
    }

    pub(crate) fn set(mut self, column: &str, value: Option<Scalar>) -> Row {
        self.values.insert(column.to_string(), value);
        self
    }

    pub(crate) fn with_subquery(mut self, raw: &str, members: Vec<Scalar>) -> Row {
        self.subqueries.insert(raw.to_string(), members);
        self
    }

    fn column_value(&self, column: &ColumnRef) -> Option<Scalar> {
        match column {
            ColumnRef::Name(name) => self.values.get(name).cloned().flatten(),
            // Constant expressions evaluate to their own literal; only
            // integer literals appear in practice (the always-true/false
            // factories).
            ColumnRef::Expression { expression, .. } => match expression.parse::<i64>() {
                Ok(int) => Some(Scalar::Int(int)),
                Err(_) => Some(Scalar::Str(expression.clone())),
            },
        }
    }
}

pub(crate) fn eval_node(node: &Node, row: &Row) -> bool {
    match node {
        Node::Condition(condition) => eval_condition(condition, row),
        Node::Tree(tree) => eval_tree(tree, row),
    }
}

pub(crate) fn eval_tree(tree: &ConditionTree, row: &Row) -> bool {
    let result = match tree.logic() {
        Logic::And => tree.children().iter().all(|child| eval_node(child, row)),
        Logic::Or => tree.children().iter().any(|child| eval_node(child, row)),
    };

    if tree.is_negated() {
        !result
    } else {
        result
    }
}

pub(crate) fn eval_condition(condition: &Condition, row: &Row) -> bool {
    let column = row.column_value(condition.column());

    // Presence checks look at the column alone.
    if condition.value().is_null() {
        return match condition.operator() {
            Operator::Equal => column.is_none(),
            Operator::NotEqual => column.is_some(),
            _ => false,
        };
    }

    // EXISTS does not look at the column at all.
    if condition.operator() == Operator::Exists {
        return match condition.value() {
            Value::Subquery(query) => row
                .subqueries
                .get(query.raw())
                .map(|members| !members.is_empty())
                .unwrap_or(false),
            _ => false,
        };
    }

    // A NULL column fails every remaining comparison.
    let Some(column) = column else {
        return false;
    };

    match (condition.operator(), condition.value()) {
        (Operator::Equal, Value::Scalar(v)) => scalars_equal(&column, v),
        (Operator::NotEqual, Value::Scalar(v)) => !scalars_equal(&column, v),
        (Operator::Less, Value::Scalar(v)) => compare(&column, v) == Some(Ordering::Less),
        (Operator::LessOrEqual, Value::Scalar(v)) => {
            matches!(compare(&column, v), Some(Ordering::Less | Ordering::Equal))
        }
        (Operator::Greater, Value::Scalar(v)) => compare(&column, v) == Some(Ordering::Greater),
        (Operator::GreaterOrEqual, Value::Scalar(v)) => {
            matches!(compare(&column, v), Some(Ordering::Greater | Ordering::Equal))
        }
        (Operator::In, Value::Sequence(items)) => {
            items.iter().any(|item| scalars_equal(&column, item))
        }
        (Operator::In, Value::Subquery(query)) => row
            .subqueries
            .get(query.raw())
            .map(|members| members.iter().any(|member| scalars_equal(&column, member)))
            .unwrap_or(false),
        (Operator::Between, Value::Sequence(bounds)) if bounds.len() == 2 => {
            matches!(
                compare(&column, &bounds[0]),
                Some(Ordering::Greater | Ordering::Equal)
            ) && matches!(
                compare(&column, &bounds[1]),
                Some(Ordering::Less | Ordering::Equal)
            )
        }
        (Operator::Like, Value::Scalar(Scalar::Str(pattern))) => like_matches(&column, pattern),
        (Operator::Match, Value::Scalar(Scalar::Str(pattern))) => {
            // Rough full-text approximation: every bare word must appear.
            let Scalar::Str(text) = &column else { return false };
            pattern
                .split_whitespace()
                .map(|word| word.trim_matches(|c| c == '+' || c == '*' || c == '-'))
                .filter(|word| !word.is_empty())
                .all(|word| text.contains(word))
        }
        _ => false,
    }
}

fn scalars_equal(a: &Scalar, b: &Scalar) -> bool {
    compare(a, b) == Some(Ordering::Equal)
}

fn compare(a: &Scalar, b: &Scalar) -> Option<Ordering> {
    match (a, b) {
        (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
        (Scalar::Float(a), Scalar::Float(b)) => a.partial_cmp(b),
        (Scalar::Int(a), Scalar::Float(b)) => (*a as f64).partial_cmp(b),
        (Scalar::Float(a), Scalar::Int(b)) => a.partial_cmp(&(*b as f64)),
        (Scalar::Str(a), Scalar::Str(b)) => Some(a.cmp(b)),
        (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

fn like_matches(column: &Scalar, pattern: &str) -> bool {
    let text = match column {
        Scalar::Str(text) => text.clone(),
        Scalar::Int(int) => int.to_string(),
        Scalar::Float(float) => float.to_string(),
        Scalar::Bool(_) => return false,
    };

    let mut regex_pattern = String::from("^");
    for c in pattern.chars() {
        match c {
            '%' => regex_pattern.push_str(".*"),
            '_' => regex_pattern.push('.'),
            other => regex_pattern.push_str(&regex::escape(&other.to_string())),
        }
    }
    regex_pattern.push('$');

    Regex::new(&regex_pattern)
        .map(|regex| regex.is_match(&text))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SubQuery;

    fn row(value: Option<Scalar>) -> Row {
        Row::new().set("COL", value)
    }

    fn cond(operator: Operator, value: impl Into<Value>) -> Condition {
        Condition::new("COL", operator, value).unwrap()
    }

    #[test]
    fn test_null_checks() {
        assert!(eval_condition(&cond(Operator::Equal, Value::Null), &row(None)));
        assert!(!eval_condition(&cond(Operator::Equal, Value::Null), &row(Some(Scalar::Int(1)))));
        assert!(eval_condition(&cond(Operator::NotEqual, Value::Null), &row(Some(Scalar::Int(1)))));
        assert!(!eval_condition(&cond(Operator::NotEqual, Value::Null), &row(None)));
    }

    #[test]
    fn test_null_column_fails_plain_comparisons() {
        for operator in [
            Operator::Equal,
            Operator::NotEqual,
            Operator::Less,
            Operator::Greater,
        ] {
            assert!(
                !eval_condition(&cond(operator, 5), &row(None)),
                "operator: {:?}",
                operator
            );
        }
    }

    #[test]
    fn test_comparisons() {
        let five = row(Some(Scalar::Int(5)));

        assert!(eval_condition(&cond(Operator::Equal, 5), &five));
        assert!(eval_condition(&cond(Operator::Less, 10), &five));
        assert!(eval_condition(&cond(Operator::GreaterOrEqual, 5), &five));
        assert!(!eval_condition(&cond(Operator::Greater, 5), &five));
        assert!(eval_condition(&cond(Operator::Less, 5.5), &five));
    }

    #[test]
    fn test_in_and_between() {
        let five = row(Some(Scalar::Int(5)));

        assert!(eval_condition(&cond(Operator::In, Value::sequence([1, 5])), &five));
        assert!(!eval_condition(&cond(Operator::In, Value::sequence([1, 2])), &five));
        assert!(eval_condition(&cond(Operator::Between, Value::sequence([1, 10])), &five));
        assert!(!eval_condition(&cond(Operator::Between, Value::sequence([6, 10])), &five));
        // Reversed bounds match nothing
        assert!(!eval_condition(&cond(Operator::Between, Value::sequence([10, 1])), &five));
    }

    #[test]
    fn test_like_wildcards() {
        let ann = row(Some(Scalar::Str("joanna".to_string())));

        assert!(eval_condition(&cond(Operator::Like, "%ann%"), &ann));
        assert!(eval_condition(&cond(Operator::Like, "jo%"), &ann));
        assert!(eval_condition(&cond(Operator::Like, "%nna"), &ann));
        assert!(eval_condition(&cond(Operator::Like, "jo_nna"), &ann));
        assert!(!eval_condition(&cond(Operator::Like, "ann"), &ann));
        // Regex metacharacters in the pattern are literal
        assert!(!eval_condition(&cond(Operator::Like, "j.anna"), &ann));
    }

    #[test]
    fn test_subquery_membership() {
        let raw = "SELECT USER_ID FROM b_group_member";
        let row = row(Some(Scalar::Int(7)))
            .with_subquery(raw, vec![Scalar::Int(7), Scalar::Int(9)]);

        assert!(eval_condition(&cond(Operator::In, SubQuery::new(raw)), &row));
        assert!(eval_condition(&cond(Operator::Exists, SubQuery::new(raw)), &row));

        let empty = Row::new().set("COL", Some(Scalar::Int(7))).with_subquery(raw, vec![]);
        assert!(!eval_condition(&cond(Operator::In, SubQuery::new(raw)), &empty));
        assert!(!eval_condition(&cond(Operator::Exists, SubQuery::new(raw)), &empty));
    }

    #[test]
    fn test_tree_logic_and_negation() {
        let five = row(Some(Scalar::Int(5)));

        let both = cond(Operator::Greater, 1).and(cond(Operator::Less, 10));
        assert!(eval_tree(&both, &five));
        assert!(!eval_tree(&both.clone().negative(), &five));

        let either = cond(Operator::Greater, 100).or(cond(Operator::Less, 10));
        assert!(eval_tree(&either, &five));

        let neither = cond(Operator::Greater, 100).or(cond(Operator::Less, 0));
        assert!(!eval_tree(&neither, &five));
    }

    #[test]
    fn test_always_factories_evaluate_on_any_row() {
        let rows = [row(None), row(Some(Scalar::Int(42)))];

        for sample in &rows {
            assert!(eval_condition(&Condition::always_true(), sample));
            assert!(!eval_condition(&Condition::always_false(), sample));
            assert!(eval_tree(&ConditionTree::always_true(), sample));
            assert!(!eval_tree(&ConditionTree::always_false(), sample));
        }
    }
}
