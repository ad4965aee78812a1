//! Boundary translation between core values and the query-layer payload
//!
//! The external consumer receives trees as `serde_json::Value` payloads with
//! stable operator/logic codes. Serialization falls out of the `Serialize`
//! derives; parsing back is done field by field so malformed input surfaces
//! the crate's own error kinds instead of raw serde errors.

use crate::condition::Condition;
use crate::error::{ConditionError, Result};
use crate::operator::{Logic, Operator};
use crate::tree::{ConditionTree, Node};
use crate::value::{ColumnRef, Scalar, SubQuery, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Serialize a condition, tree or node into its payload form
pub fn to_json<T: Serialize>(part: &T) -> Result<JsonValue> {
    serde_json::to_value(part).map_err(|err| ConditionError::InvalidArgument(err.to_string()))
}

/// Parse a payload child: an object with `children` is a tree, an object
/// with `operator` is a condition, anything else is not a valid child
pub fn node_from_json(json: &JsonValue) -> Result<Node> {
    if let Some(object) = json.as_object() {
        if object.contains_key("children") {
            return Ok(tree_from_json(json)?.into());
        }
        if object.contains_key("operator") {
            return Ok(condition_from_json(json)?.into());
        }
    }

    Err(ConditionError::UnexpectedChildType(describe(json)))
}

/// Parse a condition payload: `{column, operator, value}`
pub fn condition_from_json(json: &JsonValue) -> Result<Condition> {
    let object = json
        .as_object()
        .ok_or_else(|| ConditionError::UnexpectedChildType(describe(json)))?;

    let column = column_from_json(
        object
            .get("column")
            .ok_or_else(|| ConditionError::InvalidArgument("condition without column".to_string()))?,
    )?;

    let operator = object
        .get("operator")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| ConditionError::InvalidArgument("condition without operator".to_string()))?;

    let value = value_from_json(object.get("value").unwrap_or(&JsonValue::Null))?;

    Condition::new(column, Operator::from_code(operator)?, value)
}

/// Parse a tree payload: `{children, logic?, negated?}`
pub fn tree_from_json(json: &JsonValue) -> Result<ConditionTree> {
    let object = json
        .as_object()
        .ok_or_else(|| ConditionError::UnexpectedChildType(describe(json)))?;

    let children = object
        .get("children")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| ConditionError::UnexpectedChildType(describe(json)))?
        .iter()
        .map(node_from_json)
        .collect::<Result<Vec<Node>>>()?;

    let logic = match object.get("logic").and_then(JsonValue::as_str) {
        Some(code) => Logic::from_code(code)?,
        None => Logic::default(),
    };

    let negated = object
        .get("negated")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false);

    let tree = ConditionTree::with_logic(children, logic);
    Ok(if negated { tree.negative() } else { tree })
}

fn column_from_json(json: &JsonValue) -> Result<ColumnRef> {
    if let Some(name) = json.as_str() {
        return Ok(ColumnRef::Name(name.to_string()));
    }

    if let Some(object) = json.as_object() {
        let name = object.get("name").and_then(JsonValue::as_str);
        let expression = object.get("expression").and_then(JsonValue::as_str);
        if let (Some(name), Some(expression)) = (name, expression) {
            return Ok(ColumnRef::Expression {
                name: name.to_string(),
                expression: expression.to_string(),
            });
        }
    }

    Err(ConditionError::InvalidArgument(format!(
        "expected a column name or expression reference, got {}",
        describe(json)
    )))
}

fn value_from_json(json: &JsonValue) -> Result<Value> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Array(items) => Ok(Value::Sequence(
            items.iter().map(scalar_from_json).collect::<Result<Vec<Scalar>>>()?,
        )),
        JsonValue::Object(object) => {
            let raw = object
                .get("subquery")
                .and_then(JsonValue::as_str)
                .ok_or_else(|| {
                    ConditionError::InvalidArgument(format!(
                        "expected a sub-query reference, got {}",
                        describe(json)
                    ))
                })?;
            Ok(Value::Subquery(SubQuery::new(raw)))
        }
        _ => Ok(Value::Scalar(scalar_from_json(json)?)),
    }
}

fn scalar_from_json(json: &JsonValue) -> Result<Scalar> {
    match json {
        JsonValue::Bool(flag) => Ok(Scalar::Bool(*flag)),
        JsonValue::String(text) => Ok(Scalar::Str(text.clone())),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                Ok(Scalar::Int(int))
            } else {
                number
                    .as_f64()
                    .map(Scalar::Float)
                    .ok_or_else(|| ConditionError::InvalidArgument(format!("unrepresentable number {}", number)))
            }
        }
        _ => Err(ConditionError::InvalidArgument(format!(
            "expected a scalar, got {}",
            describe(json)
        ))),
    }
}

fn describe(json: &JsonValue) -> String {
    match json {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(_) => "bool".to_string(),
        JsonValue::Number(_) => "number".to_string(),
        JsonValue::String(_) => "string".to_string(),
        JsonValue::Array(_) => "array".to_string(),
        JsonValue::Object(object) => format!(
            "object with keys [{}]",
            object.keys().cloned().collect::<Vec<_>>().join(", ")
        ),
    }
}
