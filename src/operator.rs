//! Comparison operators, tree logic and order directions

use crate::error::{ConditionError, Result};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operators for a single condition
///
/// The string codes are the stable representation handed to the external
/// query layer; `code`/`from_code` round-trip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    In,
    Between,
    Like,
    Match,
    Exists,
}

impl Operator {
    /// Stable string code used for external serialization
    pub fn code(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::Less => "less",
            Operator::LessOrEqual => "less_or_equal",
            Operator::Greater => "greater",
            Operator::GreaterOrEqual => "greater_or_equal",
            Operator::In => "in",
            Operator::Between => "between",
            Operator::Like => "like",
            Operator::Match => "match",
            Operator::Exists => "exists",
        }
    }

    /// Parse a stable string code back into an operator
    pub fn from_code(code: &str) -> Result<Operator> {
        Ok(match code {
            "equal" => Operator::Equal,
            "not_equal" => Operator::NotEqual,
            "less" => Operator::Less,
            "less_or_equal" => Operator::LessOrEqual,
            "greater" => Operator::Greater,
            "greater_or_equal" => Operator::GreaterOrEqual,
            "in" => Operator::In,
            "between" => Operator::Between,
            "like" => Operator::Like,
            "match" => Operator::Match,
            "exists" => Operator::Exists,
            _ => return Err(ConditionError::UnknownOperatorToken(code.to_string())),
        })
    }

    /// Map a short legacy operator token to an operator
    ///
    /// The empty token means "equal, or IN when the value is a sequence".
    /// The negated `!%`/`!@` forms are not handled here; they are resolved
    /// one level up where a negated tree can be produced.
    pub fn from_token(token: &str, value: &Value) -> Result<Operator> {
        Ok(match token {
            "" => {
                if matches!(value, Value::Sequence(_)) {
                    Operator::In
                } else {
                    Operator::Equal
                }
            }
            "=" => Operator::Equal,
            "!" | "!=" => Operator::NotEqual,
            "<" => Operator::Less,
            "<=" => Operator::LessOrEqual,
            ">" => Operator::Greater,
            ">=" => Operator::GreaterOrEqual,
            "@" => Operator::In,
            "><" => Operator::Between,
            "%" => Operator::Like,
            _ => return Err(ConditionError::UnknownOperatorToken(token.to_string())),
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// AND/OR combinator for a condition tree node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// Stable string code used for external serialization
    pub fn code(self) -> &'static str {
        match self {
            Logic::And => "and",
            Logic::Or => "or",
        }
    }

    /// Parse a stable string code back into a logic combinator
    pub fn from_code(code: &str) -> Result<Logic> {
        match code {
            "and" => Ok(Logic::And),
            "or" => Ok(Logic::Or),
            _ => Err(ConditionError::UnknownOperatorToken(code.to_string())),
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sort direction used by the directed comparison helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl FromStr for OrderDirection {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<OrderDirection> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            _ => Err(ConditionError::UnsupportedDirection(s.to_string())),
        }
    }
}
