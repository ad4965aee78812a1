//! Condition tree: ordered children combined with AND/OR logic
//!
//! Trees are immutable values built bottom-up from leaves. Appending and
//! negating return new trees; children may be freely shared across trees
//! since nothing is mutated after construction.


use crate::condition::Condition;
use crate::error::{ConditionError, Result};
use crate::operator::{Logic, Operator};
use crate::value::{ColumnRef, Value};
use serde::Serialize;
use smallvec::SmallVec;

/// A child of a condition tree: either a leaf condition or a nested tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Condition(Condition),
    Tree(Box<ConditionTree>),
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Node {
        Node::Condition(condition)
    }
}

impl From<ConditionTree> for Node {
    fn from(tree: ConditionTree) -> Node {
        Node::Tree(Box::new(tree))
    }
}

/// An ordered list of conditions/sub-trees plus a logic combinator and a
/// negation flag
///
/// Most trees hold one or two children (a comparison plus its NULL guard),
/// so the child list is inline-allocated for that case.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConditionTree {
    children: SmallVec<[Node; 2]>,
    logic: Logic,
    negated: bool,
}

impl ConditionTree {
    /// Create a tree with default (AND) logic
    pub fn new(children: Vec<Node>) -> ConditionTree {
        ConditionTree {
            children: children.into(),
            logic: Logic::default(),
            negated: false,
        }
    }

    /// Create a tree with an explicit logic combinator
    pub fn with_logic(children: Vec<Node>, logic: Logic) -> ConditionTree {
        ConditionTree {
            children: children.into(),
            logic,
            negated: false,
        }
    }

    /// Tree requiring all of the given children to hold
    pub fn for_all(children: Vec<Node>) -> ConditionTree {
        ConditionTree::with_logic(children, Logic::And)
    }

    /// Tree requiring at least one of the given children to hold
    pub fn for_any(children: Vec<Node>) -> ConditionTree {
        ConditionTree::with_logic(children, Logic::Or)
    }

    /// One-child tree that holds for every row
    pub fn always_true() -> ConditionTree {
        Condition::always_true().to_tree()
    }

    /// One-child tree that fails for every row
    pub fn always_false() -> ConditionTree {
        Condition::always_false().to_tree()
    }

    /// Build a condition, or a negated one-child tree for the `!%`/`!@`
    /// tokens which have no operator of their own
    ///
    /// Accepts the short legacy operator tokens: `""` (equal, or IN for a
    /// sequence value), `=`, `!`, `!=`, `<`, `<=`, `>`, `>=`, `@`, `><`,
    /// `%`, `!%`, `!@`. Anything else fails with `UnknownOperatorToken`.
    pub fn node_from_token(
        column: impl Into<ColumnRef>,
        token: &str,
        value: impl Into<Value>,
    ) -> Result<Node> {
        let column = column.into();
        let value = value.into();

        // No negated LIKE/IN operator exists, so those become a negated tree
        // around the positive form.
        if token.starts_with("!%") || token.starts_with("!@") {
            let operator = Operator::from_token(&token[1..], &value)?;
            let condition = Condition::new(column, operator, value)?;
            return Ok(condition.to_tree().negative().into());
        }

        let operator = Operator::from_token(token, &value)?;
        Ok(Condition::new(column, operator, value)?.into())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn logic(&self) -> Logic {
        self.logic
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Tree equal to the receiver plus one appended child
    pub fn where_also(mut self, child: impl Into<Node>) -> ConditionTree {
        self.children.push(child.into());
        self
    }

    /// Tree equal to the receiver plus the given children appended, in order
    pub fn where_all(mut self, children: impl IntoIterator<Item = Node>) -> ConditionTree {
        self.children.extend(children);
        self
    }

    /// Tree identical to the receiver with the negation flag flipped
    ///
    /// Does not recurse into children; negation wraps, it does not
    /// distribute.
    pub fn negative(mut self) -> ConditionTree {
        self.negated = !self.negated;
        self
    }

    /// Whether the tree holds exactly one simple condition
    pub fn has_single_condition(&self) -> bool {
        self.to_condition().is_ok()
    }

    /// Collapse the tree into its single condition
    ///
    /// Fails with `EmptyTree` for a childless tree and `AmbiguousTree` when
    /// more than one child is present. Nested one-child wrapper trees are
    /// unwrapped recursively. The collapse is purely structural: negation
    /// flags and logic along the way are ignored, so a negated wrapper
    /// around one condition collapses to the unnegated inner condition.
    pub fn to_condition(&self) -> Result<Condition> {
        collapse(self, true)
    }

    /// Extract the first condition of the tree
    ///
    /// Same traversal as [`ConditionTree::to_condition`] but a tree with
    /// multiple children yields its first child instead of failing. This is
    /// an extraction, not a semantic collapse; only the outermost level is
    /// lenient, nested trees still must hold a single condition.
    pub fn extract_first_condition(&self) -> Result<Condition> {
        collapse(self, false)
    }
}

fn collapse(tree: &ConditionTree, strict: bool) -> Result<Condition> {
    let candidate = match tree.children.len() {
        0 => return Err(ConditionError::EmptyTree),
        1 => &tree.children[0],
        _ if strict => return Err(ConditionError::AmbiguousTree),
        _ => &tree.children[0],
    };

    match candidate {
        Node::Condition(condition) => Ok(condition.clone()),
        Node::Tree(inner) => collapse(inner, true),
    }
}
