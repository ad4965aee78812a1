//! Condition Core - SQL-style filter condition tree builder
//!
//! Composes column-level predicates (equality, comparison, pattern match,
//! set and sub-query membership) into immutable trees combined with AND/OR
//! logic, ready to hand to a query executor. The builder bakes SQL
//! NULL-awareness into each comparison so "not equals" truly means
//! "different or absent". Trees can be collapsed back into a single
//! condition under strict or extract-first rules.
//!
//! ```
//! use condition_core::{Column, ConditionTree};
//!
//! let adults_named_ann = ConditionTree::for_all(vec![
//!     Column::of("AGE").between_numbers(18, 65)?.into(),
//!     Column::of("NAME").contains("ann").into(),
//! ]);
//!
//! assert!(!adults_named_ann.has_single_condition());
//! # Ok::<(), condition_core::ConditionError>(())
//! ```
//!
//! Query execution, SQL rendering and schema introspection live in the
//! external query layer; this crate only builds and serializes the trees.

pub mod column;
pub mod condition;
pub mod error;
pub mod operator;
pub mod payload;
pub mod tree;
pub mod value;

#[cfg(test)]
pub(crate) mod testkit;

pub use crate::column::Column;
pub use crate::condition::Condition;
pub use crate::error::{ConditionError, Result};
pub use crate::operator::{Logic, Operator, OrderDirection};
pub use crate::tree::{ConditionTree, Node};
pub use crate::value::{ColumnRef, Scalar, SubQuery, Value};
