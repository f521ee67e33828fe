use super::{Compare, CompareOp, Like, MatchMode, Value};
use crate::{schema::Model, Result};

/// A declarative filter over one column of one model.
///
/// Conditions validate their operands against the model when built and
/// are immutable afterwards. The same condition can be serialized to SQL
/// or evaluated in memory with [`Condition::eval`]; both select the same
/// records.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Like(Like),
    Compare(Compare),
}

impl Condition {
    pub fn like(
        model: &Model,
        column: &str,
        pattern: impl Into<String>,
        mode: MatchMode,
    ) -> Result<Condition> {
        Like::new(model, column, pattern, mode).map(Condition::from)
    }

    pub fn like_escaped(
        model: &Model,
        column: &str,
        pattern: impl Into<String>,
        mode: MatchMode,
    ) -> Result<Condition> {
        Like::escaped(model, column, pattern, mode).map(Condition::from)
    }

    pub fn compare(
        model: &Model,
        column: &str,
        op: CompareOp,
        operand: impl Into<Value>,
    ) -> Result<Condition> {
        Compare::new(model, column, op, operand).map(Condition::from)
    }

    pub fn lt(model: &Model, column: &str, operand: impl Into<Value>) -> Result<Condition> {
        Condition::compare(model, column, CompareOp::LessThan, operand)
    }

    pub fn gt(model: &Model, column: &str, operand: impl Into<Value>) -> Result<Condition> {
        Condition::compare(model, column, CompareOp::GreaterThan, operand)
    }

    pub fn eq(model: &Model, column: &str, operand: impl Into<Value>) -> Result<Condition> {
        Condition::compare(model, column, CompareOp::Equal, operand)
    }

    /// The column the condition filters on.
    pub fn column(&self) -> &str {
        match self {
            Condition::Like(like) => like.column(),
            Condition::Compare(compare) => compare.column(),
        }
    }

    pub fn as_like(&self) -> Option<&Like> {
        match self {
            Condition::Like(like) => Some(like),
            _ => None,
        }
    }

    pub fn as_compare(&self) -> Option<&Compare> {
        match self {
            Condition::Compare(compare) => Some(compare),
            _ => None,
        }
    }
}
