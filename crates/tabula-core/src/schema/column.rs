use super::{Field, FieldKind};
use crate::stmt::Value;

/// A resolved column of a model: either the implicit primary key or a
/// declared field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Column<'a> {
    PrimaryKey(&'a str),
    Field(&'a Field),
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Column::PrimaryKey(name) => name,
            Column::Field(field) => &field.name,
        }
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self, Column::PrimaryKey(_))
    }

    pub fn kind(&self) -> Option<&'a FieldKind> {
        match *self {
            Column::PrimaryKey(_) => None,
            Column::Field(field) => Some(&field.kind),
        }
    }

    /// The primary key is an integer, so it always compares numerically.
    pub fn is_numeric_comparable(&self) -> bool {
        self.kind().map_or(true, FieldKind::is_numeric_comparable)
    }

    /// The primary key matches patterns on its decimal string form.
    pub fn is_pattern_matchable(&self) -> bool {
        self.kind().map_or(true, FieldKind::is_pattern_matchable)
    }

    /// True if `value` can be stored in this column. NULL fits any column.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.kind(), value) {
            (_, Value::Null) => true,
            (None, Value::I64(_)) => true,
            (Some(FieldKind::Decimal { .. }), Value::I64(_)) => true,
            (Some(FieldKind::Decimal { .. }), Value::F64(v)) => v.is_finite(),
            (Some(FieldKind::Link { .. }), Value::I64(_)) => true,
            (Some(FieldKind::Text | FieldKind::Date), Value::String(_)) => true,
            (Some(FieldKind::Boolean), Value::Bool(_)) => true,
            _ => false,
        }
    }

    /// Converts an accepted value to the form the column stores: decimals
    /// are always floats.
    pub fn normalize(&self, value: Value) -> Value {
        match (self.kind(), value) {
            (Some(FieldKind::Decimal { .. }), Value::I64(v)) => Value::F64(v as f64),
            (_, value) => value,
        }
    }

    /// Human-readable kind, for error messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self.kind() {
            None => "primary key",
            Some(kind) => kind.tag().as_str(),
        }
    }
}
