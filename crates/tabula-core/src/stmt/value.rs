use std::{borrow::Cow, cmp::Ordering, fmt};

/// A single column value, as held by a [`Record`](super::Record) or bound
/// as a statement parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit floating point value
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::I64(_) | Self::F64(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::I64(v) => Some(*v as f64),
            Self::F64(v) => Some(*v),
            _ => None,
        }
    }

    /// The string form a `LIKE` pattern is matched against.
    ///
    /// Integers use their decimal representation; other non-string values
    /// have no string form and never match a pattern.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(v) => Some(Cow::Borrowed(v)),
            Self::I64(v) => Some(Cow::Owned(v.to_string())),
            _ => None,
        }
    }

    /// Total order used to sort rows by a column, as SQLite orders mixed
    /// values: NULL first, then numbers compared numerically, then strings
    /// compared bytewise.
    pub fn cmp_sql(&self, other: &Value) -> Ordering {
        fn rank(value: &Value) -> u8 {
            match value {
                Value::Null => 0,
                Value::Bool(_) | Value::I64(_) | Value::F64(_) => 1,
                Value::String(_) => 2,
            }
        }

        match (self, other) {
            (Value::I64(lhs), Value::I64(rhs)) => lhs.cmp(rhs),
            (Value::String(lhs), Value::String(rhs)) => lhs.as_bytes().cmp(rhs.as_bytes()),
            _ if rank(self) == 1 && rank(other) == 1 => self
                .as_number()
                .partial_cmp(&other.as_number())
                .unwrap_or(Ordering::Equal),
            _ => rank(self).cmp(&rank(other)),
        }
    }

    fn as_number(&self) -> f64 {
        match self {
            Value::Bool(v) => f64::from(u8::from(*v)),
            _ => self.as_f64().unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::F64(v) => fmt::Display::fmt(v, f),
            Value::I64(v) => fmt::Display::fmt(v, f),
            Value::Null => f.write_str("null"),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}
