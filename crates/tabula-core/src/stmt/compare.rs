use super::{Condition, Value};
use crate::{schema::Model, Error, Result};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    LessThan,
    GreaterThan,
    Equal,
}

/// An ordered comparison of a numeric-comparable column against a number.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    column: String,
    op: CompareOp,
    operand: Value,
}

impl Compare {
    /// Builds `<column> <op> <operand>`.
    ///
    /// The column must be the primary key, a decimal or a link, and the
    /// operand a finite number.
    pub fn new(
        model: &Model,
        column: &str,
        op: CompareOp,
        operand: impl Into<Value>,
    ) -> Result<Compare> {
        let operand = operand.into();

        let Some(target) = model.column(column) else {
            return Err(Error::incompatible_operand(
                column,
                format!("no such column in `{}`", model.table_name),
            ));
        };

        if !target.is_numeric_comparable() {
            return Err(Error::incompatible_operand(
                column,
                format!("comparison on a {} column", target.describe()),
            ));
        }

        match operand {
            Value::I64(_) => {}
            Value::F64(v) if v.is_finite() => {}
            _ => {
                return Err(Error::incompatible_operand(
                    column,
                    format!("operand {operand:?} is not a finite number"),
                ))
            }
        }

        Ok(Compare {
            column: column.to_string(),
            op,
            operand,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn operand(&self) -> &Value {
        &self.operand
    }
}

impl From<Compare> for Condition {
    fn from(value: Compare) -> Self {
        Self::Compare(value)
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompareOp::*;

        match self {
            LessThan => f.write_str("<"),
            GreaterThan => f.write_str(">"),
            Equal => f.write_str("="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use std_util::{assert_err, assert_ok};

    fn client() -> Model {
        Model::builder("client")
            .primary_key("id")
            .field(Field::text("notes"))
            .field(Field::decimal("standard_rate", 2))
            .field(Field::date("since"))
            .build()
            .unwrap()
    }

    #[test]
    fn numeric_columns_accept_numbers() {
        let model = client();

        let cmp = assert_ok!(Compare::new(&model, "id", CompareOp::LessThan, 10));
        assert_eq!(cmp.operand(), &Value::I64(10));
        assert_eq!(cmp.op().to_string(), "<");

        assert_ok!(Compare::new(
            &model,
            "standard_rate",
            CompareOp::GreaterThan,
            99.5
        ));
    }

    #[test]
    fn non_numeric_columns_rejected() {
        let model = client();

        for column in ["notes", "since"] {
            let err = assert_err!(Compare::new(&model, column, CompareOp::Equal, 1));
            assert!(err.is_incompatible_operand(), "column={column}");
        }
    }

    #[test]
    fn non_numeric_operands_rejected() {
        let model = client();

        let err = assert_err!(Compare::new(&model, "id", CompareOp::Equal, "10"));
        assert_eq!(
            err.to_string(),
            "incompatible operand for `id`: operand String(\"10\") is not a finite number"
        );

        assert_err!(Compare::new(&model, "id", CompareOp::Equal, Value::Null));
        assert_err!(Compare::new(&model, "id", CompareOp::Equal, f64::NAN));
    }
}
