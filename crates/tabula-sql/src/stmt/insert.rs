use super::{Record, Statement, Value};

use tabula_core::{schema::Model, Result};

/// `insert into <table> (<columns>) values (<values>)`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Target columns, in model order
    pub columns: Vec<String>,

    /// One value per column, bound as parameters
    pub values: Vec<Value>,
}

impl Statement {
    /// Inserts `record` into the table of `model`.
    ///
    /// Only the columns the record sets are written. Columns are emitted
    /// in model order regardless of the record's own order.
    pub fn insert(model: &Model, record: &Record) -> Result<Self> {
        model.verify_record(record)?;

        let (columns, values): (Vec<_>, Vec<_>) = model
            .columns()
            .filter_map(|column| {
                record
                    .get(column.name())
                    .map(|value| (column.name().to_string(), value.clone()))
            })
            .unzip();

        Ok(Insert {
            table: model.table_name.clone(),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
