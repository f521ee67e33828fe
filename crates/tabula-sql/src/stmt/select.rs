use super::{Condition, Statement};

use tabula_core::{schema::Model, Result};

/// `select <columns> from <table> where <filter> order by <primary key>`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    /// Selected columns: the primary key, then the fields in declaration order
    pub columns: Vec<String>,

    pub filter: Condition,

    pub order_by: Option<String>,
}

impl Statement {
    /// Selects every column of the records of `model` matching `filter`,
    /// ordered by primary key.
    pub fn select(model: &Model, filter: Condition) -> Result<Self> {
        model.verify_condition(&filter)?;

        Ok(Select {
            table: model.table_name.clone(),
            columns: model
                .columns()
                .map(|column| column.name().to_string())
                .collect(),
            filter,
            order_by: Some(model.primary_key.clone()),
        }
        .into())
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
