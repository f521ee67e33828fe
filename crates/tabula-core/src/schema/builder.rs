use super::{Field, Model};
use crate::Result;

/// Builds a [`Model`], verifying its names on [`Builder::build`].
#[derive(Debug)]
pub struct Builder {
    table_name: String,
    primary_key: Option<String>,
    fields: Vec<Field>,
}

impl Builder {
    pub fn new(table_name: impl Into<String>) -> Builder {
        Builder {
            table_name: table_name.into(),
            primary_key: None,
            fields: vec![],
        }
    }

    /// Sets the primary key column name. Defaults to `<table_name>_id`.
    pub fn primary_key(mut self, name: impl Into<String>) -> Builder {
        self.primary_key = Some(name.into());
        self
    }

    /// Appends a field. Fields keep their declaration order.
    pub fn field(mut self, field: Field) -> Builder {
        self.fields.push(field);
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Builder {
        self.fields.extend(fields);
        self
    }

    pub fn build(self) -> Result<Model> {
        let primary_key = self
            .primary_key
            .unwrap_or_else(|| Model::default_primary_key(&self.table_name));

        let model = Model {
            table_name: self.table_name,
            primary_key,
            fields: self.fields,
        };

        model.verify()?;
        Ok(model)
    }
}
