use super::{ColumnDef, Statement};
use crate::Catalog;

use tabula_core::{schema::Model, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions and table constraints, in output order
    pub elements: Vec<TableElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableElement {
    Column(ColumnDef),

    /// `primary key (<column>)`
    PrimaryKey(String),
}

impl Statement {
    /// Builds the `create table` statement for `model`.
    ///
    /// Fails with an unsupported field kind error, before anything is
    /// produced, if any field's kind has no entry in `catalog`.
    pub fn create_table(model: &Model, catalog: &Catalog) -> Result<Self> {
        let mut elements = Vec::with_capacity(model.fields.len() + 2);

        elements.push(TableElement::Column(ColumnDef::primary_key(model)));
        elements.push(TableElement::PrimaryKey(model.primary_key.clone()));

        for field in &model.fields {
            elements.push(TableElement::Column(ColumnDef::from_field(
                model, field, catalog,
            )?));
        }

        tracing::debug!(
            table = %model.table_name,
            columns = model.fields.len() + 1,
            "built create table statement"
        );

        Ok(CreateTable {
            name: model.table_name.clone(),
            elements,
        }
        .into())
    }
}

impl CreateTable {
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDef> + '_ {
        self.elements.iter().filter_map(|element| match element {
            TableElement::Column(column) => Some(column),
            TableElement::PrimaryKey(_) => None,
        })
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
