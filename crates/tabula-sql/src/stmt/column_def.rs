use crate::Catalog;

use tabula_core::{
    schema::{Field, Model},
    Error, Result,
};

/// Type clause of the implicit primary key column.
const PRIMARY_KEY_TYPE: &str = "int";

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,

    /// The rendered SQL type clause.
    pub ty: String,

    pub not_null: bool,

    pub unique: bool,

    /// Only set on the implicit primary key.
    pub auto_increment: bool,
}

impl ColumnDef {
    pub(crate) fn primary_key(model: &Model) -> ColumnDef {
        ColumnDef {
            name: model.primary_key.clone(),
            ty: PRIMARY_KEY_TYPE.to_string(),
            not_null: true,
            unique: false,
            auto_increment: true,
        }
    }

    pub(crate) fn from_field(model: &Model, field: &Field, catalog: &Catalog) -> Result<ColumnDef> {
        let Some(ty) = catalog.type_clause(&field.kind) else {
            return Err(Error::unsupported_field_kind(
                &model.table_name,
                &field.name,
                field.kind.tag().as_str(),
            ));
        };

        Ok(ColumnDef {
            name: field.name.clone(),
            ty,
            not_null: field.not_null,
            unique: field.unique,
            auto_increment: false,
        })
    }
}
