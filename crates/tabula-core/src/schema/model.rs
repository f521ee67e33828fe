use super::{Builder, Column, Field};

/// Describes one persisted entity type: its table, its implicit
/// auto-incrementing integer primary key, and its declared fields in
/// declaration order.
///
/// Models are built through [`Model::builder`], which verifies the names.
/// A model assembled directly from its fields is unchecked until
/// [`Model::verify`] is called on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the table the model is stored in.
    pub table_name: String,

    /// Name of the primary key column. Never listed among `fields`.
    pub primary_key: String,

    /// Declared fields, in declaration order.
    pub fields: Vec<Field>,
}

impl Model {
    pub fn builder(table_name: impl Into<String>) -> Builder {
        Builder::new(table_name)
    }

    /// The primary key name used when none is given: `<table_name>_id`.
    pub fn default_primary_key(table_name: &str) -> String {
        format!("{table_name}_id")
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolves a column name to the primary key or a declared field.
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        if name == self.primary_key {
            Some(Column::PrimaryKey(&self.primary_key))
        } else {
            self.field(name).map(Column::Field)
        }
    }

    pub fn primary_key_column(&self) -> Column<'_> {
        Column::PrimaryKey(&self.primary_key)
    }

    /// All columns: the primary key first, then the fields in declaration order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = Column<'_>> + '_ {
        std::iter::once(self.primary_key_column())
            .chain(self.fields.iter().map(Column::Field))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn client() -> Model {
        Model::builder("client")
            .primary_key("id")
            .field(Field::decimal("standard_rate", 2))
            .field(Field::text("notes"))
            .build()
            .unwrap()
    }

    #[test]
    fn columns_start_with_primary_key() {
        let model = client();
        let names: Vec<_> = model.columns().map(|column| column.name()).collect();
        assert_eq!(names, ["id", "standard_rate", "notes"]);
        assert!(model.columns().next().unwrap().is_primary_key());
    }

    #[test]
    fn resolve_columns() {
        let model = client();

        assert_eq!(model.column("id"), Some(Column::PrimaryKey("id")));

        let rate = model.column("standard_rate").unwrap();
        assert_eq!(rate.kind(), Some(&FieldKind::Decimal { precision: 2 }));
        assert!(rate.is_numeric_comparable());
        assert!(!rate.is_pattern_matchable());

        assert!(model.column("missing").is_none());
    }

    #[test]
    fn primary_key_defaults_from_table_name() {
        let model = Model::builder("invoice")
            .field(Field::link("client", "client"))
            .build()
            .unwrap();
        assert_eq!(model.primary_key, "invoice_id");
    }
}
