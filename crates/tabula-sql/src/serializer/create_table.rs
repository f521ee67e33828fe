use super::{Delimited, Formatter, Params, ToSql};

use crate::stmt::{self, TableElement};

/// Definitions are one per line, indented by two spaces.
const ELEMENT_SEPARATOR: &str = ",\n  ";

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // SQLite declares the primary key inline on the auto-increment column.
        let inline_primary_key = f.serializer.is_sqlite();

        let elements = Delimited(
            self.elements.iter().filter(|element| {
                !(inline_primary_key && matches!(element, TableElement::PrimaryKey(_)))
            }),
            ELEMENT_SEPARATOR,
        );

        fmt!(f, "create table ", &self.name, " (\n  ", elements, "\n)");
    }
}

impl ToSql for &TableElement {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            TableElement::Column(column) => column.to_sql(f),
            TableElement::PrimaryKey(column) => fmt!(f, "primary key (", column, ")"),
        }
    }
}
