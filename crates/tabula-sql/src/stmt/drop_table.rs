use super::Statement;

use tabula_core::schema::Model;

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    /// Name of the table
    pub name: String,

    /// Whether or not to add an `if exists` clause
    pub if_exists: bool,
}

impl Statement {
    pub fn drop_table(model: &Model) -> Self {
        DropTable {
            name: model.table_name.clone(),
            if_exists: false,
        }
        .into()
    }

    pub fn drop_table_if_exists(model: &Model) -> Self {
        DropTable {
            name: model.table_name.clone(),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
