mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::{CreateTable, TableElement};

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

pub use tabula_core::stmt::*;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
}

impl Statement {
    pub fn is_ddl(&self) -> bool {
        matches!(self, Statement::CreateTable(_) | Statement::DropTable(_))
    }

    pub fn as_create_table(&self) -> Option<&CreateTable> {
        match self {
            Statement::CreateTable(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Statement::Insert(stmt) => Some(stmt),
            _ => None,
        }
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Statement::Select(stmt) => Some(stmt),
            _ => None,
        }
    }
}
