use super::{Formatter, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.auto_increment && f.serializer.is_sqlite() {
            fmt!(f, &self.name, " integer primary key autoincrement");
            return;
        }

        fmt!(f, &self.name, " ", &self.ty);

        if self.not_null {
            fmt!(f, " not null");
        }

        if self.auto_increment {
            fmt!(f, " auto_increment");
        }

        if self.unique {
            fmt!(f, " unique");
        }
    }
}
