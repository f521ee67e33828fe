use super::{Formatter, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::DropTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "drop table ");

        if self.if_exists {
            fmt!(f, "if exists ");
        }

        fmt!(f, &self.name);
    }
}
