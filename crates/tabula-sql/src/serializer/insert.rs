use super::{Comma, Formatter, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(&self.columns);
        let values = Comma(&self.values);

        fmt!(f, "insert into ", &self.table, " (", columns, ") values (", values, ")");
    }
}
