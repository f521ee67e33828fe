use super::{Comma, Formatter, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = Comma(&self.columns);

        fmt!(f, "select ", columns, " from ", &self.table, " where ", &self.filter);

        if let Some(order_by) = &self.order_by {
            fmt!(f, " order by ", order_by);
        }
    }
}
