use super::{Flavor, Formatter, Params, ToSql};

use tabula_core::stmt::{Compare, CompareOp, Condition, Like, Value};

impl ToSql for &Condition {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            Condition::Like(like) => like.to_sql(f),
            Condition::Compare(compare) => compare.to_sql(f),
        }
    }
}

impl ToSql for &Like {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let pattern = Value::String(self.sql_pattern());

        fmt!(f, self.column(), " like ", &pattern);

        if self.is_escaped() {
            // MySQL string literals treat the backslash as an escape of their own.
            match f.serializer.flavor {
                Flavor::Mysql => fmt!(f, " escape '\\\\'"),
                Flavor::Sqlite => fmt!(f, " escape '\\'"),
            }
        }
    }
}

impl ToSql for &Compare {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.column(), " ", self.op(), " ", self.operand());
    }
}

impl ToSql for CompareOp {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(match self {
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::Equal => "=",
        })
    }
}
