use super::{Compare, CompareOp, Condition, Like, Record, Value};

use std::cmp::Ordering;

impl Condition {
    /// Evaluates the condition against an in-memory record.
    ///
    /// Mirrors SQL semantics: NULL never matches, and an unset column
    /// reads as NULL.
    pub fn eval(&self, record: &Record) -> bool {
        match self {
            Condition::Like(like) => like.eval(record.value(like.column())),
            Condition::Compare(compare) => compare.eval(record.value(compare.column())),
        }
    }

    /// Keeps the records the condition selects, preserving their order.
    pub fn filter<'a, I>(&'a self, records: I) -> impl Iterator<Item = &'a Record> + 'a
    where
        I: IntoIterator<Item = &'a Record>,
        I::IntoIter: 'a,
    {
        records.into_iter().filter(move |record| self.eval(record))
    }
}

impl Like {
    fn eval(&self, value: &Value) -> bool {
        value
            .to_text()
            .is_some_and(|text| self.matches_text(&text))
    }
}

impl Compare {
    fn eval(&self, value: &Value) -> bool {
        let Some(ordering) = cmp_numeric(value, self.operand()) else {
            return false;
        };

        match self.op() {
            CompareOp::LessThan => ordering == Ordering::Less,
            CompareOp::GreaterThan => ordering == Ordering::Greater,
            CompareOp::Equal => ordering == Ordering::Equal,
        }
    }
}

/// Integers compare exactly; any float involved compares as `f64`.
/// Non-numeric values (including NULL) are unordered.
fn cmp_numeric(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::I64(lhs), Value::I64(rhs)) => Some(lhs.cmp(rhs)),
        _ => lhs.as_f64()?.partial_cmp(&rhs.as_f64()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, Model};
    use crate::stmt::MatchMode;

    fn client() -> Model {
        Model::builder("client")
            .primary_key("id")
            .field(Field::text("notes"))
            .field(Field::decimal("standard_rate", 2))
            .build()
            .unwrap()
    }

    #[test]
    fn prefix_match_on_string_ids() {
        let model = client();
        let records = [
            record! { "id" => "ab12" },
            record! { "id" => "ba12" },
            record! { "id" => "ab99" },
        ];

        let condition = Condition::like(&model, "id", "ab", MatchMode::PrefixOnly).unwrap();
        let ids: Vec<_> = condition
            .filter(&records)
            .map(|record| record.value("id").clone())
            .collect();

        assert_eq!(ids, [Value::from("ab12"), Value::from("ab99")]);
    }

    #[test]
    fn prefix_match_on_integer_ids() {
        let model = client();
        let condition = Condition::like(&model, "id", "42", MatchMode::PrefixOnly).unwrap();

        assert!(condition.eval(&record! { "id" => 42 }));
        assert!(condition.eval(&record! { "id" => 4217 }));
        assert!(!condition.eval(&record! { "id" => 142 }));
        assert!(!condition.eval(&record! { "id" => 4 }));
    }

    #[test]
    fn suffix_and_both_ends() {
        let model = client();
        let record = record! { "id" => 1, "notes" => "pays late" };

        let suffix = Condition::like(&model, "notes", "late", MatchMode::SuffixOnly).unwrap();
        let both = Condition::like(&model, "notes", "ys la", MatchMode::BothEnds).unwrap();
        let prefix = Condition::like(&model, "notes", "late", MatchMode::PrefixOnly).unwrap();

        assert!(suffix.eval(&record));
        assert!(both.eval(&record));
        assert!(!prefix.eval(&record));
    }

    #[test]
    fn like_is_case_sensitive() {
        let model = client();
        let condition = Condition::like(&model, "notes", "VIP", MatchMode::BothEnds).unwrap();

        assert!(condition.eval(&record! { "notes" => "a VIP client" }));
        assert!(!condition.eval(&record! { "notes" => "a vip client" }));
    }

    #[test]
    fn null_never_matches() {
        let model = client();
        let like = Condition::like(&model, "notes", "a", MatchMode::BothEnds).unwrap();
        let lt = Condition::lt(&model, "standard_rate", 100).unwrap();

        let record = record! { "id" => 1, "notes" => Value::Null };
        assert!(!like.eval(&record));
        assert!(!lt.eval(&record));
    }

    #[test]
    fn low_id_range() {
        let model = client();
        let condition = Condition::lt(&model, "id", 10).unwrap();

        assert!(condition.eval(&record! { "id" => 0 }));
        assert!(condition.eval(&record! { "id" => 9 }));
        assert!(!condition.eval(&record! { "id" => 10 }));
        assert!(!condition.eval(&record! { "id" => "ab12" }));
    }

    #[test]
    fn mixed_integer_and_float_compare() {
        let model = client();

        let gt = Condition::gt(&model, "standard_rate", 50).unwrap();
        assert!(gt.eval(&record! { "standard_rate" => 50.25 }));
        assert!(!gt.eval(&record! { "standard_rate" => 49.99 }));

        let eq = Condition::eq(&model, "standard_rate", 12.5).unwrap();
        assert!(eq.eval(&record! { "standard_rate" => 12.5 }));
        assert!(!eq.eval(&record! { "standard_rate" => 12 }));
    }
}
