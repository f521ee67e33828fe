use super::Value;

use indexmap::IndexMap;

/// One persisted entity: column values keyed by column name, in insertion
/// order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

static NULL: Value = Value::Null;

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    /// Sets `column` to `value`, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Record {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// The value of `column`; an unset column reads as NULL.
    pub fn value(&self, column: &str) -> &Value {
        self.get(column).unwrap_or(&NULL)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_columns_read_as_null() {
        let record = record! { "id" => 7 };
        assert_eq!(record.value("id"), &Value::I64(7));
        assert!(record.value("notes").is_null());
        assert!(record.get("notes").is_none());
    }

    #[test]
    fn keeps_insertion_order() {
        let record = Record::new()
            .with("notes", "late payer")
            .with("id", 3)
            .with("standard_rate", 12.5);
        let columns: Vec<_> = record.columns().collect();
        assert_eq!(columns, ["notes", "id", "standard_rate"]);
    }
}
