use crate::{schema::Model, stmt::Condition, stmt::Record, Error, Result, Store};

use indexmap::IndexMap;

/// An in-memory [`Store`].
///
/// Records are held per table and selected by evaluating conditions
/// directly, with the same semantics as the SQL a condition serializes to.
/// Selections are ordered by primary key. Selected records carry every
/// column of the model, unset ones as NULL, the way a table row would.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    tables: IndexMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// Adds `record` to the table of `model`.
    ///
    /// The record must set the primary key and may only set columns the
    /// model declares, each to a value its kind accepts. Decimal values are
    /// stored as floats.
    pub fn insert(&mut self, model: &Model, record: Record) -> Result<()> {
        let record = model.normalize_record(record)?;

        if record.value(&model.primary_key).is_null() {
            return Err(Error::invalid_schema(format!(
                "record for `{}` does not set primary key `{}`",
                model.table_name, model.primary_key
            )));
        }

        self.tables
            .entry(model.table_name.clone())
            .or_default()
            .push(record);

        Ok(())
    }

    /// Every stored record of `model`'s table, in insertion order.
    pub fn records(&self, model: &Model) -> &[Record] {
        self.tables
            .get(&model.table_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Store for MemoryStore {
    fn select(&self, model: &Model, condition: &Condition) -> Result<Vec<Record>> {
        model.verify_condition(condition)?;

        let pk = model.primary_key.as_str();

        let mut matches: Vec<Record> = condition
            .filter(self.records(model))
            .map(|record| {
                model
                    .columns()
                    .map(|column| (column.name(), record.value(column.name()).clone()))
                    .collect()
            })
            .collect();

        matches.sort_by(|lhs, rhs| lhs.value(pk).cmp_sql(rhs.value(pk)));

        Ok(matches)
    }
}
