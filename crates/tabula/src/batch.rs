//! Partitioned processing of a table's records.
//!
//! A [`BatchKey`] names one slice of a table: either every record whose
//! primary key starts with a 2-character prefix, or the low range of keys
//! below 10 that a prefix cannot address. A [`BatchSelector`] resolves the
//! key to a [`Condition`], fetches the slice from a [`Store`] and hands the
//! records to a caller action one at a time.

use crate::{
    schema::Model,
    stmt::{Condition, MatchMode, Record, ESCAPE_CHAR},
    Error, Result, Store,
};

use std::{fmt, str::FromStr};

/// Key of the low range partition.
const LOW_RANGE_KEY: &str = "0";

/// Upper bound (exclusive) of the low range partition.
const LOW_RANGE_LIMIT: i64 = 10;

/// Length of a prefix key, in characters.
const PREFIX_LEN: usize = 2;

/// Identifies one partition of a table's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchKey {
    /// Primary keys starting with the given 2 characters.
    Prefix(String),

    /// Primary keys below 10.
    LowRange,
}

impl BatchKey {
    /// The condition selecting this partition of `model`.
    pub fn condition(&self, model: &Model) -> Result<Condition> {
        match self {
            BatchKey::Prefix(prefix) => Condition::like(
                model,
                &model.primary_key,
                prefix.as_str(),
                MatchMode::PrefixOnly,
            ),
            BatchKey::LowRange => Condition::lt(model, &model.primary_key, LOW_RANGE_LIMIT),
        }
    }
}

impl FromStr for BatchKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<BatchKey> {
        if s == LOW_RANGE_KEY {
            return Ok(BatchKey::LowRange);
        }

        let is_wildcard = |c: char| matches!(c, '%' | '_') || c == ESCAPE_CHAR;

        if s.chars().count() == PREFIX_LEN && !s.contains(is_wildcard) {
            Ok(BatchKey::Prefix(s.to_string()))
        } else {
            Err(Error::invalid_batch_key(s))
        }
    }
}

impl fmt::Display for BatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchKey::Prefix(prefix) => f.write_str(prefix),
            BatchKey::LowRange => f.write_str(LOW_RANGE_KEY),
        }
    }
}

/// Selects partitions of one model's records from a store.
#[derive(Debug)]
pub struct BatchSelector<'a, S> {
    model: &'a Model,
    store: S,
}

impl<'a, S: Store> BatchSelector<'a, S> {
    pub fn new(model: &'a Model, store: S) -> BatchSelector<'a, S> {
        BatchSelector { model, store }
    }

    pub fn model(&self) -> &Model {
        self.model
    }

    /// Fetches the records of the partition named by `key`, in store
    /// order.
    ///
    /// Nothing is fetched if `key` is not a valid batch key.
    pub fn select_batch(&self, key: &str) -> Result<Vec<Record>> {
        let key: BatchKey = key.parse()?;
        let condition = key.condition(self.model)?;

        tracing::debug!(
            table = %self.model.table_name,
            %key,
            ?condition,
            "resolved batch key"
        );

        self.store.select(self.model, &condition)
    }

    /// Runs `action` once per record of the partition named by `key`, in
    /// store order, returning how many records were processed.
    ///
    /// The first failing action stops the iteration. Its error is returned
    /// wrapped in an entity action failure naming the record's primary key.
    pub fn process<F>(&self, key: &str, mut action: F) -> Result<usize>
    where
        F: FnMut(&Record) -> Result<()>,
    {
        let records = self.select_batch(key)?;
        let table = &self.model.table_name;

        for (processed, record) in records.iter().enumerate() {
            let pk = record.value(&self.model.primary_key);

            tracing::trace!(table = %table, %pk, "processing record");

            if let Err(err) = action(record) {
                tracing::warn!(
                    table = %table,
                    %pk,
                    processed,
                    error = %err,
                    "entity action failed"
                );
                return Err(err.context(Error::entity_action_failed(table, pk.to_string())));
            }
        }

        Ok(records.len())
    }
}
