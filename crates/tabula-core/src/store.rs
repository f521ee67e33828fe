use crate::{schema::Model, stmt::Condition, stmt::Record, Result};

/// A backing collection of persisted records.
///
/// Stores own their connection and transaction boundaries; callers hand
/// them a model and a condition and get back the matching records in the
/// store's order. Implementations block until the fetch completes.
pub trait Store {
    fn select(&self, model: &Model, condition: &Condition) -> Result<Vec<Record>>;
}

impl<S: Store + ?Sized> Store for &S {
    fn select(&self, model: &Model, condition: &Condition) -> Result<Vec<Record>> {
        (**self).select(model, condition)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn select(&self, model: &Model, condition: &Condition) -> Result<Vec<Record>> {
        (**self).select(model, condition)
    }
}
