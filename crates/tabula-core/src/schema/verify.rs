use super::Model;
use crate::{
    stmt::{Condition, Record},
    Error, Result,
};

use std::collections::HashSet;

impl Model {
    /// Validates the model's names.
    ///
    /// [`Builder::build`](super::Builder::build) runs this; call it directly
    /// on a model assembled from its public fields.
    pub fn verify(&self) -> Result<()> {
        verify_ident("table name", &self.table_name)?;
        verify_ident("primary key", &self.primary_key)?;

        let mut seen = HashSet::with_capacity(self.fields.len());

        for field in &self.fields {
            verify_ident("field name", &field.name)?;

            if field.name == self.primary_key {
                return Err(Error::invalid_schema(format!(
                    "field `{}` in `{}` reuses the primary key column name",
                    field.name, self.table_name
                )));
            }

            if !seen.insert(field.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate field `{}` in `{}`",
                    field.name, self.table_name
                )));
            }

            if let Some(target) = field.kind.link_target() {
                verify_ident("link target", target)?;
            }
        }

        Ok(())
    }

    /// Checks that every column set on `record` belongs to this model and
    /// holds a value its kind accepts.
    pub fn verify_record(&self, record: &Record) -> Result<()> {
        for (name, value) in record.iter() {
            let Some(column) = self.column(name) else {
                return Err(Error::invalid_schema(format!(
                    "record sets unknown column `{name}` of `{}`",
                    self.table_name
                )));
            };

            if !column.accepts(value) {
                return Err(Error::invalid_schema(format!(
                    "value {value:?} does not fit {} column `{name}` of `{}`",
                    column.describe(),
                    self.table_name
                )));
            }
        }

        Ok(())
    }

    /// Verifies `record` and converts its values to the form their columns
    /// store.
    pub fn normalize_record(&self, record: Record) -> Result<Record> {
        self.verify_record(&record)?;

        Ok(record
            .into_iter()
            .map(|(name, value)| {
                let value = match self.column(&name) {
                    Some(column) => column.normalize(value),
                    None => value,
                };
                (name, value)
            })
            .collect())
    }

    /// Checks that `condition` filters on a column of this model whose
    /// kind supports it.
    pub fn verify_condition(&self, condition: &Condition) -> Result<()> {
        let name = condition.column();

        let Some(column) = self.column(name) else {
            return Err(Error::incompatible_operand(
                name,
                format!("no such column in `{}`", self.table_name),
            ));
        };

        let (supported, operation) = match condition {
            Condition::Like(_) => (column.is_pattern_matchable(), "pattern match"),
            Condition::Compare(_) => (column.is_numeric_comparable(), "comparison"),
        };

        if !supported {
            return Err(Error::incompatible_operand(
                name,
                format!("{operation} on a {} column", column.describe()),
            ));
        }

        Ok(())
    }
}

/// Identifiers are emitted into DDL unquoted, so they are restricted to
/// `[A-Za-z_][A-Za-z0-9_]*`.
fn verify_ident(what: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();

    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::invalid_schema(format!(
            "{what} `{name}` is not a valid SQL identifier"
        )))
    }
}
