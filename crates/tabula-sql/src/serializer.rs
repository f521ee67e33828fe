#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
pub use flavor::Flavor;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod condition;
mod create_table;
mod drop_table;
mod insert;
mod select;
mod statement;

use crate::{stmt::Statement, Catalog};

use tabula_core::{
    schema::Model,
    stmt::{Condition, Record, Value},
    Result,
};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes `stmt`, pushing every operand to `params` and emitting a
    /// placeholder in its place. The result is terminated by `;\n`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push_str(";\n");
        ret
    }

    /// Generates the `create table` DDL for `model`.
    pub fn create_table(&self, model: &Model, catalog: &Catalog) -> Result<String> {
        let stmt = Statement::create_table(model, catalog)?;
        let mut params = Vec::<Value>::new();
        let sql = self.serialize(&stmt, &mut params);
        debug_assert!(params.is_empty(), "DDL statements have no parameters");
        Ok(sql)
    }

    /// Serializes a `select` of the records of `model` matching `filter`,
    /// returning the SQL and its bound parameters.
    pub fn select(&self, model: &Model, filter: &Condition) -> Result<(String, Vec<Value>)> {
        let stmt = Statement::select(model, filter.clone())?;
        let mut params = Vec::<Value>::new();
        let sql = self.serialize(&stmt, &mut params);

        tracing::debug!(
            table = %model.table_name,
            params = params.len(),
            "serialized select statement"
        );

        Ok((sql, params))
    }

    /// Serializes an `insert` of `record`, returning the SQL and its bound
    /// parameters.
    pub fn insert(&self, model: &Model, record: &Record) -> Result<(String, Vec<Value>)> {
        let stmt = Statement::insert(model, record)?;
        let mut params = Vec::<Value>::new();
        let sql = self.serialize(&stmt, &mut params);
        Ok((sql, params))
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}
