mod value;
pub(crate) use value::Value;

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tabula_core::{
    schema::Model,
    stmt::{Condition, Record, Value as CoreValue},
    Error, Result, Store,
};
use tabula_sql::{self as sql, Catalog};

/// A [`Store`] backed by a SQLite database.
///
/// Tables are provisioned from models with [`Sqlite::create_table`] using
/// the SQLite flavor of the generated DDL. `LIKE` runs case sensitively so
/// that SQL selections agree with in-memory evaluation.
#[derive(Debug)]
pub struct Sqlite {
    connection: Connection,
    location: Location,
}

#[derive(Debug, Clone, PartialEq)]
enum Location {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::init(connection, Location::InMemory)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(Error::driver_operation_failed)?;
        Self::init(connection, Location::File(path.to_path_buf()))
    }

    fn init(connection: Connection, location: Location) -> Result<Self> {
        connection
            .execute_batch("PRAGMA case_sensitive_like = ON;")
            .map_err(Error::driver_operation_failed)?;

        Ok(Self {
            connection,
            location,
        })
    }

    /// The database file, or `None` for an in-memory database.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::InMemory => None,
        }
    }

    /// Creates the table for `model`, mapping field kinds through `catalog`.
    pub fn create_table(&self, model: &Model, catalog: &Catalog) -> Result<()> {
        let sql = sql::Serializer::sqlite().create_table(model, catalog)?;
        self.execute(&sql, Vec::new())?;
        Ok(())
    }

    /// Drops the table for `model` if it exists.
    pub fn drop_table(&self, model: &Model) -> Result<()> {
        let mut params = Vec::<CoreValue>::new();
        let sql = sql::Serializer::sqlite()
            .serialize(&sql::Statement::drop_table_if_exists(model), &mut params);
        self.execute(&sql, params)?;
        Ok(())
    }

    /// Inserts `record` into the table of `model`.
    ///
    /// A record without a primary key is assigned the next one; the key of
    /// the inserted row is returned either way.
    pub fn insert(&self, model: &Model, record: &Record) -> Result<i64> {
        let (sql, params) = sql::Serializer::sqlite().insert(model, record)?;
        self.execute(&sql, params)?;
        Ok(self.connection.last_insert_rowid())
    }

    fn execute(&self, sql: &str, params: Vec<CoreValue>) -> Result<usize> {
        tracing::trace!(sql = %sql, params = params.len(), "executing statement");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        self.connection
            .prepare_cached(sql.trim_end())
            .and_then(|mut stmt| stmt.execute(rusqlite::params_from_iter(params.iter())))
            .map_err(Error::driver_operation_failed)
    }
}

impl Store for Sqlite {
    fn select(&self, model: &Model, condition: &Condition) -> Result<Vec<Record>> {
        let (sql, params) = sql::Serializer::sqlite().select(model, condition)?;

        tracing::trace!(sql = %sql, params = params.len(), "executing query");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut stmt = self
            .connection
            .prepare_cached(sql.trim_end())
            .map_err(Error::driver_operation_failed)?;

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut record = Record::new();

                    for (index, column) in model.columns().enumerate() {
                        let value = Value::from_sql(row, index, column)?;
                        record.set(column.name(), value.into_inner());
                    }

                    ret.push(record);
                }
                Ok(None) => break,
                Err(err) => return Err(Error::driver_operation_failed(err)),
            }
        }

        Ok(ret)
    }
}
