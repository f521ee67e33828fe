pub mod batch;
pub use batch::{BatchKey, BatchSelector};

mod memory;
pub use memory::MemoryStore;

pub use tabula_core::{bail, err, record, schema, Error, Model, Result, Store};

pub mod stmt {
    pub use tabula_core::stmt::*;
}

pub mod sql {
    pub use tabula_sql::*;
}

pub use tabula_sql::{Catalog, Config, Flavor, Serializer};

#[cfg(feature = "sqlite")]
pub use tabula_driver_sqlite::Sqlite;
