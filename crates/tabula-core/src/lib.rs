#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Model;

pub mod stmt;

mod store;
pub use store::Store;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
