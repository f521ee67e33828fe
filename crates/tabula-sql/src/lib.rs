pub mod catalog;
pub use catalog::{Catalog, TypeTemplate};

pub mod config;
pub use config::Config;

pub mod serializer;
pub use serializer::{Flavor, Params, Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;
