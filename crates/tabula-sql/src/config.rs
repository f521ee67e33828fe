use crate::{Catalog, Flavor, Serializer};

use serde::Deserialize;
use tabula_core::{schema::FieldKindTag, Error, Result};

use std::{collections::BTreeMap, path::Path};

/// Configuration for generating SQL.
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// flavor = "sqlite"
///
/// [types]
/// boolean = "tinyint(1)"
/// date = "date"
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// SQL dialect to serialize for
    pub flavor: Flavor,

    /// Type clauses registered on top of the default catalog
    pub types: BTreeMap<FieldKindTag, String>,
}

/// On-disk form of [`Config`]; kind names are resolved after parsing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    flavor: Flavor,

    #[serde(default)]
    types: BTreeMap<String, String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect
    pub fn flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Register a type clause for a field kind
    pub fn type_clause(mut self, tag: FieldKindTag, template: impl Into<String>) -> Self {
        self.types.insert(tag, template.into());
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(s).map_err(|err| Error::invalid_config(err.message()))?;

        let types: BTreeMap<FieldKindTag, String> = file
            .types
            .into_iter()
            .map(|(kind, template)| Ok((kind.parse::<FieldKindTag>()?, template)))
            .collect::<Result<_>>()?;

        Ok(Self {
            flavor: file.flavor,
            types,
        })
    }

    /// Load the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(Error::from)
            .and_then(|contents| Self::from_toml_str(&contents))
            .map_err(|err| err.context(Error::invalid_config(path.display().to_string())))
    }

    /// The default catalog with the configured type clauses registered.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();

        for (tag, template) in &self.types {
            catalog.register(*tag, template.as_str());
        }

        catalog
    }

    pub fn serializer(&self) -> Serializer {
        Serializer::new(self.flavor)
    }
}
