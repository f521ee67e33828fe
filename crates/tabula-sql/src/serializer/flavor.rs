use super::Serializer;

/// The SQL dialect a [`Serializer`] targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// The canonical dialect: `int not null auto_increment` primary keys
    /// and `?` placeholders.
    #[default]
    Mysql,

    /// Inline `integer primary key autoincrement` primary keys and `?N`
    /// placeholders.
    Sqlite,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }

    pub(super) fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::new(Flavor::default())
    }
}
