use super::FieldKind;

/// One persisted attribute of a [`Model`](super::Model).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The column name. Unique within the model and a valid SQL identifier.
    pub name: String,

    /// What kind of value the field holds.
    pub kind: FieldKind,

    /// True if the column rejects NULL.
    pub not_null: bool,

    /// True if no two rows may share a value.
    pub unique: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Field {
        Field {
            name: name.into(),
            kind,
            not_null: false,
            unique: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Field {
        Field::new(name, FieldKind::Text)
    }

    pub fn decimal(name: impl Into<String>, precision: u8) -> Field {
        Field::new(name, FieldKind::Decimal { precision })
    }

    pub fn link(name: impl Into<String>, target: impl Into<String>) -> Field {
        Field::new(
            name,
            FieldKind::Link {
                target: target.into(),
            },
        )
    }

    pub fn boolean(name: impl Into<String>) -> Field {
        Field::new(name, FieldKind::Boolean)
    }

    pub fn date(name: impl Into<String>) -> Field {
        Field::new(name, FieldKind::Date)
    }

    /// Marks the field `not null`.
    pub fn not_null(mut self) -> Field {
        self.not_null = true;
        self
    }

    /// Marks the field `unique`.
    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }
}
