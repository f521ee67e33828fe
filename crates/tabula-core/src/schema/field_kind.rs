use crate::Error;

use std::{fmt, str::FromStr};

/// The abstract kind of a persisted field, with its kind-specific parameters.
///
/// The kind says what the value *is*; the SQL column type it is stored as
/// is decided by the field type catalog, keyed by [`FieldKindTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form text.
    Text,

    /// A fractional number stored with `precision` digits after the point.
    Decimal { precision: u8 },

    /// A reference to the primary key of another table.
    Link { target: String },

    /// A true/false flag.
    Boolean,

    /// A calendar date.
    Date,
}

/// Identifies a [`FieldKind`] without its parameters.
///
/// Used as the key of the field type catalog and in configuration files
/// (`text`, `decimal`, `link`, `boolean`, `date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKindTag {
    Text,
    Decimal,
    Link,
    Boolean,
    Date,
}

impl FieldKind {
    pub fn tag(&self) -> FieldKindTag {
        match self {
            FieldKind::Text => FieldKindTag::Text,
            FieldKind::Decimal { .. } => FieldKindTag::Decimal,
            FieldKind::Link { .. } => FieldKindTag::Link,
            FieldKind::Boolean => FieldKindTag::Boolean,
            FieldKind::Date => FieldKindTag::Date,
        }
    }

    /// Digits after the decimal point, for kinds that carry a precision.
    pub fn precision(&self) -> Option<u8> {
        match self {
            FieldKind::Decimal { precision } => Some(*precision),
            _ => None,
        }
    }

    /// The table a link points at.
    pub fn link_target(&self) -> Option<&str> {
        match self {
            FieldKind::Link { target } => Some(target),
            _ => None,
        }
    }

    /// True if values of this kind support ordered comparison.
    pub fn is_numeric_comparable(&self) -> bool {
        matches!(self, FieldKind::Decimal { .. } | FieldKind::Link { .. })
    }

    /// True if values of this kind can be matched against a `LIKE` pattern.
    ///
    /// Links are integer keys; they match on their decimal string form.
    pub fn is_pattern_matchable(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Link { .. })
    }
}

impl FieldKindTag {
    pub const ALL: [FieldKindTag; 5] = [
        FieldKindTag::Text,
        FieldKindTag::Decimal,
        FieldKindTag::Link,
        FieldKindTag::Boolean,
        FieldKindTag::Date,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKindTag::Text => "text",
            FieldKindTag::Decimal => "decimal",
            FieldKindTag::Link => "link",
            FieldKindTag::Boolean => "boolean",
            FieldKindTag::Date => "date",
        }
    }
}

impl FromStr for FieldKindTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKindTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| Error::invalid_config(format!("unknown field kind `{s}`")))
    }
}

impl fmt::Display for FieldKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_kinds() {
        assert_eq!(FieldKind::Text.tag(), FieldKindTag::Text);
        assert_eq!(
            FieldKind::Decimal { precision: 2 }.tag(),
            FieldKindTag::Decimal
        );
        assert_eq!(
            FieldKind::Link {
                target: "client".into()
            }
            .tag(),
            FieldKindTag::Link
        );
        assert_eq!(FieldKind::Boolean.tag(), FieldKindTag::Boolean);
        assert_eq!(FieldKind::Date.tag(), FieldKindTag::Date);
    }

    #[test]
    fn comparability() {
        assert!(FieldKind::Decimal { precision: 2 }.is_numeric_comparable());
        assert!(!FieldKind::Text.is_numeric_comparable());
        assert!(!FieldKind::Date.is_numeric_comparable());

        assert!(FieldKind::Text.is_pattern_matchable());
        assert!(!FieldKind::Boolean.is_pattern_matchable());
        assert!(!FieldKind::Decimal { precision: 2 }.is_pattern_matchable());
    }

    #[test]
    fn tag_names() {
        let names: Vec<_> = FieldKindTag::ALL.iter().map(|tag| tag.to_string()).collect();
        assert_eq!(names, ["text", "decimal", "link", "boolean", "date"]);

        for tag in FieldKindTag::ALL {
            assert_eq!(tag.as_str().parse::<FieldKindTag>().unwrap(), tag);
        }
    }

    #[test]
    fn unknown_tag() {
        let err = "blob".parse::<FieldKindTag>().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: unknown field kind `blob`");
    }
}
