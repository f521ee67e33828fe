use super::Error;

/// Error when a field's kind has no entry in the field type catalog.
///
/// Raised by the schema generator before any DDL is produced. Register a
/// type clause for the kind to resolve it.
#[derive(Debug)]
pub(super) struct UnsupportedFieldKind {
    table: Box<str>,
    field: Box<str>,
    kind: Box<str>,
}

impl std::error::Error for UnsupportedFieldKind {}

impl core::fmt::Display for UnsupportedFieldKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported field kind: {} (field `{}.{}`)",
            self.kind, self.table, self.field
        )
    }
}

impl Error {
    /// Creates an unsupported field kind error for `table.field`.
    pub fn unsupported_field_kind(
        table: impl Into<String>,
        field: impl Into<String>,
        kind: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedFieldKind(UnsupportedFieldKind {
            table: table.into().into(),
            field: field.into().into(),
            kind: kind.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported field kind error.
    pub fn is_unsupported_field_kind(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedFieldKind(_))
    }
}
