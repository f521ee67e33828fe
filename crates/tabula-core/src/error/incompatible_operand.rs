use super::Error;

/// Error when a condition operand does not fit the column it targets.
///
/// This occurs when:
/// - An ordered comparison targets a column that is not numeric-comparable
/// - A comparison operand is not a number
/// - A pattern match targets a column that is neither text nor key-typed
/// - A pattern contains wildcard characters without escaping enabled
#[derive(Debug)]
pub(super) struct IncompatibleOperand {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for IncompatibleOperand {}

impl core::fmt::Display for IncompatibleOperand {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "incompatible operand for `{}`: {}",
            self.column, self.message
        )
    }
}

impl Error {
    /// Creates an incompatible operand error for `column`.
    pub fn incompatible_operand(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IncompatibleOperand(IncompatibleOperand {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an incompatible operand error.
    pub fn is_incompatible_operand(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IncompatibleOperand(_))
    }
}
