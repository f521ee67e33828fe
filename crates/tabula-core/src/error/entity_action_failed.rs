use super::Error;

/// Error when a caller-supplied action fails while processing a batch.
///
/// Used as context around the action's own error, so the chain reads
/// `entity action failed: <table> <key>: <cause>`.
#[derive(Debug)]
pub(super) struct EntityActionFailed {
    table: Box<str>,
    key: Box<str>,
}

impl std::error::Error for EntityActionFailed {}

impl core::fmt::Display for EntityActionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "entity action failed: {} {}", self.table, self.key)
    }
}

impl Error {
    /// Creates an entity action failure for the record of `table` identified by `key`.
    pub fn entity_action_failed(table: impl Into<String>, key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EntityActionFailed(EntityActionFailed {
            table: table.into().into(),
            key: key.into().into(),
        }))
    }

    /// Returns `true` if this error is an entity action failure.
    pub fn is_entity_action_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EntityActionFailed(_))
    }
}
