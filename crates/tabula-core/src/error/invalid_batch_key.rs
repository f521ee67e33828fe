use super::Error;

/// Error when a batch key is neither a 2-character prefix nor the `"0"` sentinel.
#[derive(Debug)]
pub(super) struct InvalidBatchKey {
    key: Box<str>,
}

impl std::error::Error for InvalidBatchKey {}

impl core::fmt::Display for InvalidBatchKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid batch key {:?}: expected a 2-character prefix or \"0\"",
            self.key
        )
    }
}

impl Error {
    /// Creates an invalid batch key error.
    pub fn invalid_batch_key(key: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidBatchKey(InvalidBatchKey {
            key: key.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid batch key error.
    pub fn is_invalid_batch_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidBatchKey(_))
    }
}
