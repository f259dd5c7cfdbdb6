/// Errors returned by `LinkedSequence` when a call violates its preconditions. The list is
/// never modified by a call that returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The index does not address a valid position. Contains the offending index and the size of
    /// the list at the time of the call.
    #[error("index {index} out of range for list of size {size}")]
    OutOfRange { index: usize, size: usize },

    /// The operation needs at least one element.
    #[error("operation on an empty list")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, ListError>;
