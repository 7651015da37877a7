use thiserror::Error;

/// Errors reported by [`UnrolledList`](crate::UnrolledList) and [`ListIter`](crate::ListIter).
///
/// Every failing call leaves the list untouched and internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested block capacity is below [`MIN_NODE_CAPACITY`](crate::MIN_NODE_CAPACITY).
    #[error("invalid node capacity {capacity}: must be at least {min}")]
    InvalidNodeCapacity { capacity: usize, min: usize },

    /// A positional operation was given an index outside of its valid range.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A list iterator was advanced or retreated past the end of the sequence.
    #[error("no such element")]
    NoSuchElement,

    /// The list was structurally modified behind the back of a list iterator, or the
    /// iterator was handed a list other than the one that created it.
    #[error("list was structurally modified outside of this iterator")]
    ConcurrentModification,

    /// `remove` or `set` was called on a list iterator that has no current element.
    #[error("no current element: call next or previous first")]
    NoCurrentElement,

    /// The operation is not supported by this container.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
