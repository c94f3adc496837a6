use core::fmt::{Display, Formatter};

/// Precondition failures reported by `IndexPriorityQueue` and the algorithms built on it.
///
/// Misuse that cannot corrupt the queue (pushing an index that is already present, popping
/// an empty queue, erasing an absent index) is not an error; those calls are no-ops.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The index is not in `0..capacity`.
    IndexOutOfRange { index: usize, capacity: usize },
    /// The operation needs at least one element.
    Empty,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IndexOutOfRange { index, capacity } => write!(
                fmt,
                "index {} is out of range for a queue with capacity {}",
                index, capacity
            ),
            Error::Empty => write!(fmt, "the queue is empty"),
        }
    }
}

impl std::error::Error for Error {}
