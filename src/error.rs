use thiserror::Error;

/// The error type shared by every container in this crate.
///
/// Operations check their preconditions before touching any storage, so a
/// returned error always means the structure is exactly as it was before the
/// call.
///
/// # Examples
///
/// ```
/// # use lineal::{DynArray, Error};
/// let mut arr: DynArray<i32> = DynArray::new();
/// assert_eq!(arr.pop(), Err(Error::Empty));
/// assert_eq!(arr.get(3), Err(Error::OutOfBounds { index: 3, len: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside the valid range for the operation.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The structure's logical length at the time of the call.
        len: usize,
    },
    /// An operation that needs at least one element was called on an empty
    /// structure (`pop`, `top`, `dequeue`, `front`, `rear`, ...).
    #[error("operation requires a non-empty structure")]
    Empty,
}

/// Convenience alias used by all fallible container operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn display_messages() {
        let err = Error::OutOfBounds { index: 5, len: 3 };
        assert_eq!(format!("{err}"), "index 5 out of bounds for length 3");
        assert_eq!(
            format!("{}", Error::Empty),
            "operation requires a non-empty structure"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(Error::Empty, Error::Empty);
        assert_ne!(
            Error::Empty,
            Error::OutOfBounds { index: 0, len: 0 }
        );
    }
}
