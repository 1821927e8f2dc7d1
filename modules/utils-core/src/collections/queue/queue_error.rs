
use core::fmt;

/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// Node storage could not be grown. Contains the element that was attempted to be enqueued.
  AllocError(T),
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by the error.
  #[must_use]
  pub fn into_item(self) -> T {
    match self {
      | Self::AllocError(item) => item,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::AllocError(_) => write!(f, "failed to allocate a queue node"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
