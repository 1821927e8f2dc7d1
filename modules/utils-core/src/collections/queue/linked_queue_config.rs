
/// Configuration applied when constructing a [`LinkedQueue`](super::LinkedQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkedQueueConfig {
  initial_capacity: usize,
  reclaim_on_empty: bool,
}

impl LinkedQueueConfig {
  /// Creates a configuration that preallocates `initial_capacity` nodes.
  #[must_use]
  pub const fn new(initial_capacity: usize) -> Self {
    Self { initial_capacity, reclaim_on_empty: false }
  }

  /// Returns a copy with the reclaim flag replaced.
  ///
  /// When enabled, node storage is released every time the queue drains to empty.
  #[must_use]
  pub const fn with_reclaim_on_empty(mut self, reclaim_on_empty: bool) -> Self {
    self.reclaim_on_empty = reclaim_on_empty;
    self
  }

  /// Returns a copy with the initial capacity replaced.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  /// Returns the number of nodes preallocated on construction.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Indicates whether node storage is released when the queue becomes empty.
  #[must_use]
  pub const fn reclaim_on_empty(&self) -> bool {
    self.reclaim_on_empty
  }
}
