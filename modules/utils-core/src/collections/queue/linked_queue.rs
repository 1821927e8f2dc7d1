
use alloc::collections::TryReserveError;
use core::fmt;

use tracing::{debug, trace, warn};

use super::{IntoIter, Iter, LinkedQueueConfig, QueueError, node_arena::NodeArena, queue_node::QueueNode};

const LOG_TARGET: &str = "ckit::collections::linked_queue";

/// FIFO queue built on a singly-linked chain of nodes.
///
/// Items are appended at the tail and taken from the head. `enqueue`, `dequeue`, `front`,
/// `back` and `len` run in constant time; positional access (`at`, `remove_at`) walks the
/// chain from the head.
///
/// Nodes are owned by an internal arena. `head` is the start of the chain and `tail` is a plain
/// index kept only for constant-time appends. The queue never inspects its items; queue
/// borrowed data by instantiating it over a reference type such as `LinkedQueue<&'a U>`.
///
/// # Examples
///
/// ```
/// use ckit_utils_core_rs::collections::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
/// queue.enqueue("c").unwrap();
///
/// assert_eq!(queue.at(1), Some(&"b"));
/// assert_eq!(queue.remove_at(1), Some("b"));
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("c"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct LinkedQueue<T> {
  arena:  NodeArena<T>,
  head:   Option<usize>,
  tail:   Option<usize>,
  len:    usize,
  config: LinkedQueueConfig,
}

impl<T> LinkedQueue<T> {
  /// Target name used in emitted `tracing` events.
  pub const LOG_TARGET: &'static str = LOG_TARGET;

  /// Creates an empty queue with the default configuration.
  #[must_use]
  pub const fn new() -> Self {
    Self { arena: NodeArena::new(), head: None, tail: None, len: 0, config: LinkedQueueConfig::new(0) }
  }

  /// Creates an empty queue, preallocating the nodes requested by `config`.
  ///
  /// # Errors
  ///
  /// Returns [`TryReserveError`] when the initial node storage cannot be allocated.
  pub fn with_config(config: LinkedQueueConfig) -> Result<Self, TryReserveError> {
    let arena = NodeArena::with_capacity(config.initial_capacity())?;
    if config.initial_capacity() > 0 {
      debug!(target: LOG_TARGET, initial_capacity = config.initial_capacity(), "reserved queue nodes");
    }
    Ok(Self { arena, head: None, tail: None, len: 0, config })
  }

  /// Returns the configuration the queue was built with.
  #[must_use]
  pub const fn config(&self) -> &LinkedQueueConfig {
    &self.config
  }

  /// Returns the number of queued items.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Indicates whether the queue holds no items.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns how many nodes the queue can hold before its node storage must grow.
  #[must_use]
  pub const fn node_capacity(&self) -> usize {
    self.arena.capacity()
  }

  /// Resets the queue to its freshly constructed state.
  ///
  /// Items still held are dropped. The configuration is kept.
  pub fn init(&mut self) {
    let discarded = self.len;
    self.len = 0;
    self.drained();
    debug!(target: LOG_TARGET, discarded, "queue reinitialised");
  }

  /// Dequeues every item and drops it.
  ///
  /// Afterwards the queue is empty and ready for reuse.
  pub fn destroy(&mut self) {
    let mut discarded = 0_usize;
    while self.dequeue().is_some() {
      discarded += 1;
    }
    debug!(target: LOG_TARGET, discarded, "queue destroyed");
  }

  /// Appends an item at the tail.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::AllocError`] carrying `item` when no node can be allocated for it.
  /// The queue is left unchanged in that case.
  pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
    let index = match self.arena.insert(QueueNode::new(item)) {
      | Ok(index) => index,
      | Err(node) => {
        warn!(
          target: LOG_TARGET,
          len = self.len,
          node_capacity = self.arena.capacity(),
          "queue node allocation failed"
        );
        return Err(QueueError::AllocError(node.into_item()));
      },
    };

    match self.tail.and_then(|tail| self.arena.node_mut(tail)) {
      | Some(last) => last.set_next(Some(index)),
      | None => self.head = Some(index),
    }
    self.tail = Some(index);
    self.len += 1;
    debug_assert_eq!(self.arena.occupied(), self.len);
    Ok(())
  }

  /// Enqueues every item yielded by `items`, in order.
  ///
  /// # Errors
  ///
  /// Stops at the first allocation failure and returns [`QueueError::AllocError`] with the item
  /// that could not be stored. Items enqueued before the failure stay queued.
  pub fn try_extend<I>(&mut self, items: I) -> Result<(), QueueError<T>>
  where
    I: IntoIterator<Item = T>, {
    for item in items {
      self.enqueue(item)?;
    }
    Ok(())
  }

  /// Removes and returns the item at the head, or `None` when the queue is empty.
  pub fn dequeue(&mut self) -> Option<T> {
    let node = self.arena.remove(self.head?)?;
    self.head = node.next();
    self.len -= 1;
    if self.head.is_none() {
      self.drained();
    }
    Some(node.into_item())
  }

  /// Removes and returns the item at zero-based position `pos`.
  ///
  /// Returns `None` when `pos >= len()`.
  pub fn remove_at(&mut self, pos: usize) -> Option<T> {
    if pos >= self.len {
      self.trace_out_of_range(pos);
      return None;
    }
    if pos == 0 {
      return self.dequeue();
    }

    let prev = self.index_at(pos - 1)?;
    let target = self.arena.node(prev)?.next()?;
    let node = self.arena.remove(target)?;
    if let Some(prev_node) = self.arena.node_mut(prev) {
      prev_node.set_next(node.next());
    }
    if self.tail == Some(target) {
      self.tail = Some(prev);
    }
    self.len -= 1;
    Some(node.into_item())
  }

  /// Returns the item at zero-based position `pos` without removing it.
  ///
  /// Returns `None` when `pos >= len()`.
  #[must_use]
  pub fn at(&self, pos: usize) -> Option<&T> {
    if pos >= self.len {
      self.trace_out_of_range(pos);
      return None;
    }
    self.index_at(pos).and_then(|index| self.arena.node(index)).map(QueueNode::item)
  }

  /// Returns a mutable reference to the item at zero-based position `pos`.
  ///
  /// Returns `None` when `pos >= len()`.
  #[must_use]
  pub fn at_mut(&mut self, pos: usize) -> Option<&mut T> {
    if pos >= self.len {
      self.trace_out_of_range(pos);
      return None;
    }
    let index = self.index_at(pos)?;
    self.arena.node_mut(index).map(QueueNode::item_mut)
  }

  /// Returns the item at the head.
  #[must_use]
  pub fn front(&self) -> Option<&T> {
    self.head.and_then(|index| self.arena.node(index)).map(QueueNode::item)
  }

  /// Returns the item at the tail.
  #[must_use]
  pub fn back(&self) -> Option<&T> {
    self.tail.and_then(|index| self.arena.node(index)).map(QueueNode::item)
  }

  /// Calls `visit` on every item from head to tail.
  pub fn iterate<F>(&self, visit: F)
  where
    F: FnMut(&T), {
    self.iter().for_each(visit);
  }

  /// Calls `visit` on every item from head to tail, allowing the items to be modified.
  pub fn iterate_mut<F>(&mut self, mut visit: F)
  where
    F: FnMut(&mut T), {
    let mut cursor = self.head;
    while let Some(node) = cursor.and_then(|index| self.arena.node_mut(index)) {
      visit(node.item_mut());
      cursor = node.next();
    }
  }

  /// Returns an iterator over the items from head to tail.
  #[must_use]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(&self.arena, self.head, self.len)
  }

  fn index_at(&self, pos: usize) -> Option<usize> {
    let mut cursor = self.head;
    for _ in 0..pos {
      cursor = self.arena.node(cursor?)?.next();
    }
    cursor
  }

  fn drained(&mut self) {
    self.head = None;
    self.tail = None;
    if self.config.reclaim_on_empty() {
      self.arena.release();
      debug!(target: LOG_TARGET, "released queue node storage");
    } else {
      self.arena.clear();
    }
  }

  fn trace_out_of_range(&self, pos: usize) {
    trace!(target: LOG_TARGET, pos, len = self.len, "queue position out of range");
  }
}

impl<T> Default for LinkedQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len == other.len && self.iter().eq(other.iter())
  }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T> IntoIterator for LinkedQueue<T> {
  type IntoIter = IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self)
  }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
  type IntoIter = Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
