
use core::{fmt, iter::FusedIterator};

use super::node_arena::NodeArena;

/// Borrowing iterator over a [`LinkedQueue`](super::LinkedQueue), from head to tail.
///
/// Created by [`LinkedQueue::iter`](super::LinkedQueue::iter). Iterating again means asking the
/// queue for a fresh iterator.
pub struct Iter<'a, T> {
  arena:     &'a NodeArena<T>,
  cursor:    Option<usize>,
  remaining: usize,
}

impl<'a, T> Iter<'a, T> {
  pub(crate) const fn new(arena: &'a NodeArena<T>, head: Option<usize>, len: usize) -> Self {
    Self { arena, cursor: head, remaining: len }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.arena.node(self.cursor.take()?)?;
    self.cursor = node.next();
    self.remaining = self.remaining.saturating_sub(1);
    Some(node.item())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Self { arena: self.arena, cursor: self.cursor, remaining: self.remaining }
  }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
