use core::iter::FusedIterator;

use super::LinkedQueue;

/// Owning iterator that dequeues items in FIFO order.
///
/// Created by the `IntoIterator` implementation of [`LinkedQueue`].
#[derive(Debug)]
pub struct IntoIter<T> {
  queue: LinkedQueue<T>,
}

impl<T> IntoIter<T> {
  pub(crate) const fn new(queue: LinkedQueue<T>) -> Self {
    Self { queue }
  }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    self.queue.dequeue()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.queue.len(), Some(self.queue.len()))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
