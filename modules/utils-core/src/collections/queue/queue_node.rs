/// Node holding a queued item and the arena index of its successor.
#[derive(Debug)]
pub(crate) struct QueueNode<T> {
  item: T,
  next: Option<usize>,
}

impl<T> QueueNode<T> {
  /// Creates a detached node.
  pub(crate) const fn new(item: T) -> Self {
    Self { item, next: None }
  }

  pub(crate) const fn item(&self) -> &T {
    &self.item
  }

  pub(crate) const fn item_mut(&mut self) -> &mut T {
    &mut self.item
  }

  pub(crate) const fn next(&self) -> Option<usize> {
    self.next
  }

  pub(crate) const fn set_next(&mut self, next: Option<usize>) {
    self.next = next;
  }

  pub(crate) fn into_item(self) -> T {
    self.item
  }
}
