use super::queue_node::QueueNode;

/// Arena slot: either a live node or a link in the free list.
#[derive(Debug)]
pub(crate) enum NodeSlot<T> {
  Occupied(QueueNode<T>),
  Vacant { next_free: Option<usize> },
}

impl<T> NodeSlot<T> {
  pub(crate) const fn node(&self) -> Option<&QueueNode<T>> {
    match self {
      | Self::Occupied(node) => Some(node),
      | Self::Vacant { .. } => None,
    }
  }

  pub(crate) const fn node_mut(&mut self) -> Option<&mut QueueNode<T>> {
    match self {
      | Self::Occupied(node) => Some(node),
      | Self::Vacant { .. } => None,
    }
  }
}
