
use alloc::{collections::TryReserveError, vec::Vec};
use core::mem;

use super::{node_slot::NodeSlot, queue_node::QueueNode};

/// Slot storage owning every node of a queue.
///
/// Released slots are chained into a free list and handed out again before the backing
/// vector grows. Growth goes through `try_reserve`, so exhaustion is reported instead of
/// aborting.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
  slots:     Vec<NodeSlot<T>>,
  free_head: Option<usize>,
  occupied:  usize,
}

impl<T> NodeArena<T> {
  pub(crate) const fn new() -> Self {
    Self { slots: Vec::new(), free_head: None, occupied: 0 }
  }

  /// Creates an arena with room for at least `capacity` nodes.
  pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
    let mut arena = Self::new();
    arena.slots.try_reserve_exact(capacity)?;
    Ok(arena)
  }

  /// Number of live nodes.
  pub(crate) const fn occupied(&self) -> usize {
    self.occupied
  }

  /// Number of nodes the arena can hold without reallocating.
  pub(crate) const fn capacity(&self) -> usize {
    self.slots.capacity()
  }

  /// Stores `node` and returns its index. Gives the node back when storage cannot grow.
  pub(crate) fn insert(&mut self, node: QueueNode<T>) -> Result<usize, QueueNode<T>> {
    if let Some(index) = self.free_head
      && let Some(NodeSlot::Vacant { next_free }) = self.slots.get(index)
    {
      self.free_head = *next_free;
      self.slots[index] = NodeSlot::Occupied(node);
      self.occupied += 1;
      return Ok(index);
    }

    if self.slots.len() == self.slots.capacity() && self.slots.try_reserve(1).is_err() {
      return Err(node);
    }
    let index = self.slots.len();
    self.slots.push(NodeSlot::Occupied(node));
    self.occupied += 1;
    Ok(index)
  }

  /// Takes the node at `index` out of the arena, recycling its slot.
  pub(crate) fn remove(&mut self, index: usize) -> Option<QueueNode<T>> {
    let slot = self.slots.get_mut(index)?;
    if slot.node().is_none() {
      return None;
    }
    let taken = mem::replace(slot, NodeSlot::Vacant { next_free: self.free_head });
    self.free_head = Some(index);
    self.occupied -= 1;
    match taken {
      | NodeSlot::Occupied(node) => Some(node),
      | NodeSlot::Vacant { .. } => None,
    }
  }

  pub(crate) fn node(&self, index: usize) -> Option<&QueueNode<T>> {
    self.slots.get(index).and_then(NodeSlot::node)
  }

  pub(crate) fn node_mut(&mut self, index: usize) -> Option<&mut QueueNode<T>> {
    self.slots.get_mut(index).and_then(NodeSlot::node_mut)
  }

  /// Drops every node while keeping the allocation.
  pub(crate) fn clear(&mut self) {
    self.slots.clear();
    self.free_head = None;
    self.occupied = 0;
  }

  /// Drops every node and releases the allocation.
  pub(crate) fn release(&mut self) {
    self.slots = Vec::new();
    self.free_head = None;
    self.occupied = 0;
  }
}
