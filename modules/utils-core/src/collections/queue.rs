//! Singly-linked FIFO queue with positional access.

mod into_iter;
mod iter;
mod linked_queue;
mod linked_queue_config;
mod node_arena;
mod node_slot;
mod queue_error;
mod queue_node;

pub use into_iter::IntoIter;
pub use iter::Iter;
pub use linked_queue::LinkedQueue;
pub use linked_queue_config::LinkedQueueConfig;
pub use queue_error::QueueError;
