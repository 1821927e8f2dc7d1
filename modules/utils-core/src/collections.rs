pub mod queue;

pub use queue::{LinkedQueue, LinkedQueueConfig, QueueError};
