#[cfg(feature = "collections_adapter")]
pub mod adapter;
#[cfg(feature = "collections_adapter")]
pub use adapter::{ContainerCommon, OutOfRangeError, Queue, QueueLike, Stack, StackLike};
